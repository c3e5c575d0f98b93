//! The fixed subsystem tag set and the per-design mass budget built from it.

use serde::Serialize;

use crate::properties::MassProperties;

/// Every subsystem the empty-mass aggregation accounts for. The set is closed;
/// `MassBreakdown` carries one entry per tag so a missing subsystem is a
/// compile error, not a silent accounting gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsystem {
    Passengers,
    Seats,
    Apu,
    PayloadProportional,
    Buoyancy,
    Wing,
    HStab,
    VStab,
    Fuselage,
    Engines,
    MainLandingGear,
    NoseLandingGear,
    Nacelles,
    EngineControls,
    Starter,
    FlightControls,
    Instruments,
    Hydraulics,
    Electrical,
    Avionics,
    AntiIce,
    HandlingGear,
    Fuel,
    Tanks,
}

impl Subsystem {
    pub const ALL: [Subsystem; 24] = [
        Subsystem::Passengers,
        Subsystem::Seats,
        Subsystem::Apu,
        Subsystem::PayloadProportional,
        Subsystem::Buoyancy,
        Subsystem::Wing,
        Subsystem::HStab,
        Subsystem::VStab,
        Subsystem::Fuselage,
        Subsystem::Engines,
        Subsystem::MainLandingGear,
        Subsystem::NoseLandingGear,
        Subsystem::Nacelles,
        Subsystem::EngineControls,
        Subsystem::Starter,
        Subsystem::FlightControls,
        Subsystem::Instruments,
        Subsystem::Hydraulics,
        Subsystem::Electrical,
        Subsystem::Avionics,
        Subsystem::AntiIce,
        Subsystem::HandlingGear,
        Subsystem::Fuel,
        Subsystem::Tanks,
    ];

    /// Key used in the printout table and export sidecars.
    pub fn key(self) -> &'static str {
        match self {
            Subsystem::Passengers => "passengers",
            Subsystem::Seats => "seats",
            Subsystem::Apu => "apu",
            Subsystem::PayloadProportional => "payload_proportional_weights",
            Subsystem::Buoyancy => "buoyancy",
            Subsystem::Wing => "wing",
            Subsystem::HStab => "hstab",
            Subsystem::VStab => "vstab",
            Subsystem::Fuselage => "fuselage",
            Subsystem::Engines => "engines",
            Subsystem::MainLandingGear => "main_landing_gear",
            Subsystem::NoseLandingGear => "nose_landing_gear",
            Subsystem::Nacelles => "nacelles",
            Subsystem::EngineControls => "engine_controls",
            Subsystem::Starter => "starter",
            Subsystem::FlightControls => "flight_controls",
            Subsystem::Instruments => "instruments",
            Subsystem::Hydraulics => "hydraulics",
            Subsystem::Electrical => "electrical",
            Subsystem::Avionics => "avionics",
            Subsystem::AntiIce => "anti-ice",
            Subsystem::HandlingGear => "handling_gear",
            Subsystem::Fuel => "fuel",
            Subsystem::Tanks => "tanks",
        }
    }

    /// Display label for the mass-budget chart.
    pub fn label(self) -> &'static str {
        match self {
            Subsystem::Passengers => "Passengers",
            Subsystem::Seats => "Seats",
            Subsystem::Apu => "APU",
            Subsystem::PayloadProportional => {
                "FAs, Food, Galleys, Lavatories,\nLuggage Hold, Doors, Lighting,\nAir Cond., Entertainment"
            }
            Subsystem::Buoyancy => "Buoyancy",
            Subsystem::Wing => "Wing Structure",
            Subsystem::HStab => "H-Stab Structure",
            Subsystem::VStab => "V-Stab Structure",
            Subsystem::Fuselage => "Fuselage Structure",
            Subsystem::Engines => "Engines",
            Subsystem::MainLandingGear => "Main Landing Gear",
            Subsystem::NoseLandingGear => "Nose Landing Gear",
            Subsystem::Nacelles => "Nacelles",
            Subsystem::EngineControls => "Engine Controls",
            Subsystem::Starter => "Starter",
            Subsystem::FlightControls => "Flight Controls",
            Subsystem::Instruments => "Instruments",
            Subsystem::Hydraulics => "Hydraulics",
            Subsystem::Electrical => "Electrical",
            Subsystem::Avionics => "Avionics",
            Subsystem::AntiIce => "Anti-Ice",
            Subsystem::HandlingGear => "Handling Gear",
            Subsystem::Fuel => "Fuel",
            Subsystem::Tanks => "Tanks",
        }
    }

    /// Whether this subsystem counts toward operating empty mass. Passengers
    /// and fuel are the two excluded payload/consumable entries.
    pub fn counts_toward_empty(self) -> bool {
        !matches!(self, Subsystem::Passengers | Subsystem::Fuel)
    }
}

/// The complete per-subsystem mass budget of one design. Struct construction
/// forces every subsystem to be assigned.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MassBreakdown {
    pub passengers: MassProperties,
    pub seats: MassProperties,
    pub apu: MassProperties,
    pub payload_proportional: MassProperties,
    pub buoyancy: MassProperties,
    pub wing: MassProperties,
    pub hstab: MassProperties,
    pub vstab: MassProperties,
    pub fuselage: MassProperties,
    pub engines: MassProperties,
    pub main_landing_gear: MassProperties,
    pub nose_landing_gear: MassProperties,
    pub nacelles: MassProperties,
    pub engine_controls: MassProperties,
    pub starter: MassProperties,
    pub flight_controls: MassProperties,
    pub instruments: MassProperties,
    pub hydraulics: MassProperties,
    pub electrical: MassProperties,
    pub avionics: MassProperties,
    pub anti_ice: MassProperties,
    pub handling_gear: MassProperties,
    pub fuel: MassProperties,
    pub tanks: MassProperties,
}

impl MassBreakdown {
    /// Entry for one subsystem tag.
    pub fn get(&self, subsystem: Subsystem) -> MassProperties {
        match subsystem {
            Subsystem::Passengers => self.passengers,
            Subsystem::Seats => self.seats,
            Subsystem::Apu => self.apu,
            Subsystem::PayloadProportional => self.payload_proportional,
            Subsystem::Buoyancy => self.buoyancy,
            Subsystem::Wing => self.wing,
            Subsystem::HStab => self.hstab,
            Subsystem::VStab => self.vstab,
            Subsystem::Fuselage => self.fuselage,
            Subsystem::Engines => self.engines,
            Subsystem::MainLandingGear => self.main_landing_gear,
            Subsystem::NoseLandingGear => self.nose_landing_gear,
            Subsystem::Nacelles => self.nacelles,
            Subsystem::EngineControls => self.engine_controls,
            Subsystem::Starter => self.starter,
            Subsystem::FlightControls => self.flight_controls,
            Subsystem::Instruments => self.instruments,
            Subsystem::Hydraulics => self.hydraulics,
            Subsystem::Electrical => self.electrical,
            Subsystem::Avionics => self.avionics,
            Subsystem::AntiIce => self.anti_ice,
            Subsystem::HandlingGear => self.handling_gear,
            Subsystem::Fuel => self.fuel,
            Subsystem::Tanks => self.tanks,
        }
    }

    /// Iterate all subsystem entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Subsystem, MassProperties)> + '_ {
        Subsystem::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Operating empty mass: every subsystem except passengers and fuel.
    pub fn empty(&self) -> MassProperties {
        self.iter()
            .filter(|(s, _)| s.counts_toward_empty())
            .map(|(_, p)| p)
            .sum()
    }

    /// Empty mass less the lifting-surface structure (the fuselage group).
    pub fn empty_less_lifting_surfaces(&self) -> MassProperties {
        self.empty() - (self.wing + self.hstab + self.vstab)
    }

    /// Empty mass plus passengers: the zero-fuel mass state.
    pub fn with_pax(&self) -> MassProperties {
        self.empty() + self.passengers
    }

    /// Take-off gross mass: empty + passengers + fuel.
    pub fn togw(&self) -> MassProperties {
        self.with_pax() + self.fuel
    }

    /// The half-fuel reference state used for trim and aero evaluation.
    pub fn half_fuel(&self) -> MassProperties {
        self.with_pax() + self.fuel * 0.5
    }
}
