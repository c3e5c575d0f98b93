//! Network-scale hydrogen supply chain energetics.
//!
//! Estimates the electrical energy needed to produce, liquefy, and deliver
//! the daily liquid-hydrogen demand of a 100-airport transport network.
//! Losses compound multiplicatively along the chain (boil-off in flight,
//! distribution, storage), then electrolysis and liquefaction specific
//! energy consumption convert the delivered mass into grid load.

use lh2_core::constants::J_PER_KWH;

/// Loss fractions and specific energy consumption of the supply chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplyChain {
    /// In-flight boil-off loss fraction.
    pub flight_loss: f64,
    /// Distribution (transport to airport) loss fraction.
    pub distribution_loss: f64,
    /// Storage boil-off loss fraction.
    pub storage_loss: f64,
    /// Electrolysis specific energy consumption [kWh/kg].
    pub electrolysis_kwh_per_kg: f64,
    /// Liquefaction specific energy consumption [kWh/kg].
    pub liquefaction_kwh_per_kg: f64,
}

impl SupplyChain {
    /// Point estimates for a near-term green-hydrogen supply chain.
    pub fn baseline() -> Self {
        Self {
            flight_loss: 0.0002e-2,
            distribution_loss: 0.05e-2,
            storage_loss: 0.035e-2,
            electrolysis_kwh_per_kg: 50.0,
            liquefaction_kwh_per_kg: 11.9,
        }
    }

    /// Compound loss fraction over the whole chain.
    pub fn total_loss_fraction(&self) -> f64 {
        (1.0 + self.flight_loss) * (1.0 + self.distribution_loss) * (1.0 + self.storage_loss) - 1.0
    }
}

/// Network traffic demand and per-seat fuel burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkDemand {
    /// Daily passenger transport demand [pax-km/day].
    pub pax_km_per_day: f64,
    /// Fuel consumption per unit transport [kg/pax-km].
    pub fuel_kg_per_pax_km: f64,
}

impl NetworkDemand {
    /// Traffic carried by the world's 100 busiest airports, with fuel burn
    /// from the point-design mission.
    pub fn top_100_airports() -> Self {
        Self {
            pax_km_per_day: 8.053e9,
            fuel_kg_per_pax_km: 5.83e-3,
        }
    }

    /// Daily liquid-hydrogen mass delivered to aircraft [kg/day].
    pub fn fuel_mass_kg_per_day(&self) -> f64 {
        self.pax_km_per_day * self.fuel_kg_per_pax_km
    }
}

/// Electrical energy required by the network, per day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkEnergy {
    /// Hydrogen mass delivered to aircraft [kg/day].
    pub fuel_mass_kg_per_day: f64,
    /// Hydrogen mass produced, including chain losses [kg/day].
    pub produced_mass_kg_per_day: f64,
    /// Compound supply-chain loss fraction.
    pub loss_fraction: f64,
    /// Electrical energy demand [kWh/day].
    pub energy_kwh_per_day: f64,
}

impl NetworkEnergy {
    /// Electrical energy demand [TWh/day].
    pub fn energy_twh_per_day(&self) -> f64 {
        self.energy_kwh_per_day / 1e9
    }

    /// Mean electrical power draw [W].
    pub fn mean_power_w(&self) -> f64 {
        self.energy_kwh_per_day * J_PER_KWH / 86_400.0
    }
}

/// Sizes the electrical supply for a network demand and supply chain.
pub fn size_network(demand: NetworkDemand, chain: SupplyChain) -> NetworkEnergy {
    let fuel_mass_kg_per_day = demand.fuel_mass_kg_per_day();
    let loss_fraction = chain.total_loss_fraction();
    let produced_mass_kg_per_day = fuel_mass_kg_per_day * (1.0 + loss_fraction);
    let energy_kwh_per_day = produced_mass_kg_per_day
        * (chain.electrolysis_kwh_per_kg + chain.liquefaction_kwh_per_kg);
    NetworkEnergy {
        fuel_mass_kg_per_day,
        produced_mass_kg_per_day,
        loss_fraction,
        energy_kwh_per_day,
    }
}
