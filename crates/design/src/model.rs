//! The constrained sizing problem wrapped around [`build_design`].
//!
//! Three constraints close the design: the assumed gross weight must cover
//! the mass buildup, cruise lift must balance the half-fuel weight, and the
//! Breguet range must cover the design mission. The free variables are the
//! tank length, the gross weight, and the cruise condition; the planform
//! stays frozen at its baseline.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use lh2_aero::{Airfoil, PolarCacheError, PolarSet};
use lh2_config::{ConfigError, DesignConfig, Objective};
use lh2_core::constants::G;
use lh2_core::units;
use lh2_opti::{
    Opti, Solution, SolveError, SolverSettings, Values, Var, VariableSpec, solve_sweep,
};
use thiserror::Error;

use crate::point::{DesignPoint, DesignValues, build_design};

/// Handles to the declared design variables, in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct DesignVars {
    pub cabin_diameter: Var,
    pub cabin_length: Var,
    pub fwd_tank_length: Var,
    pub wing_span: Var,
    pub wing_root_chord: Var,
    pub wing_le_sweep: Var,
    pub wing_x_le: Var,
    pub hstab_span: Var,
    pub hstab_root_chord: Var,
    pub hstab_le_sweep: Var,
    pub vstab_span: Var,
    pub vstab_root_chord: Var,
    pub vstab_le_sweep: Var,
    pub design_togw: Var,
    pub mach: Var,
    pub altitude: Var,
    pub alpha: Var,
}

impl DesignVars {
    /// Read a full value set out of an in-progress evaluation.
    pub fn read(&self, values: &Values) -> DesignValues {
        DesignValues {
            cabin_diameter_m: values.get(self.cabin_diameter),
            cabin_length_m: values.get(self.cabin_length),
            fwd_tank_length_m: values.get(self.fwd_tank_length),
            wing_span_m: values.get(self.wing_span),
            wing_root_chord_m: values.get(self.wing_root_chord),
            wing_le_sweep_deg: values.get(self.wing_le_sweep),
            wing_x_le_m: values.get(self.wing_x_le),
            hstab_span_m: values.get(self.hstab_span),
            hstab_root_chord_m: values.get(self.hstab_root_chord),
            hstab_le_sweep_deg: values.get(self.hstab_le_sweep),
            vstab_span_m: values.get(self.vstab_span),
            vstab_root_chord_m: values.get(self.vstab_root_chord),
            vstab_le_sweep_deg: values.get(self.vstab_le_sweep),
            design_togw_kg: values.get(self.design_togw),
            mach: values.get(self.mach),
            altitude_m: values.get(self.altitude),
            alpha_deg: values.get(self.alpha),
        }
    }

    /// Read a full value set out of a solved problem.
    pub fn from_solution(&self, solution: &Solution) -> DesignValues {
        DesignValues {
            cabin_diameter_m: solution.value(self.cabin_diameter),
            cabin_length_m: solution.value(self.cabin_length),
            fwd_tank_length_m: solution.value(self.fwd_tank_length),
            wing_span_m: solution.value(self.wing_span),
            wing_root_chord_m: solution.value(self.wing_root_chord),
            wing_le_sweep_deg: solution.value(self.wing_le_sweep),
            wing_x_le_m: solution.value(self.wing_x_le),
            hstab_span_m: solution.value(self.hstab_span),
            hstab_root_chord_m: solution.value(self.hstab_root_chord),
            hstab_le_sweep_deg: solution.value(self.hstab_le_sweep),
            vstab_span_m: solution.value(self.vstab_span),
            vstab_root_chord_m: solution.value(self.vstab_root_chord),
            vstab_le_sweep_deg: solution.value(self.vstab_le_sweep),
            design_togw_kg: solution.value(self.design_togw),
            mach: solution.value(self.mach),
            altitude_m: solution.value(self.altitude),
            alpha_deg: solution.value(self.alpha),
        }
    }
}

/// Declare every design variable at its baseline value. Declaration order is
/// part of the model contract: warm starts index earlier solutions by it.
fn declare(opti: &mut Opti) -> DesignVars {
    let baseline = DesignValues::baseline();
    DesignVars {
        cabin_diameter: opti.variable(
            VariableSpec::new("cabin_diameter", baseline.cabin_diameter_m)
                .lower(1e-3)
                .frozen(),
        ),
        cabin_length: opti.variable(
            VariableSpec::new("cabin_length", baseline.cabin_length_m)
                .lower(1e-3)
                .frozen(),
        ),
        fwd_tank_length: opti.variable(
            VariableSpec::new("fwd_tank_length", baseline.fwd_tank_length_m).lower(1e-3),
        ),
        wing_span: opti.variable(
            VariableSpec::new("wing_span", baseline.wing_span_m)
                .lower(0.0)
                .frozen(),
        ),
        wing_root_chord: opti.variable(
            VariableSpec::new("wing_root_chord", baseline.wing_root_chord_m)
                .lower(0.0)
                .frozen(),
        ),
        wing_le_sweep: opti.variable(
            VariableSpec::new("wing_le_sweep", baseline.wing_le_sweep_deg)
                .lower(0.0)
                .frozen(),
        ),
        wing_x_le: opti.variable(
            VariableSpec::new("wing_x_le", baseline.wing_x_le_m).frozen(),
        ),
        hstab_span: opti.variable(
            VariableSpec::new("hstab_span", baseline.hstab_span_m)
                .lower(0.0)
                .frozen(),
        ),
        hstab_root_chord: opti.variable(
            VariableSpec::new("hstab_root_chord", baseline.hstab_root_chord_m)
                .lower(0.0)
                .frozen(),
        ),
        hstab_le_sweep: opti.variable(
            VariableSpec::new("hstab_le_sweep", baseline.hstab_le_sweep_deg)
                .lower(0.0)
                .frozen(),
        ),
        vstab_span: opti.variable(
            VariableSpec::new("vstab_span", baseline.vstab_span_m)
                .lower(0.0)
                .frozen(),
        ),
        vstab_root_chord: opti.variable(
            VariableSpec::new("vstab_root_chord", baseline.vstab_root_chord_m)
                .lower(0.0)
                .frozen(),
        ),
        vstab_le_sweep: opti.variable(
            VariableSpec::new("vstab_le_sweep", baseline.vstab_le_sweep_deg)
                .lower(0.0)
                .frozen(),
        ),
        design_togw: opti.variable(
            VariableSpec::new("design_togw", baseline.design_togw_kg).lower(0.0),
        ),
        mach: opti.variable(
            VariableSpec::new("mach", baseline.mach)
                .scale(0.1)
                .lower(0.0)
                .upper(1.0),
        ),
        altitude: opti.variable(
            VariableSpec::new("altitude", baseline.altitude_m)
                .scale(units::ft_to_m(10e3))
                .lower(0.0)
                .upper(units::ft_to_m(4e5)),
        ),
        alpha: opti.variable(
            VariableSpec::new("alpha", baseline.alpha_deg)
                .lower(0.0)
                .upper(15.0),
        ),
    }
}

/// A snapshot of the handful of design-point quantities the constraints and
/// objective read.
#[derive(Debug, Clone, Copy)]
struct PointSummary {
    computed_togw_kg: f64,
    half_fuel_mass_kg: f64,
    weight_support: f64,
    lift_n: f64,
    flight_range_m: f64,
}

/// Evaluates the full sizing chain once per distinct variable set. The
/// objective and all three constraints read the same evaluation, so the last
/// result is memoized against its inputs.
struct PointEvaluator {
    config: DesignConfig,
    polars: Rc<PolarSet>,
    vars: DesignVars,
    cache: RefCell<Option<(DesignValues, PointSummary)>>,
}

impl PointEvaluator {
    fn summarize(&self, values: &Values) -> PointSummary {
        let design_values = self.vars.read(values);
        if let Some((cached, summary)) = *self.cache.borrow() {
            if cached == design_values {
                return summary;
            }
        }
        let point = build_design(&self.config, &design_values, &self.polars);
        let summary = PointSummary {
            computed_togw_kg: point.computed_togw_kg(),
            half_fuel_mass_kg: point.breakdown.half_fuel().mass_kg,
            weight_support: point.op_point.weight_support_fraction(),
            lift_n: point.aero.lift_n,
            flight_range_m: point.flight_range_m,
        };
        *self.cache.borrow_mut() = Some((design_values, summary));
        summary
    }
}

/// Failures while setting up or running a design solve.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("polar cache error: {0}")]
    Polar(#[from] PolarCacheError),
    #[error("solver setup error: {0}")]
    Solve(#[from] SolveError),
}

/// A solved design: the evaluated point plus the solver's verdict on it.
///
/// `feasible` is false when the solver stopped without satisfying every
/// constraint; the point is still evaluated so studies can inspect (or mask)
/// the failed case rather than abort.
#[derive(Debug, Clone)]
pub struct DesignSolution {
    pub point: DesignPoint,
    pub objective: f64,
    pub status: String,
    pub feasible: bool,
    pub max_constraint_violation: f64,
}

/// One sizing problem: a configuration plus the polar set its aerodynamics
/// read.
pub struct DesignProblem {
    config: DesignConfig,
    polars: Rc<PolarSet>,
}

impl DesignProblem {
    pub fn new(config: DesignConfig, cache_dir: &Path) -> Result<Self, DesignError> {
        config.validate()?;
        let polars = Rc::new(load_polars(cache_dir)?);
        Ok(Self { config, polars })
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    /// The cached airfoil polars the problem's aerodynamics read.
    pub fn polars(&self) -> &PolarSet {
        &self.polars
    }

    /// Evaluate the sizing chain at arbitrary values, without solving.
    pub fn design_point(&self, values: &DesignValues) -> DesignPoint {
        build_design(&self.config, values, &self.polars)
    }

    /// Solve the sizing problem from the baseline initial guess.
    pub fn solve(&self) -> Result<DesignSolution, DesignError> {
        let (opti, vars) = self.build_opti(None);
        let solution = opti.solve(&self.solver_settings())?;
        Ok(self.package(vars, solution))
    }

    /// Assemble the optimization problem, optionally warm-started from an
    /// earlier solution of an identically-declared problem.
    fn build_opti(&self, warm: Option<&Solution>) -> (Opti, DesignVars) {
        let mut opti = Opti::new();
        let vars = declare(&mut opti);
        if let Some(previous) = warm {
            // Identical declaration order, so handles index the previous
            // solution directly. Only the free variables carry over.
            opti.set_init(vars.fwd_tank_length, previous.value(vars.fwd_tank_length));
            opti.set_init(vars.design_togw, previous.value(vars.design_togw));
            opti.set_init(vars.mach, previous.value(vars.mach));
            opti.set_init(vars.altitude, previous.value(vars.altitude));
            opti.set_init(vars.alpha, previous.value(vars.alpha));
        }
        self.constrain(&mut opti, vars);
        (opti, vars)
    }

    fn constrain(&self, opti: &mut Opti, vars: DesignVars) {
        let evaluator = Rc::new(PointEvaluator {
            config: self.config.clone(),
            polars: Rc::clone(&self.polars),
            vars,
            cache: RefCell::new(None),
        });

        // Weight closure: the assumed gross weight covers the buildup.
        {
            let evaluator = Rc::clone(&evaluator);
            opti.subject_to(move |values| {
                let summary = evaluator.summarize(values);
                (values.get(vars.design_togw) - summary.computed_togw_kg) * 1e-5
            });
        }
        // Cruise trim: lift balances the half-fuel weight.
        {
            let evaluator = Rc::clone(&evaluator);
            let tolerance = self.config.solver.constraint_tolerance;
            opti.subject_to_eq(tolerance, move |values| {
                let summary = evaluator.summarize(values);
                let trim_weight_n = G * summary.half_fuel_mass_kg * summary.weight_support;
                (summary.lift_n - trim_weight_n) * 1e-6
            });
        }
        // Range closure: the fuel on board covers the design mission.
        {
            let evaluator = Rc::clone(&evaluator);
            let mission_range_m = self.config.mission_range_m();
            opti.subject_to(move |values| {
                let summary = evaluator.summarize(values);
                summary.flight_range_m / mission_range_m - 1.0
            });
        }

        match self.config.objective {
            Objective::FwdTankLength => {
                opti.minimize(move |values| values.get(vars.fwd_tank_length));
            }
            Objective::Togw => {
                opti.minimize(move |values| values.get(vars.design_togw));
            }
        }
    }

    fn solver_settings(&self) -> SolverSettings {
        let solver = &self.config.solver;
        SolverSettings {
            max_evaluations: solver.max_evaluations,
            initial_step: solver.initial_step,
            f_tol_rel: solver.f_tol_rel,
            feasibility_tol: solver.constraint_tolerance,
        }
    }

    fn package(&self, vars: DesignVars, solution: Solution) -> DesignSolution {
        let values = vars.from_solution(&solution);
        let point = build_design(&self.config, &values, &self.polars);
        DesignSolution {
            point,
            objective: solution.objective,
            status: solution.status,
            feasible: solution.feasible,
            max_constraint_violation: solution.max_constraint_violation,
        }
    }
}

fn load_polars(cache_dir: &Path) -> Result<PolarSet, PolarCacheError> {
    PolarSet::load(
        &Airfoil::b737c(),
        &Airfoil::naca0012(),
        &Airfoil::naca0008(),
        cache_dir,
    )
}

/// Solve one design per mission range, warm-starting each from the last.
pub fn solve_range_family(
    config: &DesignConfig,
    ranges_nmi: &[f64],
    cache_dir: &Path,
) -> Result<Vec<DesignSolution>, DesignError> {
    solve_family(config, cache_dir, ranges_nmi.len(), |config, index| {
        config.mission_range_nmi = ranges_nmi[index];
    })
}

/// Solve one design per tank fuel-mass fraction, warm-starting each from the
/// last. Sweeping from the all-fuel end toward heavier tanks keeps each start
/// close to the next optimum.
pub fn solve_tank_fraction_sweep(
    config: &DesignConfig,
    fractions: &[f64],
    cache_dir: &Path,
) -> Result<Vec<DesignSolution>, DesignError> {
    solve_family(config, cache_dir, fractions.len(), |config, index| {
        config.tank_fuel_mass_fraction = Some(fractions[index]);
    })
}

fn solve_family(
    base: &DesignConfig,
    cache_dir: &Path,
    count: usize,
    adjust: impl Fn(&mut DesignConfig, usize),
) -> Result<Vec<DesignSolution>, DesignError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let polars = Rc::new(load_polars(cache_dir)?);
    let problems = (0..count)
        .map(|index| {
            let mut config = base.clone();
            adjust(&mut config, index);
            config.validate()?;
            Ok(DesignProblem {
                config,
                polars: Rc::clone(&polars),
            })
        })
        .collect::<Result<Vec<_>, DesignError>>()?;

    let settings = problems[0].solver_settings();
    let solutions = solve_sweep(&settings, count, |index, previous| {
        problems[index].build_opti(previous).0
    })?;

    let vars = declare(&mut Opti::new());
    Ok(problems
        .iter()
        .zip(solutions)
        .map(|(problem, solution)| problem.package(vars, solution))
        .collect())
}
