//! Optimization harness: declare scalar design variables with initial
//! guesses, bounds, scales, and frozen flags; register inequality and
//! equality constraints; minimize an objective through the derivative-free
//! COBYLA solver.
//!
//! Variables are declared and read in physical units. The solver itself works
//! in a scaled space where each free variable is divided by its scale, so one
//! trust-region radius suits variables spanning metres to megagrams. Frozen
//! variables are excluded from the solver vector entirely and pinned at their
//! initial values.
//!
//! A failed solve is not an error: the last iterate comes back as a
//! `Solution` with `feasible` false, so study drivers can print and inspect
//! it. Feasibility is judged here, from the constraint violations at the
//! returned point, not from the solver's status code.

use cobyla::{Func, RhoBeg, StopTols, minimize};
use thiserror::Error;

/// Handle to a declared design variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Var(usize);

/// Declaration of one scalar design variable.
#[derive(Debug, Clone)]
pub struct VariableSpec {
    pub name: String,
    pub init: f64,
    /// Characteristic magnitude dividing the solver-space coordinate.
    /// Defaults to `max(|init|, 1)`.
    pub scale: Option<f64>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    /// Frozen variables are pinned at `init` and hidden from the solver.
    pub frozen: bool,
}

impl VariableSpec {
    pub fn new(name: impl Into<String>, init: f64) -> Self {
        Self {
            name: name.into(),
            init,
            scale: None,
            lower: None,
            upper: None,
            frozen: false,
        }
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn lower(mut self, lower: f64) -> Self {
        self.lower = Some(lower);
        self
    }

    pub fn upper(mut self, upper: f64) -> Self {
        self.upper = Some(upper);
        self
    }

    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    fn effective_scale(&self) -> f64 {
        self.scale.unwrap_or_else(|| self.init.abs().max(1.0))
    }
}

/// Read-only view of the physical variable values at one evaluation point.
pub struct Values<'a> {
    values: &'a [f64],
}

impl Values<'_> {
    /// Physical value of one variable.
    pub fn get(&self, var: Var) -> f64 {
        self.values[var.0]
    }

    /// All physical values in declaration order.
    pub fn raw(&self) -> &[f64] {
        self.values
    }
}

type Eval = Box<dyn Fn(&Values) -> f64>;

#[derive(Debug, Clone, Copy)]
enum ConstraintKind {
    /// Registered expression must be ≥ 0.
    Inequality,
    /// Registered expression must be within ± tolerance of zero.
    Equality { tolerance: f64 },
}

struct Constraint {
    kind: ConstraintKind,
    f: Eval,
}

/// Stopping and tolerance settings for one solve.
#[derive(Debug, Clone, Copy)]
pub struct SolverSettings {
    /// Maximum objective/constraint evaluations.
    pub max_evaluations: usize,
    /// Initial trust-region radius in scaled variable space.
    pub initial_step: f64,
    /// Relative objective tolerance for convergence.
    pub f_tol_rel: f64,
    /// Largest constraint violation still reported as feasible.
    pub feasibility_tol: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_evaluations: 4_000,
            initial_step: 0.5,
            f_tol_rel: 1e-8,
            feasibility_tol: 1e-3,
        }
    }
}

/// Result of one solve: physical values for every declared variable, the
/// objective, and this harness's own feasibility verdict.
#[derive(Debug, Clone)]
pub struct Solution {
    values: Vec<f64>,
    pub objective: f64,
    /// Solver status, for logging. Feasibility is judged separately.
    pub status: String,
    pub feasible: bool,
    pub max_constraint_violation: f64,
}

impl Solution {
    /// Physical value of one variable at the solution.
    pub fn value(&self, var: Var) -> f64 {
        self.values[var.0]
    }

    /// All physical values in declaration order, for warm-starting.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Problem-construction and solve errors. Solver non-convergence is not among
/// them; it comes back as an infeasible [`Solution`].
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("no objective was set before solving")]
    NoObjective,
    #[error("variable {name:?} has non-positive scale {scale}")]
    InvalidScale { name: String, scale: f64 },
    #[error("variable {name:?} has lower bound {lower} above upper bound {upper}")]
    InvalidBounds { name: String, lower: f64, upper: f64 },
}

/// A constrained nonlinear program under construction.
#[derive(Default)]
pub struct Opti {
    variables: Vec<VariableSpec>,
    constraints: Vec<Constraint>,
    objective: Option<Eval>,
}

/// One scalar inequality handed to the solver: `sign * f(x) + offset ≥ 0`.
/// Equalities expand into an opposing pair.
#[derive(Debug, Clone, Copy)]
struct Term {
    index: usize,
    sign: f64,
    offset: f64,
}

impl Opti {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable and get its handle.
    pub fn variable(&mut self, spec: VariableSpec) -> Var {
        self.variables.push(spec);
        Var(self.variables.len() - 1)
    }

    /// Replace a variable's initial guess, e.g. to warm-start from a previous
    /// solution.
    pub fn set_init(&mut self, var: Var, init: f64) {
        self.variables[var.0].init = init;
    }

    /// Require `f(x) ≥ 0`.
    pub fn subject_to(&mut self, f: impl Fn(&Values) -> f64 + 'static) {
        self.constraints.push(Constraint {
            kind: ConstraintKind::Inequality,
            f: Box::new(f),
        });
    }

    /// Require `|f(x)| ≤ tolerance`.
    pub fn subject_to_eq(&mut self, tolerance: f64, f: impl Fn(&Values) -> f64 + 'static) {
        self.constraints.push(Constraint {
            kind: ConstraintKind::Equality { tolerance },
            f: Box::new(f),
        });
    }

    /// Set the objective to minimize.
    pub fn minimize(&mut self, f: impl Fn(&Values) -> f64 + 'static) {
        self.objective = Some(Box::new(f));
    }

    /// Expand the full physical vector from the solver-space coordinates of
    /// the free variables.
    fn physical_values(&self, free: &[usize], solver_x: &[f64]) -> Vec<f64> {
        let mut values: Vec<f64> = self.variables.iter().map(|spec| spec.init).collect();
        for (&index, &coordinate) in free.iter().zip(solver_x) {
            values[index] = coordinate * self.variables[index].effective_scale();
        }
        values
    }

    /// Largest constraint violation at the given physical point. Non-finite
    /// constraint values count as unbounded violations.
    fn constraint_violation(&self, values: &[f64]) -> f64 {
        let values = Values { values };
        self.constraints
            .iter()
            .map(|constraint| {
                let f = (constraint.f)(&values);
                if !f.is_finite() {
                    return f64::INFINITY;
                }
                match constraint.kind {
                    ConstraintKind::Inequality => (-f).max(0.0),
                    ConstraintKind::Equality { tolerance } => (f.abs() - tolerance).max(0.0),
                }
            })
            .fold(0.0, f64::max)
    }

    fn package(
        &self,
        values: Vec<f64>,
        objective: f64,
        status: String,
        settings: &SolverSettings,
    ) -> Solution {
        let max_constraint_violation = self.constraint_violation(&values);
        Solution {
            values,
            objective,
            status,
            feasible: max_constraint_violation <= settings.feasibility_tol,
            max_constraint_violation,
        }
    }

    /// Run COBYLA on the scaled free-variable space and report the result in
    /// physical units. Non-convergence still yields a `Solution` (the last
    /// iterate, normally infeasible) so callers can inspect it.
    pub fn solve(&self, settings: &SolverSettings) -> Result<Solution, SolveError> {
        let objective = self.objective.as_ref().ok_or(SolveError::NoObjective)?;
        for spec in &self.variables {
            if spec.effective_scale() <= 0.0 {
                return Err(SolveError::InvalidScale {
                    name: spec.name.clone(),
                    scale: spec.effective_scale(),
                });
            }
            if let (Some(lower), Some(upper)) = (spec.lower, spec.upper) {
                if lower > upper {
                    return Err(SolveError::InvalidBounds {
                        name: spec.name.clone(),
                        lower,
                        upper,
                    });
                }
            }
        }

        let free: Vec<usize> = self
            .variables
            .iter()
            .enumerate()
            .filter(|(_, spec)| !spec.frozen)
            .map(|(index, _)| index)
            .collect();

        if free.is_empty() {
            let values: Vec<f64> = self.variables.iter().map(|spec| spec.init).collect();
            let objective_value = objective(&Values { values: &values });
            return Ok(self.package(
                values,
                objective_value,
                "AllVariablesFrozen".to_string(),
                settings,
            ));
        }

        let x0: Vec<f64> = free
            .iter()
            .map(|&index| {
                let spec = &self.variables[index];
                spec.init / spec.effective_scale()
            })
            .collect();
        let bounds: Vec<(f64, f64)> = free
            .iter()
            .map(|&index| {
                let spec = &self.variables[index];
                let scale = spec.effective_scale();
                (
                    spec.lower.map_or(f64::NEG_INFINITY, |lower| lower / scale),
                    spec.upper.map_or(f64::INFINITY, |upper| upper / scale),
                )
            })
            .collect();

        let mut terms = Vec::new();
        for (index, constraint) in self.constraints.iter().enumerate() {
            match constraint.kind {
                ConstraintKind::Inequality => terms.push(Term {
                    index,
                    sign: 1.0,
                    offset: 0.0,
                }),
                ConstraintKind::Equality { tolerance } => {
                    terms.push(Term {
                        index,
                        sign: 1.0,
                        offset: tolerance,
                    });
                    terms.push(Term {
                        index,
                        sign: -1.0,
                        offset: tolerance,
                    });
                }
            }
        }

        let unscale = |solver_x: &[f64]| self.physical_values(&free, solver_x);
        let unscale = &unscale;

        let objective_fn = |solver_x: &[f64], _: &mut ()| {
            let values = unscale(solver_x);
            objective(&Values { values: &values })
        };
        let term_fns: Vec<_> = terms
            .iter()
            .map(|&term| {
                move |solver_x: &[f64], _: &mut ()| {
                    let values = unscale(solver_x);
                    let raw = (self.constraints[term.index].f)(&Values { values: &values });
                    term.sign * raw + term.offset
                }
            })
            .collect();
        let cons: Vec<&dyn Func<()>> = term_fns.iter().map(|f| f as &dyn Func<()>).collect();

        let stop_tols = StopTols {
            ftol_rel: settings.f_tol_rel,
            ..StopTols::default()
        };
        let outcome = minimize(
            objective_fn,
            &x0,
            &bounds,
            &cons,
            (),
            settings.max_evaluations,
            RhoBeg::All(settings.initial_step),
            Some(stop_tols),
        );
        let (status, solver_x, objective_value) = match outcome {
            Ok((status, x, f)) => (format!("{status:?}"), x, f),
            Err((status, x, f)) => (format!("{status:?}"), x, f),
        };

        let values = self.physical_values(&free, &solver_x);
        Ok(self.package(values, objective_value, status, settings))
    }
}

/// Solve a family of related problems, warm-starting each from the previous
/// solution. `build` receives the sweep index and the previous solution (if
/// any) and returns the problem for that point.
pub fn solve_sweep<B>(
    settings: &SolverSettings,
    count: usize,
    mut build: B,
) -> Result<Vec<Solution>, SolveError>
where
    B: FnMut(usize, Option<&Solution>) -> Opti,
{
    let mut solutions = Vec::with_capacity(count);
    for index in 0..count {
        let opti = build(index, solutions.last());
        solutions.push(opti.solve(settings)?);
    }
    Ok(solutions)
}
