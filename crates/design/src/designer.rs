//! Fixed-point mass-closure loop.

use lander_config::{MissionParameters, RunSettings};
use lander_core::{InputError, ReferenceData, require_positive};
use tracing::{debug, info, warn};

use crate::pass;
use crate::state::{DesignResult, DesignState};

/// Failures of a design run. Both are terminal.
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error(
        "design did not converge after {iterations} iterations (last change {last_delta_kg:.3} kg)"
    )]
    ConvergenceFailure {
        iterations: usize,
        last_delta_kg: f64,
        last_state: Box<DesignState>,
    },
}

/// Validated mission parameters bound to a reference data set.
///
/// Immutable after construction; each call to [`LanderDesigner::iterate_design`] starts from the
/// initial guess.
#[derive(Debug, Clone)]
pub struct LanderDesigner {
    params: MissionParameters,
    reference: ReferenceData,
}

impl LanderDesigner {
    /// Designer with the baseline reference data.
    pub fn new(params: MissionParameters) -> Result<Self, DesignError> {
        Self::with_reference(params, ReferenceData::default())
    }

    pub fn with_reference(
        params: MissionParameters,
        reference: ReferenceData,
    ) -> Result<Self, DesignError> {
        params.validate()?;
        Ok(Self { params, reference })
    }

    pub fn parameters(&self) -> &MissionParameters {
        &self.params
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Iterate until the total mass changes by less than `tolerance_kg` between passes.
    ///
    /// Fails with [`DesignError::ConvergenceFailure`] when `max_iterations` passes run without
    /// meeting the tolerance, or earlier when the mass budget stops being finite. Passes are
    /// logged at `info` when `verbose` is set and at `debug` otherwise.
    pub fn iterate_design(
        &self,
        tolerance_kg: f64,
        max_iterations: usize,
        verbose: bool,
    ) -> Result<DesignResult, DesignError> {
        let tolerance = require_positive("tolerance_kg", tolerance_kg)?;
        if max_iterations == 0 {
            return Err(InputError::OutOfRange {
                quantity: "max_iterations",
                reason: "at least one pass is required".to_string(),
            }
            .into());
        }

        let mut state = DesignState::seed(self.params.initial_total_mass_kg);
        let mut history = Vec::with_capacity(max_iterations.min(64));

        while state.iteration < max_iterations {
            let out = match pass::run(&self.params, &self.reference, &state) {
                Ok(out) => out,
                // Inputs are validated at construction; non-finite here is a runaway budget.
                Err(InputError::NonFinite { quantity, .. }) => {
                    warn!(quantity, "mass budget overflowed during a pass");
                    return Err(diverged(state));
                }
                Err(err) => return Err(err.into()),
            };
            if !out.state.total_mass_kg.is_finite() {
                warn!(iteration = out.state.iteration, "total mass is no longer finite");
                return Err(diverged(state));
            }
            log_pass(&out.state, verbose);
            history.push(out.state.clone());
            state = out.state;

            if state.delta_kg < tolerance {
                info!(
                    iterations = state.iteration,
                    total_mass_kg = state.total_mass_kg,
                    "design converged"
                );
                return Ok(DesignResult {
                    parameters: self.params.clone(),
                    tolerance_kg: tolerance,
                    converged: true,
                    final_state: state,
                    iteration_history: history,
                    design: out.design,
                });
            }
        }

        Err(diverged(state))
    }

    /// Run with tolerance and iteration ceiling taken from `settings`.
    pub fn run(&self, settings: &RunSettings, verbose: bool) -> Result<DesignResult, DesignError> {
        self.iterate_design(settings.tolerance_kg, settings.max_iterations, verbose)
    }
}

/// Failure carrying the last finite snapshot.
fn diverged(last: DesignState) -> DesignError {
    warn!(
        iterations = last.iteration,
        last_delta_kg = last.delta_kg,
        total_mass_kg = last.total_mass_kg,
        "design did not converge"
    );
    DesignError::ConvergenceFailure {
        iterations: last.iteration,
        last_delta_kg: last.delta_kg,
        last_state: Box::new(last),
    }
}

fn log_pass(state: &DesignState, verbose: bool) {
    if verbose {
        info!(
            iteration = state.iteration,
            total_mass_kg = state.total_mass_kg,
            payload_kg = state.payload_kg,
            dry_mass_kg = state.dry_mass_kg,
            propellant_kg = state.propellant_kg,
            delta_kg = state.delta_kg,
            "design pass"
        );
    } else {
        debug!(
            iteration = state.iteration,
            total_mass_kg = state.total_mass_kg,
            payload_kg = state.payload_kg,
            dry_mass_kg = state.dry_mass_kg,
            propellant_kg = state.propellant_kg,
            delta_kg = state.delta_kg,
            "design pass"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_parameters() {
        let params = MissionParameters {
            isp_s: 0.0,
            ..MissionParameters::default()
        };
        match LanderDesigner::new(params) {
            Err(DesignError::InvalidInput(err)) => assert_eq!(err.quantity(), "isp_s"),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_run_controls() {
        let designer = LanderDesigner::new(MissionParameters::default()).unwrap();
        assert!(matches!(
            designer.iterate_design(0.0, 10, false),
            Err(DesignError::InvalidInput(_))
        ));
        assert!(matches!(
            designer.iterate_design(f64::NAN, 10, false),
            Err(DesignError::InvalidInput(_))
        ));
        assert!(matches!(
            designer.iterate_design(10.0, 0, false),
            Err(DesignError::InvalidInput(InputError::OutOfRange { quantity: "max_iterations", .. }))
        ));
    }

    #[test]
    fn runaway_mass_is_reported_as_divergence() {
        let params = MissionParameters {
            delta_v_descent_m_s: 8_000.0,
            delta_v_ascent_m_s: 8_000.0,
            ..MissionParameters::default()
        };
        let designer = LanderDesigner::new(params).unwrap();
        match designer.iterate_design(10.0, 100, false) {
            Err(DesignError::ConvergenceFailure {
                iterations,
                last_delta_kg,
                last_state,
            }) => {
                assert!(iterations < 100);
                assert_eq!(last_state.iteration, iterations);
                assert!(last_state.total_mass_kg.is_finite());
                assert!(last_delta_kg.is_finite());
            }
            other => panic!("expected convergence failure, got {other:?}"),
        }
    }

    #[test]
    fn designer_is_reusable() {
        let designer = LanderDesigner::new(MissionParameters::default()).unwrap();
        let first = designer.iterate_design(10.0, 100, false).unwrap();
        let second = designer.iterate_design(10.0, 100, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn history_ends_at_final_state() {
        let designer = LanderDesigner::new(MissionParameters::default()).unwrap();
        let result = designer.run(&RunSettings::default(), false).unwrap();
        assert!(result.converged);
        assert_eq!(result.iteration_history.len(), result.iterations());
        assert_eq!(result.iteration_history.last(), Some(&result.final_state));
        assert!(result.final_state.delta_kg < 10.0);
    }
}
