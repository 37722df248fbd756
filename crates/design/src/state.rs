//! Snapshots and results produced by the design loop.

use lander_config::MissionParameters;
use lander_estimation::{MassEstimate, MassFractions, PayloadRange, StructureEstimate};
use lander_propulsion::{PropellantBudget, PropulsionDesign};
use lander_subsystems::SubsystemSuite;
use serde::Serialize;

/// Mass closure after one pass. Pass 0 is the seed built from the initial guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignState {
    pub iteration: usize,
    pub total_mass_kg: f64,
    pub payload_kg: f64,
    /// Aggregated dry mass: subsystems, structure, landing gear, engines, and tanks.
    pub dry_mass_kg: f64,
    pub propellant_kg: f64,
    /// Payload plus aggregated dry mass.
    pub inert_mass_kg: f64,
    /// Regression dry mass that seeded this pass.
    pub statistical_dry_kg: f64,
    pub structure_kg: f64,
    pub landing_gear_kg: f64,
    pub engines_kg: f64,
    pub tanks_kg: f64,
    pub subsystems_kg: f64,
    /// `|total − previous total|`.
    pub delta_kg: f64,
}

impl DesignState {
    pub(crate) fn seed(initial_total_mass_kg: f64) -> Self {
        Self {
            iteration: 0,
            total_mass_kg: initial_total_mass_kg,
            payload_kg: 0.0,
            dry_mass_kg: 0.0,
            propellant_kg: 0.0,
            inert_mass_kg: 0.0,
            statistical_dry_kg: 0.0,
            structure_kg: 0.0,
            landing_gear_kg: 0.0,
            engines_kg: 0.0,
            tanks_kg: 0.0,
            subsystems_kg: 0.0,
            delta_kg: 0.0,
        }
    }

    /// `total − (payload + dry + propellant)`; zero up to rounding on every computed pass.
    pub fn closure_residual_kg(&self) -> f64 {
        self.total_mass_kg - (self.payload_kg + self.dry_mass_kg + self.propellant_kg)
    }
}

/// Component outputs from the last pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleDesign {
    pub statistical: MassEstimate,
    pub propellant: PropellantBudget,
    pub propulsion: PropulsionDesign,
    pub subsystems: SubsystemSuite,
    pub structure: StructureEstimate,
    pub fractions: MassFractions,
    /// Crew, consumables, and cargo bounds for comparison with the carried payload.
    pub payload_requirements: PayloadRange,
}

/// Outcome of a converged design run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignResult {
    pub parameters: MissionParameters,
    pub tolerance_kg: f64,
    /// Always `true`; a run that misses the tolerance returns
    /// [`DesignError::ConvergenceFailure`](crate::DesignError::ConvergenceFailure) instead.
    pub converged: bool,
    pub final_state: DesignState,
    /// One snapshot per pass, in order. Excludes the seed.
    pub iteration_history: Vec<DesignState>,
    pub design: VehicleDesign,
}

impl DesignResult {
    pub fn iterations(&self) -> usize {
        self.final_state.iteration
    }
}
