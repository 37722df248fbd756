//! One design pass as an ordered pipeline of pure stages.
//!
//! Each stage reads the mission parameters, the reference data, and the outputs of earlier
//! stages, and returns a new value. Nothing is mutated in place.

use lander_config::MissionParameters;
use lander_core::{InputError, ReferenceData};
use lander_estimation::mass::{ADDITIONAL_PAYLOAD_MAX_KG, ADDITIONAL_PAYLOAD_MIN_KG};
use lander_estimation::{MassEstimate, StructureEstimate, mass, mass_fractions, structure};
use lander_propulsion::{PropellantBudget, PropulsionDesign, TankShape, propellant};
use lander_subsystems::SubsystemSuite;

use crate::state::{DesignState, VehicleDesign};

pub(crate) struct PassOutput {
    pub state: DesignState,
    pub design: VehicleDesign,
}

pub(crate) fn run(
    params: &MissionParameters,
    reference: &ReferenceData,
    previous: &DesignState,
) -> Result<PassOutput, InputError> {
    let guess = previous.total_mass_kg;

    let statistical = estimate_masses(params, reference, guess)?;
    let inert = statistical.inert_kg();
    let budget = size_propellant(params, reference, inert)?;
    let propulsion = size_propulsion(params, reference, guess, &budget)?;
    let subsystems = size_subsystems(params, reference)?;
    let structure = size_structure(reference, &statistical)?;

    let state = close_mass(
        previous,
        &statistical,
        &budget,
        &propulsion,
        &subsystems,
        &structure,
    );

    let fractions = mass_fractions(
        state.total_mass_kg,
        state.inert_mass_kg,
        state.propellant_kg,
        state.payload_kg,
        state.dry_mass_kg,
    );
    let payload_requirements = mass::payload_requirements(
        params.n_crew,
        params.mission_duration_days,
        ADDITIONAL_PAYLOAD_MIN_KG,
        ADDITIONAL_PAYLOAD_MAX_KG,
    )?;

    Ok(PassOutput {
        state,
        design: VehicleDesign {
            statistical,
            propellant: budget,
            propulsion,
            subsystems,
            structure,
            fractions,
            payload_requirements,
        },
    })
}

fn estimate_masses(
    params: &MissionParameters,
    reference: &ReferenceData,
    total_mass_kg: f64,
) -> Result<MassEstimate, InputError> {
    mass::estimate(total_mass_kg, params.payload_override_kg, &reference.regression)
}

fn size_propellant(
    params: &MissionParameters,
    reference: &ReferenceData,
    inert_mass_kg: f64,
) -> Result<PropellantBudget, InputError> {
    propellant::compute(
        inert_mass_kg,
        params.delta_v_descent_m_s,
        params.delta_v_ascent_m_s,
        params.isp_s,
        params.mixture_ratio,
        &reference.propellant,
    )
}

fn size_propulsion(
    params: &MissionParameters,
    reference: &ReferenceData,
    total_mass_kg: f64,
    budget: &PropellantBudget,
) -> Result<PropulsionDesign, InputError> {
    let thrust = lander_propulsion::required_thrust(total_mass_kg, &reference.engine);
    lander_propulsion::size(thrust, params.isp_s, budget, TankShape::Toroidal, reference)
}

fn size_subsystems(
    params: &MissionParameters,
    reference: &ReferenceData,
) -> Result<SubsystemSuite, InputError> {
    lander_subsystems::size_all(
        params.n_crew,
        params.mission_duration_days,
        &reference.subsystems,
    )
}

fn size_structure(
    reference: &ReferenceData,
    statistical: &MassEstimate,
) -> Result<StructureEstimate, InputError> {
    structure::estimate(statistical.dry_kg, statistical.inert_kg(), &reference.structure)
}

fn close_mass(
    previous: &DesignState,
    statistical: &MassEstimate,
    budget: &PropellantBudget,
    propulsion: &PropulsionDesign,
    subsystems: &SubsystemSuite,
    structure: &StructureEstimate,
) -> DesignState {
    let subsystems_kg = subsystems.total_mass_kg();
    let engines_kg = propulsion.engine.mass_kg;
    let tanks_kg = propulsion.tanks_mass_kg();
    let dry_mass_kg = subsystems_kg
        + structure.structure_kg
        + structure.landing_gear_kg
        + engines_kg
        + tanks_kg;
    let payload_kg = statistical.payload_kg;
    let inert_mass_kg = payload_kg + dry_mass_kg;
    let total_mass_kg = inert_mass_kg + budget.total_kg;

    DesignState {
        iteration: previous.iteration + 1,
        total_mass_kg,
        payload_kg,
        dry_mass_kg,
        propellant_kg: budget.total_kg,
        inert_mass_kg,
        statistical_dry_kg: statistical.dry_kg,
        structure_kg: structure.structure_kg,
        landing_gear_kg: structure.landing_gear_kg,
        engines_kg,
        tanks_kg,
        subsystems_kg,
        delta_kg: (total_mass_kg - previous.total_mass_kg).abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pass_from_reference_guess() {
        let params = MissionParameters::default();
        let reference = ReferenceData::default();
        let out = run(&params, &reference, &DesignState::seed(30_000.0)).unwrap();

        assert_eq!(out.state.iteration, 1);
        assert!(out.state.closure_residual_kg().abs() < 1e-6);
        assert_eq!(out.state.statistical_dry_kg, out.design.statistical.dry_kg);
        assert!(out.state.total_mass_kg < 30_000.0);
        assert!(
            (out.state.delta_kg - (30_000.0 - out.state.total_mass_kg)).abs() < 1e-9
        );
    }

    #[test]
    fn dry_mass_sums_components() {
        let params = MissionParameters::default();
        let reference = ReferenceData::default();
        let s = run(&params, &reference, &DesignState::seed(15_000.0))
            .unwrap()
            .state;
        let parts = s.subsystems_kg + s.structure_kg + s.landing_gear_kg + s.engines_kg + s.tanks_kg;
        assert!((s.dry_mass_kg - parts).abs() < 1e-9);
        assert!((s.inert_mass_kg - (s.payload_kg + s.dry_mass_kg)).abs() < 1e-9);
    }
}
