//! Propulsion sizing: propellant budget, engine cluster, and cryogenic tanks.

pub mod engine;
pub mod propellant;
pub mod tank;

use lander_core::reference::{EngineParameters, ReferenceData};
use lander_core::InputError;
use serde::Serialize;

pub use engine::EngineGeometry;
pub use propellant::{PropellantBudget, SpeciesLoad};
pub use tank::{TankGeometry, TankShape};

/// Engines plus one tank per propellant species.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropulsionDesign {
    pub engine: EngineGeometry,
    pub fuel_tank: TankGeometry,
    pub oxidizer_tank: TankGeometry,
}

impl PropulsionDesign {
    pub fn tanks_mass_kg(&self) -> f64 {
        self.fuel_tank.mass_kg + self.oxidizer_tank.mass_kg
    }

    /// Engines and tanks together.
    pub fn mass_kg(&self) -> f64 {
        self.engine.mass_kg + self.tanks_mass_kg()
    }
}

/// Cluster thrust needed to hold the configured thrust-to-weight ratio in lunar gravity.
pub fn required_thrust(total_mass_kg: f64, params: &EngineParameters) -> f64 {
    params.thrust_to_weight * total_mass_kg * params.lunar_gravity_m_s2
}

/// Size engines for `thrust_total_n` and tanks for the volumes in `budget`.
pub fn size(
    thrust_total_n: f64,
    isp_s: f64,
    budget: &PropellantBudget,
    shape: TankShape,
    reference: &ReferenceData,
) -> Result<PropulsionDesign, InputError> {
    let engine = engine::size(
        thrust_total_n,
        isp_s,
        budget.total_kg,
        reference.propellant.g0_m_s2,
        &reference.engine,
    )?;
    let fuel_tank = tank::size(
        budget.fuel.tank_volume_m3,
        reference.tank.fuel_pressure_pa,
        shape,
        &reference.tank,
    )?;
    let oxidizer_tank = tank::size(
        budget.oxidizer.tank_volume_m3,
        reference.tank.oxidizer_pressure_pa,
        shape,
        &reference.tank,
    )?;
    Ok(PropulsionDesign {
        engine,
        fuel_tank,
        oxidizer_tank,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_both_tanks_at_species_pressures() {
        let reference = ReferenceData::default();
        let budget = propellant::compute(7_000.0, 2_000.0, 2_061.0, 438.3, 5.0, &reference.propellant)
            .unwrap();
        let thrust = required_thrust(14_000.0, &reference.engine);
        let design = size(thrust, 438.3, &budget, TankShape::Toroidal, &reference).unwrap();

        assert_eq!(design.fuel_tank.pressure_pa, 170e3);
        assert_eq!(design.oxidizer_tank.pressure_pa, 190e3);
        assert_eq!(design.fuel_tank.volume_m3, budget.fuel.tank_volume_m3);
        assert!(
            (design.mass_kg()
                - (design.engine.mass_kg + design.fuel_tank.mass_kg + design.oxidizer_tank.mass_kg))
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn thrust_scales_with_lunar_weight() {
        let params = EngineParameters::default();
        assert!((required_thrust(10_000.0, &params) - 3.26 * 10_000.0 * 1.62).abs() < 1e-9);
    }
}
