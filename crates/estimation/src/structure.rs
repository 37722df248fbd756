//! Merill structural correlation and landing-gear allowance.

use lander_core::reference::StructureCoefficients;
use lander_core::units::kg_to_t;
use lander_core::{InputError, require_non_negative};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StructureEstimate {
    pub structure_kg: f64,
    pub landing_gear_kg: f64,
}

impl StructureEstimate {
    pub fn total_kg(&self) -> f64 {
        self.structure_kg + self.landing_gear_kg
    }
}

/// Structural mass from the statistical dry mass and the inert mass, both in kilograms.
///
/// The correlation works in tonnes:
/// `k_d·(m_dry/1000)^e_d + k_i·(m_inert/1000)^e_i + c`. Landing gear is a fixed fraction of dry mass.
pub fn estimate(
    dry_mass_kg: f64,
    inert_mass_kg: f64,
    coeffs: &StructureCoefficients,
) -> Result<StructureEstimate, InputError> {
    let dry_t = kg_to_t(require_non_negative("dry_mass_kg", dry_mass_kg)?);
    let inert_t = kg_to_t(require_non_negative("inert_mass_kg", inert_mass_kg)?);

    let structure_kg = coeffs.dry_coefficient * dry_t.powf(coeffs.dry_exponent)
        + coeffs.inert_coefficient * inert_t.powf(coeffs.inert_exponent)
        + coeffs.constant_kg;

    Ok(StructureEstimate {
        structure_kg,
        landing_gear_kg: coeffs.landing_gear_fraction * dry_mass_kg,
    })
}
