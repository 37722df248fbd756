//! Rocket-equation propellant budget for the descent and ascent legs.

use lander_core::reference::PropellantProperties;
use lander_core::{InputError, require_non_negative, require_positive};
use serde::Serialize;

/// Mass and volume of one propellant species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeciesLoad {
    pub mass_kg: f64,
    pub liquid_volume_m3: f64,
    /// Liquid volume plus ullage.
    pub tank_volume_m3: f64,
}

impl SpeciesLoad {
    fn new(mass_kg: f64, density_kg_m3: f64, ullage_fraction: f64) -> Self {
        let liquid_volume_m3 = mass_kg / density_kg_m3;
        Self {
            mass_kg,
            liquid_volume_m3,
            tank_volume_m3: liquid_volume_m3 * (1.0 + ullage_fraction),
        }
    }
}

/// Propellant required to land and return to orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropellantBudget {
    pub ascent_kg: f64,
    pub descent_kg: f64,
    pub total_kg: f64,
    /// LH2.
    pub fuel: SpeciesLoad,
    /// LOX.
    pub oxidizer: SpeciesLoad,
}

/// Propellant burned to impart `delta_v_m_s` on a vehicle whose burnout mass is
/// `final_mass_kg`.
#[inline]
pub fn leg_propellant(final_mass_kg: f64, delta_v_m_s: f64, exhaust_velocity_m_s: f64) -> f64 {
    final_mass_kg * (delta_v_m_s / exhaust_velocity_m_s).exp_m1()
}

/// Split a propellant mass into `(fuel, oxidizer)` for an oxidizer-to-fuel ratio.
///
/// The oxidizer is taken as the remainder so the two always sum to `propellant_kg`.
#[inline]
pub fn split(propellant_kg: f64, mixture_ratio: f64) -> (f64, f64) {
    let fuel = propellant_kg / (mixture_ratio + 1.0);
    (fuel, propellant_kg - fuel)
}

/// Size the propellant load for a single-burn descent followed by a single-burn ascent.
///
/// Ascent propellant is computed first from the inert mass; the descent leg then carries it down
/// as additional mass.
pub fn compute(
    inert_mass_kg: f64,
    delta_v_descent_m_s: f64,
    delta_v_ascent_m_s: f64,
    isp_s: f64,
    mixture_ratio: f64,
    props: &PropellantProperties,
) -> Result<PropellantBudget, InputError> {
    let inert = require_positive("inert_mass_kg", inert_mass_kg)?;
    let dv_descent = require_non_negative("delta_v_descent_m_s", delta_v_descent_m_s)?;
    let dv_ascent = require_non_negative("delta_v_ascent_m_s", delta_v_ascent_m_s)?;
    let isp = require_positive("isp_s", isp_s)?;
    let ratio = require_positive("mixture_ratio", mixture_ratio)?;

    let exhaust_velocity = isp * props.g0_m_s2;
    let ascent_kg = leg_propellant(inert, dv_ascent, exhaust_velocity);
    let descent_kg = leg_propellant(inert + ascent_kg, dv_descent, exhaust_velocity);
    let total_kg = ascent_kg + descent_kg;

    let (fuel_kg, oxidizer_kg) = split(total_kg, ratio);
    Ok(PropellantBudget {
        ascent_kg,
        descent_kg,
        total_kg,
        fuel: SpeciesLoad::new(fuel_kg, props.fuel_density_kg_m3, props.ullage_fraction),
        oxidizer: SpeciesLoad::new(
            oxidizer_kg,
            props.oxidizer_density_kg_m3,
            props.ullage_fraction,
        ),
    })
}
