//! Engine cluster sizing: nozzle, chamber, and empirical mass.

use lander_core::geometry::diameter_from_area;
use lander_core::reference::EngineParameters;
use lander_core::units::deg_to_rad;
use lander_core::{InputError, require_non_negative, require_positive};
use serde::Serialize;

/// Geometry and performance of one engine, plus cluster-level totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineGeometry {
    pub engine_count: u32,
    pub thrust_total_n: f64,
    pub thrust_per_engine_n: f64,
    pub exit_mach: f64,
    pub exit_temperature_k: f64,
    pub exit_velocity_m_s: f64,
    pub exit_pressure_pa: f64,
    pub throat_area_m2: f64,
    pub throat_diameter_m: f64,
    pub exit_area_m2: f64,
    pub exit_diameter_m: f64,
    pub chamber_area_m2: f64,
    pub chamber_diameter_m: f64,
    pub chamber_volume_m3: f64,
    pub chamber_length_m: f64,
    pub convergent_length_m: f64,
    pub divergent_length_m: f64,
    /// Convergent plus divergent sections.
    pub nozzle_length_m: f64,
    /// Chamber, feed section, and nozzle.
    pub overall_length_m: f64,
    /// Ideal specific impulse from the nozzle expansion.
    pub ideal_isp_s: f64,
    /// Delivered mass flow per engine at the design Isp.
    pub mass_flow_kg_s: f64,
    pub burn_time_s: f64,
    /// Whole cluster.
    pub mass_kg: f64,
}

/// Size the engine cluster for a total thrust requirement.
///
/// `thrust_total_n` is the full-throttle cluster thrust; each engine is rated for
/// `thrust_total_n / (N · throttle)`.
pub fn size(
    thrust_total_n: f64,
    isp_s: f64,
    propellant_mass_kg: f64,
    g0_m_s2: f64,
    params: &EngineParameters,
) -> Result<EngineGeometry, InputError> {
    let thrust_total = require_positive("thrust_n", thrust_total_n)?;
    let isp = require_positive("isp_s", isp_s)?;
    let propellant = require_non_negative("propellant_mass_kg", propellant_mass_kg)?;
    if params.engine_count == 0 {
        return Err(InputError::OutOfRange {
            quantity: "engine_count",
            reason: "at least one engine is required".to_string(),
        });
    }
    let throttle = require_positive("throttle", params.throttle)?;

    let count = f64::from(params.engine_count);
    let thrust_per_engine = thrust_total / (count * throttle);

    let gamma = params.gamma;
    let me = params.exit_mach;
    let pc = params.chamber_pressure_pa;
    let eps = params.expansion_ratio;

    let stagnation = 1.0 + 0.5 * (gamma - 1.0) * me * me;
    let exit_temperature = params.chamber_temperature_k / stagnation;
    let exit_velocity = me * (gamma * params.gas_constant_j_kg_k * exit_temperature).sqrt();
    let exit_pressure = pc / stagnation.powf(gamma / (gamma - 1.0));

    let thrust_coefficient =
        (pc / params.c_star_m_s) * exit_velocity + (exit_pressure - params.ambient_pressure_pa) * eps;
    let throat_area = thrust_per_engine / thrust_coefficient;
    let exit_area = eps * throat_area;
    let throat_diameter = diameter_from_area(throat_area);
    let exit_diameter = diameter_from_area(exit_area);

    let chamber_area = params.contraction_ratio * throat_area;
    let chamber_diameter = diameter_from_area(chamber_area);
    let chamber_volume = params.characteristic_length_m * throat_area;
    let chamber_length = chamber_volume / chamber_area;

    let divergent_length = params.bell_fraction * (exit_diameter - throat_diameter)
        / (2.0 * deg_to_rad(params.divergent_half_angle_deg).tan());
    let convergent_length = (chamber_diameter - throat_diameter)
        / (2.0 * deg_to_rad(params.convergent_half_angle_deg).cos());
    let nozzle_length = divergent_length + convergent_length;
    let feed_length = chamber_length + convergent_length;

    let ideal_isp = ideal_isp(params, exit_pressure, g0_m_s2);
    let mass_flow = thrust_per_engine / (isp * g0_m_s2);
    let burn_time = propellant / (count * mass_flow);

    let corr = &params.mass_correlation;
    let mass = corr.scale
        * corr.coefficient
        * count.powf(corr.count_exponent)
        * thrust_per_engine.powf(corr.thrust_exponent)
        * propellant.powf(corr.propellant_exponent);

    Ok(EngineGeometry {
        engine_count: params.engine_count,
        thrust_total_n: thrust_total,
        thrust_per_engine_n: thrust_per_engine,
        exit_mach: me,
        exit_temperature_k: exit_temperature,
        exit_velocity_m_s: exit_velocity,
        exit_pressure_pa: exit_pressure,
        throat_area_m2: throat_area,
        throat_diameter_m: throat_diameter,
        exit_area_m2: exit_area,
        exit_diameter_m: exit_diameter,
        chamber_area_m2: chamber_area,
        chamber_diameter_m: chamber_diameter,
        chamber_volume_m3: chamber_volume,
        chamber_length_m: chamber_length,
        convergent_length_m: convergent_length,
        divergent_length_m: divergent_length,
        nozzle_length_m: nozzle_length,
        overall_length_m: chamber_length + feed_length + nozzle_length,
        ideal_isp_s: ideal_isp,
        mass_flow_kg_s: mass_flow,
        burn_time_s: burn_time,
        mass_kg: mass,
    })
}

fn ideal_isp(params: &EngineParameters, exit_pressure_pa: f64, g0_m_s2: f64) -> f64 {
    let gamma = params.gamma;
    let c_star = params.c_star_m_s;
    let pc = params.chamber_pressure_pa;

    let momentum = (c_star * gamma / g0_m_s2)
        * ((2.0 / (gamma - 1.0))
            * (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (gamma - 1.0))
            * (1.0 - (exit_pressure_pa / pc).powf((gamma - 1.0) / gamma)))
        .sqrt();
    let pressure =
        c_star * params.expansion_ratio * (exit_pressure_pa - params.ambient_pressure_pa)
            / (g0_m_s2 * pc);
    momentum + pressure
}

#[cfg(test)]
mod tests {
    use super::*;

    const G0: f64 = 9.81;

    fn reference_engine() -> EngineGeometry {
        // 3.26 · 14 000 kg · 1.62 m/s²
        size(73_936.8, 438.3, 6_400.0, G0, &EngineParameters::default()).unwrap()
    }

    #[test]
    fn per_engine_rating_accounts_for_throttle() {
        let engine = reference_engine();
        assert!((engine.thrust_per_engine_n - 73_936.8 / 2.4).abs() < 1e-6);
    }

    #[test]
    fn exit_conditions_follow_isentropic_relations() {
        let engine = reference_engine();
        let stagnation = 1.0 + 0.5 * 0.209 * 4.45 * 4.45;
        assert!((engine.exit_temperature_k - 3241.0 / stagnation).abs() < 1e-9);
        assert!(engine.exit_pressure_pa < 3.5e6 / 100.0);
        assert!((engine.exit_area_m2 / engine.throat_area_m2 - 50.0).abs() < 1e-9);
        assert!(engine.exit_diameter_m > engine.chamber_diameter_m);
        assert!(engine.chamber_diameter_m > engine.throat_diameter_m);
    }

    #[test]
    fn ideal_isp_is_in_hydrogen_range() {
        let engine = reference_engine();
        assert!(engine.ideal_isp_s > 400.0 && engine.ideal_isp_s < 500.0, "{}", engine.ideal_isp_s);
    }

    #[test]
    fn burn_time_consumes_the_propellant() {
        let engine = reference_engine();
        let consumed = engine.burn_time_s * engine.mass_flow_kg_s * 4.0;
        assert!((consumed - 6_400.0).abs() < 1e-6);
    }

    #[test]
    fn mass_correlation_matches_hand_calculation() {
        let engine = reference_engine();
        let expected = 4.0
            * 0.0135
            * 4.0_f64.powf(0.4148)
            * engine.thrust_per_engine_n.powf(0.471)
            * 6_400.0_f64.powf(0.3574);
        assert!((engine.mass_kg - expected).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_positive_thrust_and_isp() {
        let params = EngineParameters::default();
        assert_eq!(size(0.0, 438.3, 1.0, G0, &params).unwrap_err().quantity(), "thrust_n");
        assert_eq!(size(1e5, 0.0, 1.0, G0, &params).unwrap_err().quantity(), "isp_s");
        assert_eq!(
            size(1e5, 438.3, -1.0, G0, &params).unwrap_err().quantity(),
            "propellant_mass_kg"
        );
    }
}
