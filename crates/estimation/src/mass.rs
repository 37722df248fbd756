//! Regression-based payload and dry mass estimates.

use lander_core::constants::{CONSUMABLES_KG_PER_CREW_DAY, CREW_MASS_KG};
use lander_core::reference::RegressionSet;
use lander_core::{InputError, require_non_negative, require_positive};
use serde::Serialize;

/// Default bounds on equipment and cargo carried beyond crew and consumables (kg).
pub const ADDITIONAL_PAYLOAD_MIN_KG: f64 = 500.0;
pub const ADDITIONAL_PAYLOAD_MAX_KG: f64 = 2_000.0;

/// Payload and dry mass implied by a total-mass guess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassEstimate {
    /// Payload carried by the vehicle: the override when one is set.
    pub payload_kg: f64,
    /// Regression payload, whether or not an override replaces it.
    pub statistical_payload_kg: f64,
    pub dry_kg: f64,
}

impl MassEstimate {
    /// Regression payload plus regression dry mass.
    ///
    /// This is the inert mass propellant and structure are sized from; a payload override does
    /// not enter it.
    pub fn inert_kg(&self) -> f64 {
        self.statistical_payload_kg + self.dry_kg
    }
}

/// Evaluate the payload and dry-mass regressions at `total_mass_kg`.
///
/// A supplied `payload_override_kg` replaces the carried payload; both regressions are evaluated
/// regardless. Regression outputs are clamped at zero; both parabolas
/// leave the physical range well outside the historical data.
pub fn estimate(
    total_mass_kg: f64,
    payload_override_kg: Option<f64>,
    regression: &RegressionSet,
) -> Result<MassEstimate, InputError> {
    let total = require_positive("total_mass_kg", total_mass_kg)?;
    let statistical_payload_kg = regression.payload.eval(total).max(0.0);
    let payload_kg = match payload_override_kg {
        Some(value) => require_non_negative("payload_override_kg", value)?,
        None => statistical_payload_kg,
    };
    let dry_kg = regression.dry_mass.eval(total).max(0.0);
    Ok(MassEstimate {
        payload_kg,
        statistical_payload_kg,
        dry_kg,
    })
}

/// Bounds on the payload a crewed mission needs to carry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

/// Crew, consumables, and additional cargo bounds for a mission.
pub fn payload_requirements(
    n_crew: u32,
    duration_days: f64,
    additional_min_kg: f64,
    additional_max_kg: f64,
) -> Result<PayloadRange, InputError> {
    if n_crew == 0 {
        return Err(InputError::OutOfRange {
            quantity: "n_crew",
            reason: "at least one crew member is required".to_string(),
        });
    }
    let days = require_positive("duration_days", duration_days)?;
    let extra_min = require_non_negative("additional_min_kg", additional_min_kg)?;
    let extra_max = require_non_negative("additional_max_kg", additional_max_kg)?;
    if extra_max < extra_min {
        return Err(InputError::OutOfRange {
            quantity: "additional_max_kg",
            reason: format!("{extra_max} is below the minimum {extra_min}"),
        });
    }

    let crew = f64::from(n_crew);
    let base = crew * CREW_MASS_KG + crew * days * CONSUMABLES_KG_PER_CREW_DAY;
    Ok(PayloadRange {
        min_kg: base + extra_min,
        max_kg: base + extra_max,
    })
}

/// Ratios describing how the vehicle mass is distributed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MassFractions {
    /// Total over inert mass.
    pub mass_ratio: f64,
    pub payload_fraction: f64,
    pub dry_fraction: f64,
    pub inert_fraction: f64,
    pub propellant_fraction: f64,
}

/// Mass ratio and fractions of total mass; a zero denominator yields 0.
pub fn mass_fractions(
    total_kg: f64,
    inert_kg: f64,
    propellant_kg: f64,
    payload_kg: f64,
    dry_kg: f64,
) -> MassFractions {
    let of_total = |value: f64| if total_kg > 0.0 { value / total_kg } else { 0.0 };
    MassFractions {
        mass_ratio: if inert_kg > 0.0 { total_kg / inert_kg } else { 0.0 },
        payload_fraction: of_total(payload_kg),
        dry_fraction: of_total(dry_kg),
        inert_fraction: of_total(inert_kg),
        propellant_fraction: of_total(propellant_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regression_at_reference_mass() {
        let est = estimate(30_000.0, None, &RegressionSet::default()).unwrap();
        assert!((est.payload_kg - 2_257.12).abs() < 0.1, "{}", est.payload_kg);
        assert!((est.dry_kg - 5_068.12).abs() < 0.1, "{}", est.dry_kg);
        assert!((est.inert_kg() - (est.payload_kg + est.dry_kg)).abs() < 1e-12);
    }

    #[test]
    fn override_replaces_carried_payload_only() {
        let regression = RegressionSet::default();
        let stat = estimate(20_000.0, None, &regression).unwrap();
        let fixed = estimate(20_000.0, Some(1_060.0), &regression).unwrap();
        assert_eq!(fixed.payload_kg, 1_060.0);
        assert_eq!(fixed.statistical_payload_kg, stat.payload_kg);
        assert_eq!(fixed.dry_kg, stat.dry_kg);
        assert_eq!(fixed.inert_kg(), stat.inert_kg());
    }

    #[test]
    fn payload_clamped_far_outside_data() {
        let est = estimate(80_000.0, None, &RegressionSet::default()).unwrap();
        assert_eq!(est.payload_kg, 0.0);
        assert!(est.dry_kg > 0.0);
    }

    #[test]
    fn rejects_bad_total_and_override() {
        let regression = RegressionSet::default();
        assert!(matches!(
            estimate(0.0, None, &regression),
            Err(InputError::NonPositive { quantity: "total_mass_kg", .. })
        ));
        assert!(estimate(f64::NAN, None, &regression).is_err());
        assert!(matches!(
            estimate(10_000.0, Some(-5.0), &regression),
            Err(InputError::Negative { .. })
        ));
    }

    #[test]
    fn payload_requirements_for_reference_crew() {
        let range = payload_requirements(
            4,
            15.0,
            ADDITIONAL_PAYLOAD_MIN_KG,
            ADDITIONAL_PAYLOAD_MAX_KG,
        )
        .unwrap();
        // 4 · 122 + 4 · 15 · 4.74 = 772.4
        assert!((range.min_kg - 1_272.4).abs() < 1e-9);
        assert!((range.max_kg - 2_772.4).abs() < 1e-9);
        assert!(payload_requirements(0, 15.0, 0.0, 0.0).is_err());
        assert!(payload_requirements(2, 10.0, 900.0, 100.0).is_err());
    }

    #[test]
    fn fractions_handle_zero_denominators() {
        let f = mass_fractions(10_000.0, 4_000.0, 6_000.0, 1_000.0, 3_000.0);
        assert!((f.mass_ratio - 2.5).abs() < 1e-12);
        assert!((f.propellant_fraction - 0.6).abs() < 1e-12);
        assert!((f.payload_fraction + f.dry_fraction - f.inert_fraction).abs() < 1e-12);

        let zero = mass_fractions(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero, MassFractions::default());
    }
}
