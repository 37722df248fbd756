use lunar_lander_designer::common::reference::{PropellantProperties, ReferenceData};
use lunar_lander_designer::config::MissionParameters;
use lunar_lander_designer::estimation::mass;
use lunar_lander_designer::propulsion::propellant;
use lunar_lander_designer::LanderDesigner;
use proptest::prelude::*;

proptest! {
    #[test]
    fn species_split_keeps_ratio_and_sum(total in 1.0f64..50_000.0, ratio in 0.5f64..10.0) {
        let (fuel, oxidizer) = propellant::split(total, ratio);
        prop_assert!(fuel > 0.0 && oxidizer > 0.0);
        prop_assert!((fuel + oxidizer - total).abs() <= 1e-9 * total);
        prop_assert!((oxidizer / fuel - ratio).abs() <= 1e-9 * ratio);
    }

    #[test]
    fn propellant_grows_with_inert_mass(
        inert in 1_000.0f64..20_000.0,
        extra in 1.0f64..5_000.0,
        isp in 300.0f64..470.0,
    ) {
        let props = PropellantProperties::default();
        let light = propellant::compute(inert, 2_000.0, 2_061.0, isp, 5.0, &props).unwrap();
        let heavy = propellant::compute(inert + extra, 2_000.0, 2_061.0, isp, 5.0, &props).unwrap();
        prop_assert!(heavy.total_kg > light.total_kg);
        prop_assert!((light.ascent_kg + light.descent_kg - light.total_kg).abs() < 1e-6);
        prop_assert!(light.fuel.tank_volume_m3 > light.fuel.liquid_volume_m3);
    }

    #[test]
    fn regression_estimates_are_never_negative(total in 1.0f64..200_000.0) {
        let reference = ReferenceData::default();
        let estimate = mass::estimate(total, None, &reference.regression).unwrap();
        prop_assert!(estimate.payload_kg >= 0.0);
        prop_assert!(estimate.dry_kg >= 0.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn converged_designs_close_their_budget(
        crew in 1u32..8,
        days in 1.0f64..30.0,
        start in 8_000.0f64..40_000.0,
    ) {
        let params = MissionParameters {
            n_crew: crew,
            mission_duration_days: days,
            initial_total_mass_kg: start,
            ..MissionParameters::default()
        };
        let result = LanderDesigner::new(params).unwrap().iterate_design(10.0, 100, false).unwrap();
        let s = &result.final_state;
        prop_assert!(result.converged);
        prop_assert!(s.delta_kg < 10.0);
        let rebuilt = s.payload_kg + s.dry_mass_kg + s.propellant_kg;
        prop_assert!((s.total_mass_kg - rebuilt).abs() <= 1e-6 * s.total_mass_kg);
    }
}
