//! Immutable reference data injected into every sizing component.
//!
//! Defaults reproduce the baseline LOX/LH2 crewed lander: regression coefficients fitted to the
//! historical lander table, RL10-class engine thermochemistry, Al-2219 toroidal tanks, and the
//! four-crew, fifteen-day subsystem baselines.

use crate::constants::{
    CONSUMABLES_KG_PER_CREW_DAY, G0, G_MOON, MIXTURE_RATIO_LOX_LH2, RHO_LH2, RHO_LOX,
    SOLAR_CONSTANT, TANK_ULLAGE,
};
use crate::regression::Quadratic;

/// Historical lunar lander table used to derive the mass regressions.
pub mod historical {
    /// Total vehicle mass of each reference lander (kg).
    pub const TOTAL_MASS_KG: [f64; 6] = [15_200.0, 4_700.0, 10_300.0, 23_375.0, 15_847.0, 43_400.0];
    /// Payload mass (kg), paired with `TOTAL_MASS_KG` entries 0, 1, 2, 3, 5.
    pub const PAYLOAD_KG: [f64; 5] = [2_100.0, 1_400.0, 640.0, 2_480.0, 1_600.0];
    /// Indices into `TOTAL_MASS_KG` that carry a payload record.
    pub const PAYLOAD_INDICES: [usize; 5] = [0, 1, 2, 3, 5];
    /// Dry mass (kg), paired with the first five `TOTAL_MASS_KG` entries.
    pub const DRY_MASS_KG: [f64; 5] = [2_180.0, 2_033.0, 2_245.0, 3_547.0, 2_435.0];
    /// Abscissa scale used when fitting (kg per tonne).
    pub const FIT_SCALE: f64 = 1_000.0;
}

/// Grouped coefficient sets for every component in the sizing chain.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceData {
    pub regression: RegressionSet,
    pub propellant: PropellantProperties,
    pub engine: EngineParameters,
    pub tank: TankParameters,
    pub structure: StructureCoefficients,
    pub subsystems: SubsystemReference,
}

/// Payload and dry-mass regressions against total mass (kg → kg).
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionSet {
    pub payload: Quadratic,
    pub dry_mass: Quadratic,
}

impl Default for RegressionSet {
    fn default() -> Self {
        Self {
            payload: Quadratic::new(
                -2.492_480_426_560_390_4e-6,
                0.138_233_054_966_474_06,
                353.360_536_755_177_7,
            ),
            dry_mass: Quadratic::new(
                6.257_427_492_468_938e-6,
                -0.099_526_098_095_476_01,
                2_422.219_281_289_613_3,
            ),
        }
    }
}

impl RegressionSet {
    /// Refit both regressions from the historical table.
    pub fn from_historical() -> Option<Self> {
        use historical::*;

        let payload_x: Vec<f64> = PAYLOAD_INDICES.iter().map(|&i| TOTAL_MASS_KG[i]).collect();
        let payload = Quadratic::fit(&payload_x, &PAYLOAD_KG, FIT_SCALE)?;
        let dry_mass = Quadratic::fit(&TOTAL_MASS_KG[..5], &DRY_MASS_KG, FIT_SCALE)?;
        Some(Self { payload, dry_mass })
    }
}

/// Propellant densities and rocket-equation constants.
#[derive(Debug, Clone, PartialEq)]
pub struct PropellantProperties {
    pub g0_m_s2: f64,
    pub fuel_density_kg_m3: f64,
    pub oxidizer_density_kg_m3: f64,
    pub ullage_fraction: f64,
    pub default_mixture_ratio: f64,
}

impl Default for PropellantProperties {
    fn default() -> Self {
        Self {
            g0_m_s2: G0,
            fuel_density_kg_m3: RHO_LH2,
            oxidizer_density_kg_m3: RHO_LOX,
            ullage_fraction: TANK_ULLAGE,
            default_mixture_ratio: MIXTURE_RATIO_LOX_LH2,
        }
    }
}

/// Engine cluster layout, combustion products, and nozzle assumptions.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineParameters {
    pub engine_count: u32,
    /// Required thrust-to-weight ratio on the lunar surface.
    pub thrust_to_weight: f64,
    /// Throttle setting used to size the per-engine rating.
    pub throttle: f64,
    pub lunar_gravity_m_s2: f64,
    pub gamma: f64,
    pub gas_constant_j_kg_k: f64,
    pub c_star_m_s: f64,
    pub chamber_temperature_k: f64,
    pub chamber_pressure_pa: f64,
    pub ambient_pressure_pa: f64,
    pub expansion_ratio: f64,
    pub exit_mach: f64,
    /// Characteristic chamber length L* (m).
    pub characteristic_length_m: f64,
    pub contraction_ratio: f64,
    pub divergent_half_angle_deg: f64,
    pub convergent_half_angle_deg: f64,
    /// Bell nozzle length as a fraction of the equivalent conical nozzle.
    pub bell_fraction: f64,
    pub mass_correlation: EngineMassCorrelation,
}

impl Default for EngineParameters {
    fn default() -> Self {
        Self {
            engine_count: 4,
            thrust_to_weight: 3.26,
            throttle: 0.6,
            lunar_gravity_m_s2: G_MOON,
            gamma: 1.209,
            gas_constant_j_kg_k: 704.6,
            c_star_m_s: 2323.8,
            chamber_temperature_k: 3241.0,
            chamber_pressure_pa: 3.5e6,
            ambient_pressure_pa: 0.0,
            expansion_ratio: 50.0,
            exit_mach: 4.45,
            characteristic_length_m: 0.89,
            contraction_ratio: 5.0,
            divergent_half_angle_deg: 15.0,
            convergent_half_angle_deg: 45.0,
            bell_fraction: 0.8,
            mass_correlation: EngineMassCorrelation::default(),
        }
    }
}

/// `m = scale · k · N^n_exp · F^f_exp · m_prop^p_exp` for the whole engine cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineMassCorrelation {
    pub scale: f64,
    pub coefficient: f64,
    pub count_exponent: f64,
    pub thrust_exponent: f64,
    pub propellant_exponent: f64,
}

impl Default for EngineMassCorrelation {
    fn default() -> Self {
        Self {
            scale: 4.0,
            coefficient: 0.0135,
            count_exponent: 0.4148,
            thrust_exponent: 0.471,
            propellant_exponent: 0.3574,
        }
    }
}

/// Toroidal cryogenic tank design assumptions.
#[derive(Debug, Clone, PartialEq)]
pub struct TankParameters {
    /// Major-to-minor radius ratio R/r.
    pub aspect_ratio: f64,
    pub fuel_pressure_pa: f64,
    pub oxidizer_pressure_pa: f64,
    pub allowable_stress_pa: f64,
    pub safety_factor: f64,
    pub wall_density_kg_m3: f64,
}

impl Default for TankParameters {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.85,
            fuel_pressure_pa: 170e3,
            oxidizer_pressure_pa: 190e3,
            allowable_stress_pa: 75.8e6,
            safety_factor: 1.5,
            wall_density_kg_m3: 2800.0,
        }
    }
}

/// Merill structural correlation and landing-gear fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureCoefficients {
    pub dry_coefficient: f64,
    pub dry_exponent: f64,
    pub inert_coefficient: f64,
    pub inert_exponent: f64,
    pub constant_kg: f64,
    pub landing_gear_fraction: f64,
}

impl Default for StructureCoefficients {
    fn default() -> Self {
        Self {
            dry_coefficient: 1.325,
            dry_exponent: 2.863,
            inert_coefficient: 5.651e-5,
            inert_exponent: 5.269,
            constant_kg: 1390.0,
            landing_gear_fraction: 0.08,
        }
    }
}

/// Crew and duration baselines plus per-subsystem parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsystemReference {
    pub reference_crew: u32,
    pub reference_duration_days: f64,
    /// Crew consumables (food with 30 % recycling, water, oxygen, other), kg per crew-day.
    pub consumables_kg_per_crew_day: f64,
    pub avionics: Baseline,
    pub eclss: Baseline,
    pub eps: EpsParameters,
    pub tcs: TcsParameters,
}

impl Default for SubsystemReference {
    fn default() -> Self {
        Self {
            reference_crew: 4,
            reference_duration_days: 15.0,
            consumables_kg_per_crew_day: CONSUMABLES_KG_PER_CREW_DAY,
            avionics: Baseline {
                mass_kg: 185.805,
                volume_m3: 1.5371,
                power_w: 837.9,
            },
            eclss: Baseline {
                mass_kg: 2840.45,
                volume_m3: 13.52,
                power_w: 3160.0,
            },
            eps: EpsParameters::default(),
            tcs: TcsParameters::default(),
        }
    }
}

/// Mass, volume, and power of a subsystem at the reference crew and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub mass_kg: f64,
    pub volume_m3: f64,
    pub power_w: f64,
}

/// Solar array and fuel cell sizing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EpsParameters {
    pub power_eclipse_w: f64,
    pub power_daylight_w: f64,
    pub daylight_hours: f64,
    pub eclipse_minutes: f64,
    pub efficiency_eclipse: f64,
    pub efficiency_daylight: f64,
    pub cell_efficiency: f64,
    pub solar_constant_w_m2: f64,
    pub initial_degradation: f64,
    pub life_degradation: f64,
    pub incidence_angle_deg: f64,
    /// Array specific performance (W/kg).
    pub specific_performance_w_kg: f64,
    pub fuel_cell_power_w: f64,
    pub fuel_cell_energy_density_wh_kg: f64,
    pub fuel_cell_hours: f64,
    pub fuel_cell_efficiency: f64,
    /// Product water carried per kilogram of fuel cell.
    pub water_fraction: f64,
}

impl Default for EpsParameters {
    fn default() -> Self {
        Self {
            power_eclipse_w: 4000.0,
            power_daylight_w: 4700.0,
            daylight_hours: 75.0,
            eclipse_minutes: 26.0,
            efficiency_eclipse: 0.65,
            efficiency_daylight: 0.85,
            cell_efficiency: 0.30,
            solar_constant_w_m2: SOLAR_CONSTANT,
            initial_degradation: 0.90,
            life_degradation: 0.97,
            incidence_angle_deg: 23.0,
            specific_performance_w_kg: 38.0,
            fuel_cell_power_w: 5000.0,
            fuel_cell_energy_density_wh_kg: 780.0,
            fuel_cell_hours: 5.5,
            fuel_cell_efficiency: 0.8,
            water_fraction: 0.9,
        }
    }
}

/// Multi-layer insulation, radiator, and active cooling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TcsParameters {
    pub heat_load_w: f64,
    pub habitable_area_m2: f64,
    pub propulsion_frontal_area_m2: f64,
    pub lox_tank_area_m2: f64,
    pub lh2_tank_area_m2: f64,
    pub propulsion_lateral_area_m2: f64,
    pub mli_specific_mass_kg_m2: f64,
    pub mli_thickness_m: f64,
    /// Share of the heat load rejected through radiators.
    pub radiator_share: f64,
    pub radiator_temperature_k: f64,
    pub sink_temperature_k: f64,
    pub radiator_emissivity: f64,
    pub radiator_specific_mass_kg_m2: f64,
    pub active_cooling_mass_kg: f64,
    pub pump_power_w: f64,
    pub heater_power_w: f64,
    pub control_power_w: f64,
}

impl Default for TcsParameters {
    fn default() -> Self {
        Self {
            heat_load_w: 4500.0,
            habitable_area_m2: 66.63,
            propulsion_frontal_area_m2: 28.0,
            lox_tank_area_m2: 51.65,
            lh2_tank_area_m2: 86.55,
            propulsion_lateral_area_m2: 85.76,
            mli_specific_mass_kg_m2: 0.7,
            mli_thickness_m: 0.03,
            radiator_share: 0.5,
            radiator_temperature_k: 300.0,
            sink_temperature_k: 100.0,
            radiator_emissivity: 0.85,
            radiator_specific_mass_kg_m2: 5.0,
            active_cooling_mass_kg: 150.0,
            pump_power_w: 200.0,
            heater_power_w: 500.0,
            control_power_w: 50.0,
        }
    }
}

impl TcsParameters {
    /// Total surface area under thermal control (m²).
    pub fn controlled_area_m2(&self) -> f64 {
        self.habitable_area_m2
            + self.propulsion_frontal_area_m2
            + self.lox_tank_area_m2
            + self.lh2_tank_area_m2
            + self.propulsion_lateral_area_m2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn default_regressions_match_historical_fit() {
        let fitted = RegressionSet::from_historical().expect("historical fit");
        let baked = RegressionSet::default();
        assert!(rel(fitted.payload.a, baked.payload.a) < 1e-9);
        assert!(rel(fitted.payload.b, baked.payload.b) < 1e-9);
        assert!(rel(fitted.payload.c, baked.payload.c) < 1e-9);
        assert!(rel(fitted.dry_mass.a, baked.dry_mass.a) < 1e-9);
        assert!(rel(fitted.dry_mass.b, baked.dry_mass.b) < 1e-9);
        assert!(rel(fitted.dry_mass.c, baked.dry_mass.c) < 1e-9);
    }

    #[test]
    fn controlled_area_sums_all_surfaces() {
        let tcs = TcsParameters::default();
        assert!((tcs.controlled_area_m2() - 318.59).abs() < 1e-9);
    }
}
