//! Electrical power: solar arrays for surface operations, fuel cells for powered flight.

use lander_core::reference::EpsParameters;
use lander_core::time::{hours_to_seconds, minutes_to_seconds};
use lander_core::units::deg_to_rad;
use lander_core::{InputError, require_positive};
use serde::Serialize;

use crate::{MissionLoad, SubsystemResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpsDesign {
    pub eclipse_power_w: f64,
    pub daylight_power_w: f64,
    /// Power the array must deliver in daylight to also recharge for eclipse.
    pub array_power_w: f64,
    /// End-of-life array output per unit area.
    pub eol_specific_power_w_m2: f64,
    pub array_area_m2: f64,
    pub array_mass_kg: f64,
    pub fuel_cell_mass_kg: f64,
    pub water_mass_kg: f64,
    pub mass_kg: f64,
}

impl EpsDesign {
    pub fn result(&self) -> SubsystemResult {
        SubsystemResult {
            mass_kg: self.mass_kg,
            volume_m3: None,
            power_w: Some(self.array_power_w),
        }
    }
}

pub fn size(load: &MissionLoad, params: &EpsParameters) -> Result<EpsDesign, InputError> {
    let eclipse_power = params.power_eclipse_w * load.crew_scale;
    let daylight_power = params.power_daylight_w * load.crew_scale;
    let t_day = hours_to_seconds(require_positive("daylight_hours", params.daylight_hours)?);
    let t_eclipse = minutes_to_seconds(params.eclipse_minutes);

    let array_power = (eclipse_power * t_eclipse / params.efficiency_eclipse
        + daylight_power * t_day / params.efficiency_daylight)
        / t_day;

    let eol = params.solar_constant_w_m2
        * params.cell_efficiency
        * params.initial_degradation
        * deg_to_rad(params.incidence_angle_deg).cos()
        * params.life_degradation;
    let eol = require_positive("eol_specific_power_w_m2", eol)?;

    let array_area = array_power / eol;
    let array_mass = array_power / params.specific_performance_w_kg;

    let fuel_cell_energy_wh =
        params.fuel_cell_power_w * load.crew_scale * params.fuel_cell_hours * load.duration_scale;
    let fuel_cell_mass =
        fuel_cell_energy_wh / (params.fuel_cell_energy_density_wh_kg * params.fuel_cell_efficiency);
    let water_mass = params.water_fraction * fuel_cell_mass;

    Ok(EpsDesign {
        eclipse_power_w: eclipse_power,
        daylight_power_w: daylight_power,
        array_power_w: array_power,
        eol_specific_power_w_m2: eol,
        array_area_m2: array_area,
        array_mass_kg: array_mass,
        fuel_cell_mass_kg: fuel_cell_mass,
        water_mass_kg: water_mass,
        mass_kg: array_mass + fuel_cell_mass + water_mass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lander_core::reference::SubsystemReference;

    fn design(crew: u32, days: f64) -> EpsDesign {
        let reference = SubsystemReference::default();
        let load = MissionLoad::new(crew, days, &reference).unwrap();
        size(&load, &reference.eps).unwrap()
    }

    #[test]
    fn reference_design() {
        let eps = design(4, 15.0);
        assert!((eps.array_power_w - 5_564.97).abs() < 0.01, "{}", eps.array_power_w);
        assert!((eps.fuel_cell_mass_kg - 27_500.0 / 624.0).abs() < 1e-9);
        assert!((eps.water_mass_kg - 0.9 * eps.fuel_cell_mass_kg).abs() < 1e-12);
        assert!((eps.mass_kg - 230.18).abs() < 0.01, "{}", eps.mass_kg);
        assert!(eps.array_area_m2 > 0.0);
    }

    #[test]
    fn fuel_cells_scale_with_duration_only_through_usage() {
        let short = design(4, 15.0);
        let long = design(4, 30.0);
        assert_eq!(short.array_mass_kg, long.array_mass_kg);
        assert!((long.fuel_cell_mass_kg - 2.0 * short.fuel_cell_mass_kg).abs() < 1e-9);
    }
}
