//! Thermal control: multi-layer insulation, radiators, and active cooling.

use lander_core::constants::STEFAN_BOLTZMANN;
use lander_core::reference::TcsParameters;
use lander_core::{InputError, require_positive};
use serde::Serialize;

use crate::{MissionLoad, SubsystemResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TcsDesign {
    pub heat_load_w: f64,
    pub controlled_area_m2: f64,
    pub mli_mass_kg: f64,
    /// Net radiated flux at the radiator and sink temperatures.
    pub rejection_flux_w_m2: f64,
    pub radiator_area_m2: f64,
    pub radiator_mass_kg: f64,
    pub active_cooling_mass_kg: f64,
    pub mass_kg: f64,
    pub volume_m3: f64,
    pub power_w: f64,
}

impl TcsDesign {
    pub fn result(&self) -> SubsystemResult {
        SubsystemResult {
            mass_kg: self.mass_kg,
            volume_m3: Some(self.volume_m3),
            power_w: Some(self.power_w),
        }
    }
}

/// Heat load scales with crew; insulated area and hardware do not depend on duration.
pub fn size(load: &MissionLoad, params: &TcsParameters) -> Result<TcsDesign, InputError> {
    let heat_load = params.heat_load_w * load.crew_scale;
    let area = params.controlled_area_m2();
    let mli_mass = area * params.mli_specific_mass_kg_m2;

    let flux = STEFAN_BOLTZMANN
        * params.radiator_emissivity
        * (params.radiator_temperature_k.powi(4) - params.sink_temperature_k.powi(4));
    let flux = require_positive("radiator_flux_w_m2", flux)?;
    let radiator_area = heat_load * params.radiator_share / flux;
    let radiator_mass = radiator_area * params.radiator_specific_mass_kg_m2;

    Ok(TcsDesign {
        heat_load_w: heat_load,
        controlled_area_m2: area,
        mli_mass_kg: mli_mass,
        rejection_flux_w_m2: flux,
        radiator_area_m2: radiator_area,
        radiator_mass_kg: radiator_mass,
        active_cooling_mass_kg: params.active_cooling_mass_kg,
        mass_kg: mli_mass + radiator_mass + params.active_cooling_mass_kg,
        volume_m3: area * params.mli_thickness_m,
        power_w: params.pump_power_w + params.heater_power_w + params.control_power_w,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lander_core::reference::SubsystemReference;

    #[test]
    fn reference_design() {
        let reference = SubsystemReference::default();
        let load = MissionLoad::new(4, 15.0, &reference).unwrap();
        let tcs = size(&load, &reference.tcs).unwrap();
        assert!((tcs.mli_mass_kg - 223.013).abs() < 1e-3);
        assert!((tcs.radiator_area_m2 - 5.8357).abs() < 1e-3, "{}", tcs.radiator_area_m2);
        assert!((tcs.mass_kg - 402.19).abs() < 0.01, "{}", tcs.mass_kg);
        assert!((tcs.volume_m3 - 9.5577).abs() < 1e-3);
        assert_eq!(tcs.power_w, 750.0);
    }

    #[test]
    fn radiator_grows_with_crew() {
        let reference = SubsystemReference::default();
        let four = size(&MissionLoad::new(4, 15.0, &reference).unwrap(), &reference.tcs).unwrap();
        let eight = size(&MissionLoad::new(8, 15.0, &reference).unwrap(), &reference.tcs).unwrap();
        assert!((eight.radiator_area_m2 - 2.0 * four.radiator_area_m2).abs() < 1e-9);
        assert_eq!(eight.mli_mass_kg, four.mli_mass_kg);
    }

    #[test]
    fn stay_length_does_not_change_thermal_hardware() {
        let reference = SubsystemReference::default();
        let short = size(&MissionLoad::new(4, 3.0, &reference).unwrap(), &reference.tcs).unwrap();
        let long = size(&MissionLoad::new(4, 45.0, &reference).unwrap(), &reference.tcs).unwrap();
        assert_eq!(short, long);
    }
}
