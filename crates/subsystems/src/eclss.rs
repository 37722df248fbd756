//! Environmental control and life support.
//!
//! The baseline mass bundles hardware with the consumables of the reference mission. Hardware
//! scales with crew; consumables are rebuilt from crew-days.

use lander_core::reference::SubsystemReference;

use crate::{MissionLoad, SubsystemResult};

pub fn size(load: &MissionLoad, reference: &SubsystemReference) -> SubsystemResult {
    let per_crew_day = reference.consumables_kg_per_crew_day;
    let reference_consumables = f64::from(reference.reference_crew)
        * reference.reference_duration_days
        * per_crew_day;
    let hardware = (reference.eclss.mass_kg - reference_consumables) * load.crew_scale;
    let consumables = load.crew_days() * per_crew_day;

    SubsystemResult {
        mass_kg: hardware + consumables,
        volume_m3: Some(reference.eclss.volume_m3 * load.crew_scale),
        power_w: Some(reference.eclss.power_w * load.crew_scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumables_track_crew_days() {
        let reference = SubsystemReference::default();
        let base = size(&MissionLoad::new(4, 15.0, &reference).unwrap(), &reference);
        let long = size(&MissionLoad::new(4, 25.0, &reference).unwrap(), &reference);
        assert!((long.mass_kg - base.mass_kg - 4.0 * 10.0 * 4.74).abs() < 1e-9);
        assert_eq!(long.volume_m3, base.volume_m3);
    }

    #[test]
    fn hardware_scales_with_crew() {
        let reference = SubsystemReference::default();
        let two = size(&MissionLoad::new(2, 15.0, &reference).unwrap(), &reference);
        // Half the hardware, half the consumables.
        assert!((two.mass_kg - 2_840.45 / 2.0).abs() < 1e-9);
        assert!((two.power_w.unwrap() - 1_580.0).abs() < 1e-9);
    }
}
