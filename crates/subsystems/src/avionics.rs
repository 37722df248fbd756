//! Guidance, navigation, communications, and data handling.

use lander_core::reference::Baseline;

use crate::SubsystemResult;

/// Avionics do not scale with crew or duration.
pub fn size(baseline: &Baseline) -> SubsystemResult {
    SubsystemResult {
        mass_kg: baseline.mass_kg,
        volume_m3: Some(baseline.volume_m3),
        power_w: Some(baseline.power_w),
    }
}
