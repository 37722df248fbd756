//! Cryogenic tank geometry and wall sizing.

use std::f64::consts::PI;

use lander_core::reference::TankParameters;
use lander_core::{InputError, require_non_negative, require_positive};
use serde::Serialize;

/// Supported tank shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TankShape {
    #[default]
    Toroidal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TankGeometry {
    pub shape: TankShape,
    pub volume_m3: f64,
    pub pressure_pa: f64,
    /// Tube radius r.
    pub minor_radius_m: f64,
    /// Centre-line radius R.
    pub major_radius_m: f64,
    /// R + r.
    pub outer_radius_m: f64,
    /// R − r, radius of the central opening.
    pub inner_radius_m: f64,
    pub wall_thickness_m: f64,
    pub mass_kg: f64,
}

/// Size a tank enclosing `volume_m3` at operating pressure `pressure_pa`.
///
/// For a torus with `R = k·r`, `V = 2π²·k·r³`. The wall follows thin-shell theory with the
/// toroidal hoop correction, `t = SF·p·r/(2σ)·(2R + r)/(R + r)`.
pub fn size(
    volume_m3: f64,
    pressure_pa: f64,
    shape: TankShape,
    params: &TankParameters,
) -> Result<TankGeometry, InputError> {
    let volume = require_non_negative("tank_volume_m3", volume_m3)?;
    let pressure = require_non_negative("tank_pressure_pa", pressure_pa)?;
    let k = require_positive("tank_aspect_ratio", params.aspect_ratio)?;
    let sigma = require_positive("allowable_stress_pa", params.allowable_stress_pa)?;

    match shape {
        TankShape::Toroidal => {
            let r = (volume / (2.0 * PI * PI * k)).cbrt();
            let big_r = k * r;
            let thickness = if r > 0.0 {
                params.safety_factor * pressure * r / (2.0 * sigma) * (2.0 * big_r + r)
                    / (big_r + r)
            } else {
                0.0
            };
            let surface = 4.0 * PI * PI * big_r * r;
            Ok(TankGeometry {
                shape,
                volume_m3: volume,
                pressure_pa: pressure,
                minor_radius_m: r,
                major_radius_m: big_r,
                outer_radius_m: big_r + r,
                inner_radius_m: big_r - r,
                wall_thickness_m: thickness,
                mass_kg: params.wall_density_kg_m3 * surface * thickness,
            })
        }
    }
}
