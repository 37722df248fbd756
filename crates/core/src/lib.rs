//! Core constants, reference data, and shared primitives for the Lunar Lander Designer workspace.

pub mod reference;
pub mod regression;

mod input;

pub use input::{InputError, require_finite, require_non_negative, require_positive};
pub use reference::ReferenceData;
pub use regression::Quadratic;

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity used by the lander sizing references (m/s²).
    pub const G0: f64 = 9.81;
    /// Lunar surface gravity (m/s²).
    pub const G_MOON: f64 = 1.62;
    /// Liquid oxygen density (kg/m³).
    pub const RHO_LOX: f64 = 1141.0;
    /// Liquid hydrogen density (kg/m³).
    pub const RHO_LH2: f64 = 70.5;
    /// Oxidizer-to-fuel mass ratio for LOX/LH2.
    pub const MIXTURE_RATIO_LOX_LH2: f64 = 5.0;
    /// Tank ullage margin as a fraction of the liquid volume.
    pub const TANK_ULLAGE: f64 = 0.10;
    /// RL10B-2 vacuum specific impulse (s).
    pub const ISP_RL10B2: f64 = 438.3;
    /// Descent from low lunar orbit to the surface (m/s).
    pub const DELTA_V_LLO_TO_SURFACE: f64 = 1905.0;
    /// Ascent from the surface to low lunar orbit (m/s).
    pub const DELTA_V_SURFACE_TO_LLO: f64 = 1963.0;
    /// Margin applied on top of the nominal delta-V budgets.
    pub const DELTA_V_MARGIN: f64 = 1.05;
    /// Stefan-Boltzmann constant (W/m²/K⁴).
    pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;
    /// Mean solar irradiance at 1 AU (W/m²).
    pub const SOLAR_CONSTANT: f64 = 1367.0;
    /// Crew member plus pressure suit (kg).
    pub const CREW_MASS_KG: f64 = 122.0;
    /// Food (30 % recycled), water, oxygen, and hygiene per crew-day (kg).
    pub const CONSUMABLES_KG_PER_CREW_DAY: f64 = 4.74;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilograms to tonnes.
    #[inline]
    pub fn kg_to_t(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v.to_radians()
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_HOUR;

    /// Convert hours to seconds.
    #[inline]
    pub fn hours_to_seconds(hours: f64) -> f64 {
        hours * SECONDS_PER_HOUR
    }

    /// Convert minutes to seconds.
    #[inline]
    pub fn minutes_to_seconds(minutes: f64) -> f64 {
        minutes * 60.0
    }
}

/// Circle helpers for diameters derived from flow areas.
pub mod geometry {
    use std::f64::consts::PI;

    /// Diameter of a circle with the given area.
    #[inline]
    pub fn diameter_from_area(area: f64) -> f64 {
        (4.0 * area / PI).sqrt()
    }
}
