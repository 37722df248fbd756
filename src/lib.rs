//! Lunar Lander Designer.
//!
//! The mass-closure loop lives in `lander_design`; the component models it drives are split
//! into their own crates so the command-line front end and tests can reach each one directly.
//! Charts are rendered here because only the binary needs the drawing stack.

pub mod plot;

pub use lander_config as config;
pub use lander_core as common;
pub use lander_design as design;
pub use lander_estimation as estimation;
pub use lander_export as export;
pub use lander_propulsion as propulsion;
pub use lander_subsystems as subsystems;

pub use lander_design::{DesignError, DesignResult, DesignState, LanderDesigner};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
