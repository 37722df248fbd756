//! Lander design façade: the mass-closure loop plus re-exports of the component crates it drives.

mod designer;
mod pass;
pub mod state;

pub use designer::{DesignError, LanderDesigner};
pub use state::{DesignResult, DesignState, VehicleDesign};

pub use lander_config::{MissionParameters, RunSettings};
pub use lander_estimation as estimation;
pub use lander_propulsion as propulsion;
pub use lander_subsystems as subsystems;
