//! Subsystem sizing models.
//!
//! Every model is an independent function of the crew count and mission duration; none reads
//! another model's output. Results are scaled linearly from the reference crew and duration held
//! in [`SubsystemReference`].

pub mod avionics;
pub mod eclss;
pub mod eps;
pub mod tcs;

use lander_core::reference::SubsystemReference;
use lander_core::{InputError, require_positive};
use serde::Serialize;

pub use eps::EpsDesign;
pub use tcs::TcsDesign;

/// Crew and duration driving every subsystem model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissionLoad {
    pub n_crew: u32,
    pub duration_days: f64,
    /// `n_crew / reference_crew`.
    pub crew_scale: f64,
    /// `duration_days / reference_duration_days`.
    pub duration_scale: f64,
}

impl MissionLoad {
    pub fn new(
        n_crew: u32,
        duration_days: f64,
        reference: &SubsystemReference,
    ) -> Result<Self, InputError> {
        if n_crew == 0 {
            return Err(InputError::OutOfRange {
                quantity: "n_crew",
                reason: "at least one crew member is required".to_string(),
            });
        }
        let duration_days = require_positive("mission_duration_days", duration_days)?;
        Ok(Self {
            n_crew,
            duration_days,
            crew_scale: f64::from(n_crew) / f64::from(reference.reference_crew),
            duration_scale: duration_days / reference.reference_duration_days,
        })
    }

    pub fn crew_days(&self) -> f64 {
        f64::from(self.n_crew) * self.duration_days
    }
}

/// Mass, volume, and power of one subsystem. Volume and power are absent when a model does not
/// estimate them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubsystemResult {
    pub mass_kg: f64,
    pub volume_m3: Option<f64>,
    pub power_w: Option<f64>,
}

/// All subsystem results for one design pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubsystemSuite {
    pub avionics: SubsystemResult,
    pub eclss: SubsystemResult,
    pub eps: EpsDesign,
    pub tcs: TcsDesign,
}

impl SubsystemSuite {
    /// Named results in a stable order.
    pub fn entries(&self) -> [(&'static str, SubsystemResult); 4] {
        [
            ("avionics", self.avionics),
            ("eclss", self.eclss),
            ("eps", self.eps.result()),
            ("tcs", self.tcs.result()),
        ]
    }

    pub fn total_mass_kg(&self) -> f64 {
        self.entries().iter().map(|(_, r)| r.mass_kg).sum()
    }

    pub fn total_volume_m3(&self) -> f64 {
        self.entries().iter().filter_map(|(_, r)| r.volume_m3).sum()
    }

    pub fn total_power_w(&self) -> f64 {
        self.entries().iter().filter_map(|(_, r)| r.power_w).sum()
    }
}

/// Run every subsystem model against the same mission load.
pub fn size_all(
    n_crew: u32,
    duration_days: f64,
    reference: &SubsystemReference,
) -> Result<SubsystemSuite, InputError> {
    let load = MissionLoad::new(n_crew, duration_days, reference)?;
    Ok(SubsystemSuite {
        avionics: avionics::size(&reference.avionics),
        eclss: eclss::size(&load, reference),
        eps: eps::size(&load, &reference.eps)?,
        tcs: tcs::size(&load, &reference.tcs)?,
    })
}
