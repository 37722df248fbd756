//! Configuration models and loaders for the Lunar Lander Designer.

use std::fs::File;
use std::path::Path;

use lander_core::constants::{
    DELTA_V_LLO_TO_SURFACE, DELTA_V_MARGIN, DELTA_V_SURFACE_TO_LLO, ISP_RL10B2,
    MIXTURE_RATIO_LOX_LH2,
};
use lander_core::{InputError, require_non_negative, require_positive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mission inputs fixed for the lifetime of a design run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MissionParameters {
    /// Starting guess for the total vehicle mass (kg).
    pub initial_total_mass_kg: f64,
    pub n_crew: u32,
    pub mission_duration_days: f64,
    /// Fixed payload replacing the statistical estimate (kg).
    pub payload_override_kg: Option<f64>,
    /// Low lunar orbit to surface, including margin (m/s).
    pub delta_v_descent_m_s: f64,
    /// Surface to low lunar orbit, including margin (m/s).
    pub delta_v_ascent_m_s: f64,
    pub isp_s: f64,
    /// Oxidizer-to-fuel mass ratio.
    pub mixture_ratio: f64,
}

impl Default for MissionParameters {
    fn default() -> Self {
        Self {
            initial_total_mass_kg: 30_000.0,
            n_crew: 4,
            mission_duration_days: 15.0,
            payload_override_kg: None,
            delta_v_descent_m_s: DELTA_V_LLO_TO_SURFACE * DELTA_V_MARGIN,
            delta_v_ascent_m_s: DELTA_V_SURFACE_TO_LLO * DELTA_V_MARGIN,
            isp_s: ISP_RL10B2,
            mixture_ratio: MIXTURE_RATIO_LOX_LH2,
        }
    }
}

impl MissionParameters {
    /// Reject out-of-range values, naming the first offending field.
    pub fn validate(&self) -> Result<(), InputError> {
        require_positive("initial_total_mass_kg", self.initial_total_mass_kg)?;
        if self.n_crew == 0 {
            return Err(InputError::OutOfRange {
                quantity: "n_crew",
                reason: "at least one crew member is required".to_string(),
            });
        }
        require_positive("mission_duration_days", self.mission_duration_days)?;
        if let Some(payload) = self.payload_override_kg {
            require_non_negative("payload_override_kg", payload)?;
        }
        require_positive("delta_v_descent_m_s", self.delta_v_descent_m_s)?;
        require_positive("delta_v_ascent_m_s", self.delta_v_ascent_m_s)?;
        require_positive("isp_s", self.isp_s)?;
        require_positive("mixture_ratio", self.mixture_ratio)?;
        Ok(())
    }
}

/// Convergence controls for a design run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSettings {
    /// Stop once the total mass moves by less than this between passes (kg).
    pub tolerance_kg: f64,
    pub max_iterations: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            tolerance_kg: 10.0,
            max_iterations: 100,
        }
    }
}

impl RunSettings {
    pub fn validate(&self) -> Result<(), InputError> {
        require_positive("tolerance_kg", self.tolerance_kg)?;
        if self.max_iterations == 0 {
            return Err(InputError::OutOfRange {
                quantity: "max_iterations",
                reason: "at least one pass is required".to_string(),
            });
        }
        Ok(())
    }
}

/// Top-level mission document with `[mission]` and `[run]` tables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MissionFile {
    pub mission: MissionParameters,
    pub run: RunSettings,
}

impl MissionFile {
    pub fn validate(&self) -> Result<(), InputError> {
        self.mission.validate()?;
        self.run.validate()
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] InputError),
}

/// Load and validate a mission document. `.toml` files are parsed as TOML, anything else as YAML.
pub fn load_mission<P: AsRef<Path>>(path: P) -> Result<MissionFile, ConfigError> {
    let file: MissionFile = load_document(path.as_ref())?;
    file.validate()?;
    Ok(file)
}

fn load_document<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_reference_mission() {
        let params = MissionParameters::default();
        assert_eq!(params.n_crew, 4);
        assert!((params.delta_v_descent_m_s - 2_000.25).abs() < 1e-9);
        assert!((params.delta_v_ascent_m_s - 2_061.15).abs() < 1e-9);
        assert!(params.validate().is_ok());
        assert!(RunSettings::default().validate().is_ok());
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let file = write_temp(
            ".toml",
            "[mission]\nn_crew = 2\npayload_override_kg = 1060.0\n\n[run]\ntolerance_kg = 1.0\n",
        );
        let loaded = load_mission(file.path()).unwrap();
        assert_eq!(loaded.mission.n_crew, 2);
        assert_eq!(loaded.mission.payload_override_kg, Some(1060.0));
        assert_eq!(loaded.mission.isp_s, ISP_RL10B2);
        assert_eq!(loaded.run.tolerance_kg, 1.0);
        assert_eq!(loaded.run.max_iterations, 100);
    }

    #[test]
    fn yaml_is_the_fallback_format() {
        let file = write_temp(
            ".yaml",
            "mission:\n  mission_duration_days: 30\n  isp_s: 450.0\nrun:\n  max_iterations: 20\n",
        );
        let loaded = load_mission(file.path()).unwrap();
        assert_eq!(loaded.mission.mission_duration_days, 30.0);
        assert_eq!(loaded.mission.isp_s, 450.0);
        assert_eq!(loaded.run.max_iterations, 20);
    }

    #[test]
    fn invalid_values_name_the_field() {
        let file = write_temp(".toml", "[mission]\nmixture_ratio = -1.0\n");
        match load_mission(file.path()) {
            Err(ConfigError::Invalid(err)) => assert_eq!(err.quantity(), "mixture_ratio"),
            other => panic!("expected invalid config, got {other:?}"),
        }

        let file = write_temp(".toml", "[run]\nmax_iterations = 0\n");
        assert!(matches!(load_mission(file.path()), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_temp(".toml", "[mission]\ncrew = 4\n");
        assert!(matches!(load_mission(file.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_mission("does/not/exist.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
