/// Demo settings, loaded from JSON and overridden from the command line
use std::fs;
use std::path::Path;

use gltut_core::drag::{DEFAULT_AMORTIZATION, DEFAULT_SENSITIVITY};
use gltut_core::PerspectiveParams;
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub fov_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// How far the view matrix pushes the scene away from the eye
    pub camera_distance: f32,
    pub sensitivity: f32,
    pub amortization: f32,
    /// Multiplier on the scenes' built-in spin rates
    pub spin_scale: f32,
    pub fps: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 40.0,
            z_near: 1.0,
            z_far: 100.0,
            camera_distance: 10.0,
            sensitivity: DEFAULT_SENSITIVITY,
            amortization: DEFAULT_AMORTIZATION,
            spin_scale: 1.0,
            fps: 30,
        }
    }
}

impl DemoConfig {
    pub fn from_json(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config file (if any) with command-line flags applied on top
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                Self::from_json(path)?
            }
            None => Self::default(),
        };

        if let Some(fps) = cli.fps {
            config.fps = fps;
        }
        if let Some(sensitivity) = cli.sensitivity {
            config.sensitivity = sensitivity;
        }
        if let Some(amortization) = cli.amortization {
            config.amortization = amortization;
        }

        config.warn_unusual();
        Ok(config)
    }

    /// Out-of-range values are kept, just reported
    fn warn_unusual(&self) {
        if !(0.0..1.0).contains(&self.amortization) {
            log::warn!(
                "amortization {} is outside [0, 1); released drags will not settle",
                self.amortization
            );
        }
        if self.sensitivity <= 0.0 {
            log::warn!("sensitivity {} is not positive", self.sensitivity);
        }
        if self.fov_degrees <= 0.0 || self.fov_degrees >= 180.0 || self.z_near == self.z_far {
            log::warn!(
                "degenerate projection (fov {}, near {}, far {})",
                self.fov_degrees,
                self.z_near,
                self.z_far
            );
        }
    }

    pub fn perspective(&self, aspect: f32) -> PerspectiveParams {
        PerspectiveParams::new(self.fov_degrees, aspect, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: DemoConfig =
            serde_json::from_str(r#"{ "fov_degrees": 60.0, "fps": 15 }"#).unwrap();
        assert_eq!(config.fov_degrees, 60.0);
        assert_eq!(config.fps, 15);
        assert_eq!(config.amortization, 0.95);
        assert_eq!(config.camera_distance, 10.0);
    }

    #[test]
    fn test_cli_overrides_file() {
        let path = std::env::temp_dir().join(format!("gltut-config-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{ "sensitivity": 3.0, "amortization": 0.5 }}"#).unwrap();
        drop(file);

        let cli = Cli::parse_from([
            "gltut-terminal",
            "--config",
            path.to_str().unwrap(),
            "--amortization",
            "0.9",
        ]);
        let config = DemoConfig::load(&cli).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.sensitivity, 3.0);
        assert_eq!(config.amortization, 0.9);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = DemoConfig::from_json(Path::new("/nonexistent/gltut.json"));
        assert!(matches!(result, Err(AppError::ConfigRead { .. })));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let path = std::env::temp_dir().join(format!("gltut-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let result = DemoConfig::from_json(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(AppError::ConfigParse { .. })));
    }
}
