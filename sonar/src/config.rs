//! Configuration for sonarsweep

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ParseMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input file read when none is given on the command line
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Number of readings per window sum
    #[serde(default = "default_window_width")]
    pub window_width: usize,

    /// Fail on unparseable lines instead of substituting 0
    #[serde(default)]
    pub strict: bool,
}

fn default_input_path() -> PathBuf {
    PathBuf::from(crate::DEFAULT_INPUT_PATH)
}

fn default_window_width() -> usize {
    crate::DEFAULT_WINDOW_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            window_width: default_window_width(),
            strict: false,
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::from_file(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("sonarsweep").join("config.yml")),
            Some(PathBuf::from("sonarsweep.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Config::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read config {}", path.display()))?;
        let config: Config =
            serde_yaml::from_str(&content).wrap_err_with(|| format!("Invalid config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the metrics cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 {
            eyre::bail!("window_width must be at least 1");
        }
        Ok(())
    }

    pub fn parse_mode(&self) -> ParseMode {
        ParseMode::from_strict(self.strict)
    }
}
