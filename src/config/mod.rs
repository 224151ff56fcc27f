//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `ROUTEBENCH_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

/// Cosine-similarity floor below which an FAQ match is rejected.
///
/// Deliberately loose; override with `ROUTEBENCH_FAQ_THRESHOLD` to tighten
/// or loosen matching.
pub const DEFAULT_FAQ_THRESHOLD: f32 = 0.2;

/// Default directory for the evaluation report files.
pub const DEFAULT_OUT_DIR: &str = "solution";

/// Harness configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `ROUTEBENCH_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the report files are written into. Default: `solution`.
    pub out_dir: PathBuf,

    /// Directory holding the embedding model (`config.json`,
    /// `tokenizer.json`, `model.safetensors`). `None` runs the embedder in
    /// stub mode.
    pub embed_model_dir: Option<PathBuf>,

    /// Minimum cosine similarity for an FAQ match. Default: `0.2`.
    /// Scores exactly at the threshold count as a match.
    pub faq_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            embed_model_dir: None,
            faq_threshold: DEFAULT_FAQ_THRESHOLD,
        }
    }
}

impl Config {
    const ENV_OUT_DIR: &'static str = "ROUTEBENCH_OUT_DIR";
    const ENV_EMBED_MODEL_DIR: &'static str = "ROUTEBENCH_EMBED_MODEL_DIR";
    const ENV_FAQ_THRESHOLD: &'static str = "ROUTEBENCH_FAQ_THRESHOLD";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let out_dir = Self::parse_path_from_env(Self::ENV_OUT_DIR, defaults.out_dir);
        let embed_model_dir = Self::parse_optional_path_from_env(Self::ENV_EMBED_MODEL_DIR);
        let faq_threshold = Self::parse_threshold_from_env(defaults.faq_threshold)?;

        Ok(Self {
            out_dir,
            embed_model_dir,
            faq_threshold,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.out_dir.exists() && !self.out_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.out_dir.clone(),
            });
        }

        if let Some(ref path) = self.embed_model_dir {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_threshold_from_env(default: f32) -> Result<f32, ConfigError> {
        match env::var(Self::ENV_FAQ_THRESHOLD) {
            Ok(value) => {
                let threshold: f32 =
                    value
                        .parse()
                        .map_err(|e| ConfigError::ThresholdParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if !(-1.0..=1.0).contains(&threshold) {
                    return Err(ConfigError::InvalidThreshold { value });
                }

                Ok(threshold)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
