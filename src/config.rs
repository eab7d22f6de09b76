use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{EstimateBounds, FitParameters, Tolerances};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub fit: FitSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// TOML size table; the builtin catalog is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FitSettings {
    #[serde(default = "default_slim_tolerance")]
    pub slim_tolerance_cm: f64,
    #[serde(default = "default_regular_tolerance")]
    pub regular_tolerance_cm: f64,
    #[serde(default = "default_oversized_tolerance")]
    pub oversized_tolerance_cm: f64,
    #[serde(default = "default_clamp_estimate")]
    pub clamp_estimate: bool,
    #[serde(default = "default_estimate_min")]
    pub estimate_min_cm: f64,
    #[serde(default = "default_estimate_max")]
    pub estimate_max_cm: f64,
    #[serde(default = "default_penalty_weight")]
    pub penalty_weight: f64,
}

impl Default for FitSettings {
    fn default() -> Self {
        Self {
            slim_tolerance_cm: default_slim_tolerance(),
            regular_tolerance_cm: default_regular_tolerance(),
            oversized_tolerance_cm: default_oversized_tolerance(),
            clamp_estimate: default_clamp_estimate(),
            estimate_min_cm: default_estimate_min(),
            estimate_max_cm: default_estimate_max(),
            penalty_weight: default_penalty_weight(),
        }
    }
}

fn default_slim_tolerance() -> f64 { 2.0 }
fn default_regular_tolerance() -> f64 { 4.0 }
fn default_oversized_tolerance() -> f64 { 6.0 }
fn default_clamp_estimate() -> bool { true }
fn default_estimate_min() -> f64 { 70.0 }
fn default_estimate_max() -> f64 { 130.0 }
fn default_penalty_weight() -> f64 { 1.2 }

impl FitSettings {
    /// Convert into the parameters used by the fit pipeline
    pub fn to_parameters(&self) -> Result<FitParameters, ConfigError> {
        let tolerances = [
            ("slim_tolerance_cm", self.slim_tolerance_cm),
            ("regular_tolerance_cm", self.regular_tolerance_cm),
            ("oversized_tolerance_cm", self.oversized_tolerance_cm),
        ];
        for (key, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "fit.{} must be a non-negative number, got {}",
                    key, value
                )));
            }
        }

        if !self.penalty_weight.is_finite() || self.penalty_weight < 0.0 {
            return Err(ConfigError::Message(format!(
                "fit.penalty_weight must be a non-negative number, got {}",
                self.penalty_weight
            )));
        }

        let estimate_bounds = if self.clamp_estimate {
            let finite = self.estimate_min_cm.is_finite() && self.estimate_max_cm.is_finite();
            if !finite || self.estimate_min_cm > self.estimate_max_cm {
                return Err(ConfigError::Message(format!(
                    "fit.estimate_min_cm ({}) must be finite and not exceed fit.estimate_max_cm ({})",
                    self.estimate_min_cm, self.estimate_max_cm
                )));
            }
            Some(EstimateBounds {
                min_cm: self.estimate_min_cm,
                max_cm: self.estimate_max_cm,
            })
        } else {
            None
        };

        Ok(FitParameters {
            tolerances: Tolerances {
                slim: self.slim_tolerance_cm,
                regular: self.regular_tolerance_cm,
                oversized: self.oversized_tolerance_cm,
            },
            estimate_bounds,
            penalty_weight: self.penalty_weight,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FITCHECK__)
    /// 5. `CATALOG_PATH`, `LOG_LEVEL` and `LOG_FORMAT`
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FITCHECK__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FITCHECK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// Environment variables override the file the same way as in [`Settings::load`].
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FITCHECK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }
}

/// Apply the short, unprefixed environment overrides
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = env::var("CATALOG_PATH") {
        builder = builder.set_override("catalog.path", path)?;
    }
    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Ok(format) = env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}
