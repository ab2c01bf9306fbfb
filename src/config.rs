use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { csv_path: default_csv_path() }
    }
}

fn default_csv_path() -> PathBuf { PathBuf::from("data/spacex_launch_dash.csv") }

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_title")]
    pub title: String,
    /// Dropdown sites; derived from the dataset when unset
    #[serde(default)]
    pub sites: Option<Vec<String>>,
    #[serde(default = "default_slider_min")]
    pub slider_min: f64,
    #[serde(default = "default_slider_max")]
    pub slider_max: f64,
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
    #[serde(default = "default_slider_marks")]
    pub slider_marks: Vec<f64>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            sites: None,
            slider_min: default_slider_min(),
            slider_max: default_slider_max(),
            slider_step: default_slider_step(),
            slider_marks: default_slider_marks(),
        }
    }
}

fn default_title() -> String { "SpaceX Launch Records Dashboard".to_string() }
fn default_slider_min() -> f64 { 0.0 }
fn default_slider_max() -> f64 { 10000.0 }
fn default_slider_step() -> f64 { 1000.0 }
fn default_slider_marks() -> Vec<f64> { vec![0.0, 1000.0, 5000.0, 10000.0] }

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

/// Subscriber output selected by `logging.format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Plain,
}

impl LoggingSettings {
    /// Unknown formats fall back to plain text
    pub fn log_format(&self) -> LogFormat {
        match self.format.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Plain,
        }
    }
}

/// Env var naming a config file that replaces config/default + config/local
pub const CONFIG_PATH_ENV: &str = "LAUNCH_DASH_CONFIG";

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LAUNCH_DASH)
    ///
    /// When `LAUNCH_DASH_CONFIG` is set, that file replaces steps 2 and 3.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::load_from(path);
        }

        let builder = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false));

        finish(builder, environment())
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        finish(defaults()?.add_source(File::from(path.as_ref())), environment())
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8050_i64)
}

fn finish(builder: ConfigBuilder<DefaultState>, env: Environment) -> Result<Settings, ConfigError> {
    builder.add_source(env).build()?.try_deserialize()
}

// e.g., LAUNCH_DASH__SERVER__PORT -> server.port
fn environment() -> Environment {
    Environment::with_prefix("LAUNCH_DASH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
