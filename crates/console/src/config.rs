use domain::models::Role;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Session bootstrap settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Populate the store with the sample requests, resources and alerts
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Role to switch the session user to after start-up
    #[serde(default)]
    pub role: Option<String>,

    /// Overrides for the session user's identity
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub user_email: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            role: None,
            user_id: None,
            user_name: None,
            user_email: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// text or json
    #[serde(default = "default_output_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}
fn default_seed() -> bool {
    true
}
fn default_output_format() -> String {
    "text".to_string()
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration (optional)
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with RD__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("RD").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration from built-in defaults plus explicit overrides.
    ///
    /// Does not touch the file system or the environment, and skips
    /// validation so tests can build partial configs.
    pub fn load_with_overrides(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [logging]
            level = "info"
            format = "pretty"

            [session]
            seed = true

            [output]
            format = "text"
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(ConfigValidationError::InvalidValue(format!(
                "logging.format must be json or pretty, got {}",
                self.logging.format
            )));
        }

        if !matches!(self.output.format.as_str(), "json" | "text") {
            return Err(ConfigValidationError::InvalidValue(format!(
                "output.format must be json or text, got {}",
                self.output.format
            )));
        }

        self.session_role()?;
        Ok(())
    }

    /// Parsed role override, if one is configured.
    pub fn session_role(&self) -> Result<Option<Role>, ConfigValidationError> {
        self.session
            .role
            .as_deref()
            .map(|role| role.parse::<Role>())
            .transpose()
            .map_err(|e| ConfigValidationError::InvalidValue(format!("session.role: {}", e)))
    }

    pub fn json_output(&self) -> bool {
        self.output.format == "json"
    }
}
