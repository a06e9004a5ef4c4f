use std::path::PathBuf;

use common_utils::consts::{self, DEFAULT_PAYMENT_FEE_LABEL};
use payment_methods::helpers::InMemoryScopeConfig;

use crate::{
    consts::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR},
    error::ConfigurationError,
    logger::config::Log,
};

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    pub common: Common,
    pub server: Server,
    pub metrics: MetricsServer,
    #[serde(default)]
    pub log: Log,
    pub assets: Assets,
    #[serde(default)]
    pub payment_fee: PaymentFee,
    #[serde(default)]
    pub currencies: Currencies,
    /// Scoped payment method configuration, keyed by path
    #[serde(default)]
    pub store_config: InMemoryScopeConfig,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Common {
    pub environment: String,
}

impl Common {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        match self.environment.as_str() {
            "development" | "production" => Ok(()),
            _ => Err(config::ConfigError::Message(format!(
                "Invalid environment '{}'. Must be 'development' or 'production'",
                self.environment
            ))),
        }
    }
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct MetricsServer {
    pub host: String,
    pub port: u16,
}

/// Where issuer logos and other static assets are served from.
#[derive(Clone, serde::Deserialize, Debug)]
pub struct Assets {
    pub base_url: String,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct PaymentFee {
    /// Label used when neither the method nor the store configures one
    pub default_label: String,
}

impl Default for PaymentFee {
    fn default() -> Self {
        Self {
            default_label: DEFAULT_PAYMENT_FEE_LABEL.to_owned(),
        }
    }
}

/// Currencies the gateway accepts for methods without their own restriction.
#[derive(Clone, serde::Deserialize, Debug, Default)]
pub struct Currencies {
    #[serde(default)]
    pub allowed: Vec<String>,
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Function to build the configuration from an explicit file, falling back to the default
    /// location of the current environment
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let env = consts::Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);

        let config = Self::builder(&env)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .try_parsing(true)
                    .separator(CONFIG_ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("currencies.allowed"),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        // Validate the environment field
        config.common.validate()?;

        Ok(config)
    }

    pub fn builder(
        environment: &consts::Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            // Here, it should be `set_override()` not `set_default()`.
            // "env" can't be altered by config field.
            // Should be single source of truth.
            .set_override("env", environment.to_string())
    }

    /// Config path.
    pub fn config_path(
        environment: &consts::Env,
        explicit_config_path: Option<PathBuf>,
    ) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            let config_directory: String = "config".into();
            let config_file_name = environment.config_path();

            config_path.push(workspace_path());
            config_path.push(config_directory);
            config_path.push(config_file_name);
        }
        config_path
    }
}

impl Server {
    pub async fn tcp_listener(&self) -> Result<tokio::net::TcpListener, ConfigurationError> {
        let loc = format!("{}:{}", self.host, self.port);

        tracing::info!(loc = %loc, "binding the server");

        Ok(tokio::net::TcpListener::bind(loc).await?)
    }
}

impl MetricsServer {
    pub async fn tcp_listener(&self) -> Result<tokio::net::TcpListener, ConfigurationError> {
        let loc = format!("{}:{}", self.host, self.port);

        tracing::info!(loc = %loc, "binding the metrics server");

        Ok(tokio::net::TcpListener::bind(loc).await?)
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}
