use std::fmt;
use std::sync::Arc;

use crate::config::config_spec::{ConfigSpec, ConfigValueSource};
use crate::config::errors::BootstrapError;
use crate::config::EnvironmentProvider;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://foodapp.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3000";

/// Settings needed before anything else can start: where to listen and which store to use
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    sources: Vec<(String, ConfigValueSource)>,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, BootstrapError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value(DEFAULT_DATABASE_URL)
            .min_length(1)
            .load_setting_with_source()?;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value(DEFAULT_HOST)
            .validator(ConfigSpec::validate_host_address)
            .load_setting_with_source()?;

        let port = ConfigSpec::new(env_provider)
            .env_override("PORT")
            .default_value(DEFAULT_PORT)
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535))
            .load_setting_with_source()?;
        let server_port = ConfigSpec::parse_port(&port.value, "PORT")?;

        let sources = vec![
            ("DATABASE_URL".to_string(), database_url.source),
            ("HOST".to_string(), server_host.source),
            ("PORT".to_string(), port.source),
        ];

        Ok(Self {
            database_url: database_url.value,
            server_host: server_host.value,
            server_port,
            sources,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, BootstrapError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Where each setting's value came from, in load order
    pub fn sources(&self) -> &[(String, ConfigValueSource)] {
        &self.sources
    }

    /// Log the origin of every bootstrap setting
    pub fn log_sources(&self) {
        for (setting_name, source) in &self.sources {
            match source {
                ConfigValueSource::EnvironmentVariable { name } => {
                    tracing::info!("{} loaded from environment variable {}", setting_name, name)
                }
                ConfigValueSource::Default => {
                    tracing::info!("{} not set, using default", setting_name)
                }
            }
        }
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}
