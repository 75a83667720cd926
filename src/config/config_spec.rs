use std::sync::Arc;

use crate::config::errors::BootstrapError;
use crate::config::EnvironmentProvider;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

#[derive(Debug, Clone)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    env_override: Option<String>,
    default_value: Option<String>,
    min_length: Option<usize>,
    validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Load the setting, recording where the value came from
    ///
    /// A value present in the environment wins; otherwise the default is used.
    /// Both are validated the same way.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, BootstrapError> {
        let setting_name = self.setting_name();

        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value, &setting_name)?;
                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable {
                        name: env_var.clone(),
                    },
                });
            }
        }

        match &self.default_value {
            Some(value) => {
                self.validate_value(value, &setting_name)?;
                Ok(ConfigValue {
                    value: value.clone(),
                    source: ConfigValueSource::Default,
                })
            }
            None => Err(BootstrapError::MissingRequiredSetting { setting_name }),
        }
    }

    fn setting_name(&self) -> String {
        self.env_override
            .clone()
            .unwrap_or_else(|| "<unnamed>".to_string())
    }

    fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), BootstrapError> {
        if let Some(min) = self.min_length {
            if value.len() < min {
                return Err(BootstrapError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("must be at least {} characters", min),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| BootstrapError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    /// Check that a port string parses and lies within `min..=max`
    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let port: u32 = value
            .parse()
            .map_err(|_| format!("'{}' is not a valid port number", value))?;
        if port < min as u32 || port > max as u32 {
            return Err(format!("port {} is outside {}-{}", port, min, max));
        }
        Ok(())
    }

    /// Accepts IP addresses and plain hostnames
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.parse::<std::net::IpAddr>().is_ok() {
            return Ok(());
        }
        let is_hostname = !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
        if is_hostname {
            Ok(())
        } else {
            Err(format!("'{}' is not a valid host address", value))
        }
    }

    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, BootstrapError> {
        value.parse().map_err(|_| BootstrapError::InvalidFormat {
            setting_name: setting_name.to_string(),
            expected: "port number (1-65535)".to_string(),
            actual: value.to_string(),
        })
    }
}
