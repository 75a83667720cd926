use std::fmt;

#[derive(Debug)]
pub enum BootstrapError {
    MissingRequiredSetting { setting_name: String },
    InvalidFormat { setting_name: String, expected: String, actual: String },
    InvalidSetting { setting_name: String, reason: String },
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredSetting { setting_name } => {
                write!(f, "Required bootstrap setting '{}' is missing", setting_name)
            }
            Self::InvalidFormat { setting_name, expected, actual } => {
                write!(
                    f,
                    "Bootstrap setting '{}' has invalid format. Expected: {}, got: {}",
                    setting_name, expected, actual
                )
            }
            Self::InvalidSetting { setting_name, reason } => {
                write!(f, "Invalid setting '{}': {}", setting_name, reason)
            }
        }
    }
}

impl std::error::Error for BootstrapError {}
