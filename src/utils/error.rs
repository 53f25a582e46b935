use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("Invalid timestamp: {value}")]
    InvalidInput { value: String },

    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: String, end: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ParkingError {
    pub fn invalid_input(value: impl Into<String>) -> Self {
        Self::InvalidInput {
            value: value.into(),
        }
    }

    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::InvalidInterval { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { value } => {
                format!("'{}' is not a valid unix timestamp", value)
            }
            Self::InvalidInterval { .. } => {
                "The start date has to be smaller than the end date".to_string()
            }
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Rate file value '{}' is invalid: {}", field, reason)
            }
            Self::ConfigError { message } => format!("Rate file error: {}", message),
            Self::IoError(e) => format!("Could not read rate file: {}", e),
            Self::TomlError(e) => format!("Rate file is not valid TOML: {}", e),
        }
    }

    /// Process exit code for the CLI: 1 for caller input, 3 for configuration.
    pub fn exit_code(&self) -> i32 {
        if self.is_input_error() {
            1
        } else {
            3
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkingError>;
