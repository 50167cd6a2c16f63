use std::fmt;

/// Errors raised while reading the settings file
#[derive(Debug, Clone)]
pub enum SettingsError {
    /// The user's home directory could not be resolved
    HomeDirNotFound,
    /// IO related errors
    Io(String),
    /// The settings file is not valid JSON for `Settings`
    Parse(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::HomeDirNotFound => write!(f, "Home directory not found"),
            SettingsError::Io(msg) => write!(f, "IO error: {}", msg),
            SettingsError::Parse(msg) => write!(f, "Invalid settings file: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err.to_string())
    }
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
