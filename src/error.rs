use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PubsubWebError {
    // Configuration errors
    ConfigError(String),

    // Startup errors
    AddressError(String),
    StaticDirError(String),
}

impl fmt::Display for PubsubWebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::AddressError(msg) => write!(f, "Invalid server address: {}", msg),
            Self::StaticDirError(msg) => write!(f, "Static directory error: {}", msg),
        }
    }
}

impl Error for PubsubWebError {}

// Generic result type for the web service
pub type Result<T> = std::result::Result<T, PubsubWebError>;
