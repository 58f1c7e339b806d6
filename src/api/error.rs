use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Transport level failure, no HTTP status was received
    NetworkError(String),
    /// Non-success HTTP status together with its translated description
    StatusError(u16, String),
    /// Status code missing from the status code table
    UnknownStatusCode(u16),
    ParseError(String),
    ExtractionError(String),
    ConfigError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NetworkError(s) => write!(f, "Network error: {}", s),
            Error::StatusError(code, description) => {
                write!(f, "Status error {}: {}", code, description)
            }
            Error::UnknownStatusCode(code) => {
                write!(f, "No description configured for status code {}", code)
            }
            Error::ParseError(s) => write!(f, "Parse error: {}", s),
            Error::ExtractionError(s) => write!(f, "Extraction error: {}", s),
            Error::ConfigError(s) => write!(f, "Configuration error: {}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::NetworkError(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::ParseError(error.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(error: config::ConfigError) -> Self {
        Error::ConfigError(error.to_string())
    }
}
