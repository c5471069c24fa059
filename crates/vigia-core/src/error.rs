//! Error types for the Vigia service.

/// Errors that can occur while serving observation data.
///
/// All variants are behind `#[non_exhaustive]` so new failure modes can be
/// added without breaking downstream crates.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A requested entity does not exist.
    ///
    /// Surfaced to callers as a distinct "not found" outcome, never folded
    /// into a generic failure.
    #[error("{what} not found: {key}")]
    NotFound {
        /// Kind of entity that was looked up (e.g. "election").
        what: &'static str,
        /// The lookup key that produced no match.
        key: String,
    },

    /// Database error (pool exhaustion, malformed rows, connectivity).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O error (report directory scans, config file reads).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A stored value could not be parsed into its domain type
    /// (e.g. an unrecognized severity string).
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Vigia operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a "not found" error for the given entity kind and key.
    pub fn not_found<K: Into<String>>(what: &'static str, key: K) -> Self {
        Error::NotFound {
            what,
            key: key.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Returns `true` if this error maps to a user-visible "not found"
    /// outcome rather than a service failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
