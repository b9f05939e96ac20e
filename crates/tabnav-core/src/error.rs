//! Error types shared by every tabnav crate

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types organized by layer
///
/// "Nothing to navigate to" is never an error: the navigation core reports
/// those cases as `None`/no-op. Errors are reserved for invalid input and
/// host failures.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    // ─────────────────────────────────────────────────────────────
    // Host Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Host editor error: {message}")]
    Host { message: String },

    // ─────────────────────────────────────────────────────────────
    // Dispatch Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown command id: {id:#06x}")]
    UnknownCommand { id: u32 },

    // ─────────────────────────────────────────────────────────────
    // Scenario Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Scenario error: {message}")]
    Scenario { message: String },

    #[error("Scenario file not found: {path}")]
    ScenarioNotFound { path: PathBuf },

    #[error("Scenario references unknown window: {id}")]
    UnknownWindow { id: u64 },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    pub fn scenario(message: impl Into<String>) -> Self {
        Self::Scenario {
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn scenario_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ScenarioNotFound { path: path.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// A failed host call or a bad command leaves the navigator untouched,
    /// so the caller can keep forwarding notifications and commands.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Host { .. } | Error::UnknownCommand { .. })
    }

    /// Check if this error should abort the current run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Scenario { .. }
                | Error::ScenarioNotFound { .. }
                | Error::UnknownWindow { .. }
                | Error::Toml(_)
                | Error::Logging { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::host("window vanished");
        assert_eq!(err.to_string(), "Host editor error: window vanished");

        let err = Error::UnknownCommand { id: 0x0200 };
        assert_eq!(err.to_string(), "Unknown command id: 0x0200");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("key = ");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Toml(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::scenario("duplicate window id 3").is_fatal());
        assert!(Error::UnknownWindow { id: 9 }.is_fatal());
        assert!(Error::scenario_not_found("/tmp/missing.toml").is_fatal());
        assert!(!Error::host("busy").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::host("busy").is_recoverable());
        assert!(Error::UnknownCommand { id: 1 }.is_recoverable());
        assert!(!Error::scenario("bad").is_recoverable());
    }

    #[test]
    fn test_context_preserves_error() {
        let result: std::result::Result<(), Error> = Err(Error::host("gone"));
        let err = result.context("activating window").unwrap_err();
        assert!(matches!(err, Error::Host { .. }));
    }

    #[test]
    fn test_scenario_not_found_mentions_path() {
        let err = Error::scenario_not_found("/tmp/session.toml");
        assert!(err.to_string().contains("/tmp/session.toml"));
    }
}
