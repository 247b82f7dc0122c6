//! Error types for the Canopy system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Record lookup itself never fails; errors come from wiring components
//! together and from configuration.

use thiserror::Error;

/// The main error type for Canopy operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a missing dependency error.
    #[must_use]
    pub fn missing_dependency(component: &'static str, dependency: &'static str) -> Self {
        Self::new(ErrorKind::MissingDependency {
            component,
            dependency,
        })
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig {
            option: option.into(),
            message: message.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A component was built without a dependency it requires.
    #[error("{component} requires a {dependency}")]
    MissingDependency {
        /// The component being constructed.
        component: &'static str,
        /// The dependency that was not supplied.
        dependency: &'static str,
    },

    /// A configuration value was rejected.
    #[error("invalid value for {option}: {message}")]
    InvalidConfig {
        /// The option or field name.
        option: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}
