//! Errors for specificity tables and class name building.

use thiserror::Error;

/// Error returned when a specificity table cannot be installed.
///
/// Whenever one of these is returned the previously installed table is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two groups subsume each other directly (`parent` lists `child` and
    /// `child` lists `parent`).
    #[error("invalid specificity mapping: '{parent}' and '{child}' subsume each other")]
    InvalidMapping { parent: String, child: String },

    /// A specificity config document could not be deserialized.
    #[error("failed to parse specificity config: {message}")]
    Parse { message: String },
}

/// Error returned by [`ClassPath`](crate::ClassPath) when a token cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An argument token was requested without any arguments.
    #[error("'{path}' must have at least one argument")]
    MissingArguments { path: String },

    /// A named value was requested with an empty identifier.
    #[error("'{path}' requires a non-empty named value")]
    EmptyNamedValue { path: String },
}
