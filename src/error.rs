//! Error handling for chainsmith.
//! Defines custom error types and results used throughout the crate.

use std::io;
use thiserror::Error as ThisError;

/// Custom error types for chainsmith operations.
///
/// This enum represents all possible errors that can occur while parsing,
/// rendering and writing template chains.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the MiniJinja engine
    #[error("Template render error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// None of the lookup locations contained the requested template
    #[error("Template not found: '{template}'.")]
    TemplateNotFound { template: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The final artifact exists and replacing it was declined
    #[error("Target '{target}' already exists.")]
    TargetExistsError { target: String },

    /// Some targets of a batch could not be generated
    #[error("{failed} of {total} targets failed.")]
    GenerationFailed { failed: usize, total: usize },

    /// A chain stage failed; carries the stage that triggered it and the original cause
    #[error("Failed to process '{target}' at stage {stage} ('{template}'): {source}")]
    ProcessError {
        target: String,
        stage: usize,
        template: String,
        #[source]
        source: Box<Error>,
    },
}

/// Convenience type alias for Results with chainsmith's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
