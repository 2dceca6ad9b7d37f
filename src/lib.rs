//! chainsmith is a code-generation helper built around chained templates.
//! A target file name such as `File.html._styling._layout._content` encodes an
//! ordered stack of templates; each one wraps the output of the previous stage
//! and every stage leaves an inspectable intermediate file behind.

/// Decoding of template chains from file names
pub mod chain;

/// Command-line interface module for the chainsmith binary
pub mod cli;

/// Configuration handling
/// Supports JSON and YAML formats (chainsmith.json, chainsmith.yml, chainsmith.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Context variables from files, stdin and assignments
pub mod context;

/// Error types and handling
pub mod error;

/// Chained or single-template generation of targets
pub mod generator;

/// Template lookup under the templates root
pub mod loader;

/// Stage-by-stage execution of template chains
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// MiniJinja rendering
pub mod renderer;
