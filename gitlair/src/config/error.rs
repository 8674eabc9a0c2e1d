//! Settings error types.

use thiserror::Error;

/// Why tracker settings could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("Failed to read settings file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has keys of the wrong type.
    #[error("Failed to parse settings in '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A setting holds a value the tracker cannot run with, such as an empty
    /// owner or a non-http API base.
    #[error("Invalid settings in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// No settings file at the given path.
    #[error("Settings file not found: {path}")]
    MissingFile { path: String },
}
