use std::path::PathBuf;

use thiserror::Error;

/// Construction-time failure: a label table, network, or speech model
/// could not be loaded. Not recoverable internally; surfaced directly
/// to the caller.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read label file {path}: {source}")]
    Labels {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load network from {path}: {message}")]
    Network { path: PathBuf, message: String },
    #[error("failed to load speech model for language '{language}': {message}")]
    Model { language: String, message: String },
    #[error("failed to create recognizer for language '{language}': {message}")]
    Recognizer { language: String, message: String },
}
