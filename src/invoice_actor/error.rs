//! Error types for the invoice log.

use std::path::PathBuf;
use thiserror::Error;
use crate::framework::FrameworkError;

/// Errors that can occur while appending an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// The log could not be opened for appending.
    #[error("could not open invoice log {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record could not be written in full.
    #[error("could not write invoice log {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(#[from] FrameworkError),
}
