//! Error types for the driver registry and roster loading.

use std::path::PathBuf;
use thiserror::Error;
use crate::framework::FrameworkError;

/// Errors returned by driver assignment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DriverError {
    /// No driver serves the requested location. The display is the message
    /// shown to the operator and written to the unavailable invoice.
    #[error("{}", crate::invoice_actor::UNAVAILABLE_MESSAGE)]
    NotFound { location: String },

    /// The registry answered with a reply for a different request.
    #[error("Unexpected reply from driver registry: {0}")]
    UnexpectedReply(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(#[from] FrameworkError),
}

/// Errors that abort loading the driver roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("could not read roster {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: load {value:?} is not an integer")]
    InvalidLoad {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
