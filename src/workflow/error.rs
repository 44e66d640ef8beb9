//! Error types for the order workflow.

use thiserror::Error;
use crate::driver_actor::DriverError;
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The operator's input stream ended.
    #[error("input closed")]
    InputClosed,

    /// Reading from or writing to the console failed.
    #[error("console I/O error: {0}")]
    Console(#[from] std::io::Error),

    /// A field was rejected; the current order attempt is abandoned.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The driver registry could not be reached.
    #[error("driver registry unavailable: {0}")]
    Driver(DriverError),
}
