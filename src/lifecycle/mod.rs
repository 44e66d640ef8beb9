//! Runtime orchestration and lifecycle management.
//!
//! - [`DispatchSystem`] - Starts the registry and invoice actors, and stops them
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod dispatch_system;
pub mod tracing;

pub use dispatch_system::*;
pub use self::tracing::*;
