//! Generic actor framework for single-owner state.
//!
//! This module provides the building blocks the dispatch system uses to give
//! the driver registry and the invoice log exactly one owner each.
//!
//! # Main Components
//!
//! - [`ActorService`] - Trait that actor-owned state implements
//! - [`ServiceActor`] - Generic actor that drains a mailbox sequentially
//! - [`ServiceClient`] - Type-safe, cloneable handle for sending requests
//! - [`FrameworkError`] - Transport errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
