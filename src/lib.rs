//! # QuickFood Dispatch
//!
//! > **Order intake, driver assignment and invoicing for a food-delivery desk.**
//!
//! An operator types in a customer, a restaurant and the meals ordered. The
//! crate assigns the least-loaded driver at the restaurant's location and
//! appends an invoice to a text log. If no driver serves that location, it
//! appends an "unavailable" record instead.
//!
//! ## 🏗️ Design
//!
//! ### Single owners for shared state
//! The driver loads and the invoice log are the only state that outlives an
//! order. Each lives inside a [`ServiceActor`](framework::ServiceActor) that
//! handles requests one at a time. A load's read-increment-write can never
//! interleave with another assignment, and two records can never interleave
//! in the log.
//!
//! ### Validated records
//! [`Customer`](model::Customer) and [`Restaurant`](model::Restaurant) can only
//! be built from input that passes the [`validation`] rules. A failed
//! construction builds nothing.
//!
//! ### Derived totals
//! [`Order::total`](model::Order::total) is computed from the meal lines on
//! every call, so it always matches them.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: generic actor, client and mock.
//! - [`validation`]: field rules and [`ValidationError`](validation::ValidationError).
//! - [`model`]: Customer, Restaurant, Meal, Order, Driver.
//! - [`driver_actor`]: roster loading, [`DriverRegistry`](driver_actor::DriverRegistry)
//!   and the assignment policy.
//! - [`invoice_actor`]: record layout and the append-only [`InvoiceLog`](invoice_actor::InvoiceLog).
//! - [`clients`]: [`DriverClient`](clients::DriverClient), [`InvoiceClient`](clients::InvoiceClient).
//! - [`lifecycle`]: [`DispatchSystem`](lifecycle::DispatchSystem) and tracing setup.
//! - [`workflow`]: the interactive [`OrderWorkflow`](workflow::OrderWorkflow).
//! - [`config`]: environment configuration.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod driver_actor;
pub mod framework;
pub mod invoice_actor;
pub mod lifecycle;
pub mod model;
pub mod validation;
pub mod workflow;
