//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that
//! writes to **stderr**, so log lines never interleave with operator prompts
//! on stdout.
//!
//! ## Configuration
//!
//! - `RUST_LOG` controls verbosity; the default is `warn`.
//! - `with_target(false)` hides module paths; events carry `service_type`,
//!   `driver`, `location` and `order_number` fields instead.
//!
//! ```bash
//! # Assignments and appended invoices
//! RUST_LOG=info cargo run
//!
//! # Full request payloads on every actor
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, requests handled
//! - **Assignments**: Driver chosen, location, new load; unserved locations
//! - **Invoices**: Order number and bytes appended; open/write failures
//! - **Workflow**: Restarts after invalid input, unavailable orders
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths - events carry their own fields
        .compact()
        .init();
}
