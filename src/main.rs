//! # QuickFood Dispatch
//!
//! Interactive entry point: loads the driver roster, starts the dispatch
//! actors and takes orders from stdin until the operator stops.
//!
//! ```bash
//! QUICKFOOD_ROSTER=drivers.txt QUICKFOOD_INVOICE=invoice.txt RUST_LOG=info cargo run
//! ```

use quickfood_dispatch::config::Config;
use quickfood_dispatch::driver_actor::load_roster;
use quickfood_dispatch::invoice_actor::InvoiceLog;
use quickfood_dispatch::lifecycle::{setup_tracing, DispatchSystem};
use quickfood_dispatch::workflow::{OrderWorkflow, Prompter};
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e.to_string()
    })?;
    info!(?config, "Starting dispatch");

    // Nothing is accepted until the roster is in memory
    let registry = load_roster(&config.roster_path).await.map_err(|e| {
        error!(error = %e, "Roster load failed");
        format!("Error loading drivers: {e}")
    })?;

    let system = DispatchSystem::start(
        registry,
        InvoiceLog::new(&config.invoice_path),
        config.channel_capacity,
    );

    let workflow = OrderWorkflow::new(
        Prompter::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout()),
        system.driver_client.clone(),
        system.invoice_client.clone(),
        config.max_field_attempts,
    );
    let outcome = workflow.run().await;

    // The workflow's clients are gone; shutdown can drain the actors
    let summary = system.finish(outcome).await?;
    info!(?summary, "Application completed successfully");
    Ok(())
}
