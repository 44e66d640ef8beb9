use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::clients::{DriverClient, InvoiceClient};
use crate::driver_actor::DriverRegistry;
use crate::invoice_actor::InvoiceLog;

/// The running dispatch actors.
///
/// `DispatchSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the registry and invoice actors
/// - **Client Hand-out**: Exposing cloneable clients for the workflow
///
/// # Example
///
/// ```ignore
/// let system = DispatchSystem::start(registry, InvoiceLog::new("invoice.txt"), 32);
///
/// let driver = system.driver_client.assign_driver("Durban").await?;
///
/// // Every clone of the clients must be dropped before shutdown returns
/// let registry = system.shutdown().await?;
/// ```
pub struct DispatchSystem {
    /// Client for the driver registry actor
    pub driver_client: DriverClient,

    /// Client for the invoice log actor
    pub invoice_client: InvoiceClient,

    driver_handle: JoinHandle<DriverRegistry>,
    invoice_handle: JoinHandle<InvoiceLog>,
}

impl DispatchSystem {
    /// Spawns both actors on the current Tokio runtime.
    pub fn start(registry: DriverRegistry, log: InvoiceLog, buffer_size: usize) -> Self {
        let (driver_actor, driver_client) = crate::driver_actor::new(registry, buffer_size);
        let (invoice_actor, invoice_client) = crate::invoice_actor::new(log, buffer_size);

        let driver_handle = tokio::spawn(driver_actor.run());
        let invoice_handle = tokio::spawn(invoice_actor.run());

        Self {
            driver_client,
            invoice_client,
            driver_handle,
            invoice_handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the system's clients, then waits for both actors to drain their
    /// mailboxes. Actors only stop once *every* client clone is gone.
    ///
    /// # Returns
    ///
    /// - `Ok(registry)` with the final driver loads
    /// - `Err(String)` if an actor task panicked
    pub async fn shutdown(self) -> Result<DriverRegistry, String> {
        info!("Shutting down dispatch system...");

        drop(self.driver_client);
        drop(self.invoice_client);

        let log = self.invoice_handle.await.map_err(|e| {
            error!("Invoice actor failed: {:?}", e);
            format!("Invoice actor failed: {:?}", e)
        })?;
        let registry = self.driver_handle.await.map_err(|e| {
            error!("Driver actor failed: {:?}", e);
            format!("Driver actor failed: {:?}", e)
        })?;

        for driver in registry.drivers() {
            info!(driver = %driver.name, location = %driver.location, load = driver.load, "Final load");
        }
        info!(invoice_log = %log.path().display(), "Dispatch system shutdown complete.");
        Ok(registry)
    }

    /// Shuts down, then reports the workflow's outcome ahead of any
    /// shutdown failure.
    pub async fn finish<T, E: std::fmt::Display>(self, outcome: Result<T, E>) -> Result<T, String> {
        let shutdown = self.shutdown().await;

        let value = outcome.map_err(|e| {
            error!(error = %e, "Workflow aborted");
            e.to_string()
        })?;
        shutdown?;
        Ok(value)
    }
}
