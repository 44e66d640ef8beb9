//! Typed clients for the dispatch actors.

pub mod driver_client;
pub mod invoice_client;

pub use driver_client::DriverClient;
pub use invoice_client::InvoiceClient;
