//! Invoice rendering and the actor that owns the invoice log.

pub mod error;
pub mod log;
pub mod render;

pub use error::*;
pub use log::*;
pub use render::*;

use crate::clients::InvoiceClient;
use crate::framework::ServiceActor;

/// Creates a new invoice log actor and its client.
pub fn new(log: InvoiceLog, buffer_size: usize) -> (ServiceActor<InvoiceLog>, InvoiceClient) {
    let (actor, generic_client) = ServiceActor::new(buffer_size, log);
    let client = InvoiceClient::new(generic_client);

    (actor, client)
}
