//! Driver roster, assignment policy and the actor that owns them.

pub mod error;
pub mod registry;
pub mod roster;

pub use error::*;
pub use registry::*;
pub use roster::*;

use crate::clients::DriverClient;
use crate::framework::ServiceActor;

/// Creates a new driver registry actor and its client.
pub fn new(registry: DriverRegistry, buffer_size: usize) -> (ServiceActor<DriverRegistry>, DriverClient) {
    let (actor, generic_client) = ServiceActor::new(buffer_size, registry);
    let client = DriverClient::new(generic_client);

    (actor, client)
}
