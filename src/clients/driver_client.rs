use tracing::{debug, instrument};
use crate::driver_actor::{DriverError, DriverRegistry, DriverReply, DriverRequest};
use crate::framework::ServiceClient;
use crate::model::Driver;

/// Client for interacting with the driver registry actor.
#[derive(Clone)]
pub struct DriverClient {
    inner: ServiceClient<DriverRegistry>,
}

impl DriverClient {
    pub fn new(inner: ServiceClient<DriverRegistry>) -> Self {
        Self { inner }
    }

    /// Assigns the least-loaded driver at `location`, incrementing their load.
    #[instrument(skip(self))]
    pub async fn assign_driver(&self, location: &str) -> Result<Driver, DriverError> {
        debug!("Sending assign to registry");
        let request = DriverRequest::Assign {
            location: location.to_owned(),
        };
        match self.inner.call(request).await? {
            DriverReply::Assign(driver) => Ok(driver),
            other => Err(DriverError::UnexpectedReply(format!("{other:?}"))),
        }
    }

    /// Snapshot of every driver and their current load.
    #[instrument(skip(self))]
    pub async fn roster(&self) -> Result<Vec<Driver>, DriverError> {
        debug!("Sending roster request to registry");
        match self.inner.call(DriverRequest::Roster).await? {
            DriverReply::Roster(drivers) => Ok(drivers),
            other => Err(DriverError::UnexpectedReply(format!("{other:?}"))),
        }
    }
}
