//! The driver registry and its assignment policy.

use async_trait::async_trait;
use tracing::{info, warn};

use super::DriverError;
use crate::framework::ActorService;
use crate::model::Driver;

/// Requests understood by the registry actor.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverRequest {
    /// Pick the least-loaded driver at a location and bump their load.
    Assign { location: String },
    /// Read-only snapshot of every driver.
    Roster,
}

/// Replies from the registry actor - variants match 1:1 with DriverRequest
#[derive(Debug, Clone, PartialEq)]
pub enum DriverReply {
    /// The assigned driver, after the load increment.
    Assign(Driver),
    /// Every driver, in roster order.
    Roster(Vec<Driver>),
}

/// All known drivers, in roster order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverRegistry {
    drivers: Vec<Driver>,
}

impl DriverRegistry {
    pub fn new(drivers: Vec<Driver>) -> Self {
        Self { drivers }
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Assigns the least-loaded driver serving `location`.
    ///
    /// Ties go to the driver that appears first in the roster. The chosen
    /// driver's load is incremented exactly once and a snapshot taken after
    /// the increment is returned. A failed lookup changes nothing.
    pub fn assign(&mut self, location: &str) -> Result<Driver, DriverError> {
        let mut chosen: Option<usize> = None;
        for (index, driver) in self.drivers.iter().enumerate() {
            if !driver.serves(location) {
                continue;
            }
            // strict < keeps the first of equal loads
            if chosen.map_or(true, |best| driver.load < self.drivers[best].load) {
                chosen = Some(index);
            }
        }

        let Some(index) = chosen else {
            warn!(location, "No driver serves location");
            return Err(DriverError::NotFound {
                location: location.to_owned(),
            });
        };

        let driver = &mut self.drivers[index];
        driver.load += 1;
        info!(driver = %driver.name, location, load = driver.load, "Driver assigned");
        Ok(driver.clone())
    }
}

#[async_trait]
impl ActorService for DriverRegistry {
    type Request = DriverRequest;
    type Reply = DriverReply;
    type Error = DriverError;

    async fn handle(&mut self, request: DriverRequest) -> Result<DriverReply, DriverError> {
        match request {
            DriverRequest::Assign { location } => self.assign(&location).map(DriverReply::Assign),
            DriverRequest::Roster => Ok(DriverReply::Roster(self.drivers.clone())),
        }
    }
}
