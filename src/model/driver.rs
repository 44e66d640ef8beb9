/// A delivery driver from the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    pub name: String,
    pub location: String,
    /// Number of deliveries assigned so far. Only grows.
    pub load: i64,
}

impl Driver {
    pub fn new(name: impl Into<String>, location: impl Into<String>, load: i64) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            load,
        }
    }

    /// Case-insensitive location match.
    pub fn serves(&self, location: &str) -> bool {
        self.location.to_lowercase() == location.to_lowercase()
    }
}
