use crate::validation::{self, ValidationError};

/// The restaurant preparing an order. Validated with the same rules as the
/// matching [`Customer`](crate::model::Customer) fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    name: String,
    location: String,
    contact_number: String,
}

impl Restaurant {
    pub fn new(name: &str, location: &str, contact_number: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::letters("name", name)?.to_owned(),
            location: validation::letters("location", location)?.to_owned(),
            contact_number: validation::phone("contact number", contact_number)?.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }
}
