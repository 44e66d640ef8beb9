use crate::validation::{self, ValidationError};

/// The person an order is delivered to.
///
/// Fields are private: a `Customer` only exists once every field has passed
/// validation, and it cannot be edited afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    order_number: i64,
    name: String,
    contact_number: String,
    address: String,
    location: String,
    email: String,
}

impl Customer {
    /// Validates every field and builds the customer.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] encountered, in field order.
    /// Nothing is constructed in that case.
    pub fn new(
        order_number: i64,
        name: &str,
        contact_number: &str,
        address: &str,
        location: &str,
        email: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            order_number,
            name: validation::letters("name", name)?.to_owned(),
            contact_number: validation::phone("contact number", contact_number)?.to_owned(),
            address: validation::address("address", address)?.to_owned(),
            location: validation::letters("location", location)?.to_owned(),
            email: validation::email("email", email)?.to_owned(),
        })
    }

    pub fn order_number(&self) -> i64 {
        self.order_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
