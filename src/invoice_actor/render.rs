//! Text layout of invoice records.

use crate::model::{Customer, Driver, Order};

/// Terminates every record in the log.
pub const SEPARATOR: &str = "--------------------------------------------------";

/// Shown when no driver serves the restaurant's location.
pub const UNAVAILABLE_MESSAGE: &str =
    "Sorry! Our drivers are too far away from you to be able to deliver to your location.";

/// One entry of the invoice log.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceRecord {
    /// A driver was assigned and the meals were taken.
    Fulfilled { order: Order, driver: Driver },
    /// No driver serves the restaurant's location.
    Unavailable { customer: Customer },
}

impl InvoiceRecord {
    pub fn order_number(&self) -> i64 {
        match self {
            InvoiceRecord::Fulfilled { order, .. } => order.customer.order_number(),
            InvoiceRecord::Unavailable { customer } => customer.order_number(),
        }
    }

    /// Renders the record, separator line included.
    pub fn render(&self) -> String {
        let mut out = match self {
            InvoiceRecord::Fulfilled { order, driver } => render_fulfilled(order, driver),
            InvoiceRecord::Unavailable { customer } => render_unavailable(customer),
        };
        out.push_str(SEPARATOR);
        out.push('\n');
        out
    }
}

fn render_customer(customer: &Customer) -> String {
    format!(
        "Order number: {}\n\nCustomer: {}\n\nEmail: {}\n\nPhone number: {}\n\nLocation: {}\n\n",
        customer.order_number(),
        customer.name(),
        customer.email(),
        customer.contact_number(),
        customer.location(),
    )
}

fn render_fulfilled(order: &Order, driver: &Driver) -> String {
    let customer = &order.customer;
    let restaurant = &order.restaurant;

    let mut out = render_customer(customer);
    out.push_str(&format!(
        "You have ordered the following from {} in {}:\n\n",
        restaurant.name(),
        restaurant.location()
    ));
    for meal in &order.meals {
        out.push_str(&format!("{} x {} (R{:.2})\n\n", meal.quantity, meal.name, meal.price));
    }
    out.push_str(&format!("Special instructions: {}\n\n", order.special_instructions));
    out.push_str(&format!("Total: R{:.2}\n\n", order.total()));
    out.push_str(&format!(
        "{} is nearest to the restaurant and so will be delivering your order to you at:\n{}\n\n",
        driver.name,
        customer.address()
    ));
    out.push_str(&format!(
        "If you need to contact the restaurant, their number is {}.\n",
        restaurant.contact_number()
    ));
    out
}

fn render_unavailable(customer: &Customer) -> String {
    let mut out = render_customer(customer);
    out.push_str(&format!("Address: {}\n\n{UNAVAILABLE_MESSAGE}\n", customer.address()));
    out
}
