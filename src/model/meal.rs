/// One line of an order.
///
/// Quantity and price are taken as entered; neither is range-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl Meal {
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// `quantity × price`.
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}
