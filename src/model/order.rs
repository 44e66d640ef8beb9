use super::{Customer, Meal, Restaurant};

/// A complete order, ready to be invoiced.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub customer: Customer,
    pub restaurant: Restaurant,
    /// In entry order. May be empty.
    pub meals: Vec<Meal>,
    pub special_instructions: String,
}

impl Order {
    pub fn new(
        customer: Customer,
        restaurant: Restaurant,
        meals: Vec<Meal>,
        special_instructions: impl Into<String>,
    ) -> Self {
        Self {
            customer,
            restaurant,
            meals,
            special_instructions: special_instructions.into(),
        }
    }

    /// Sum of the meal line totals, computed from the current meal list.
    pub fn total(&self) -> f64 {
        // Empty orders total +0.0
        self.meals.iter().fold(0.0, |total, meal| total + meal.line_total())
    }
}
