//! The interactive order workflow.
//!
//! One order at a time:
//!
//! ```text
//! CollectingCustomer -> CollectingRestaurant -> AssigningDriver
//!     -> CollectingMeals -> EmittingInvoice -> PromptingContinue -> (CollectingCustomer | Terminated)
//!     -> EmittingUnavailable -> CollectingCustomer
//! ```
//!
//! A rejected customer or restaurant field (after its re-prompts run out)
//! abandons the attempt and starts over from the customer's order number.
//! End of input terminates the workflow at any prompt.

pub mod error;
pub mod prompt;

pub use error::*;
pub use prompt::*;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::clients::{DriverClient, InvoiceClient};
use crate::driver_actor::DriverError;
use crate::invoice_actor::InvoiceRecord;
use crate::model::{Customer, Meal, Order, Restaurant};
use crate::validation;

/// Meal name that ends meal entry, compared case-insensitively.
pub const MEAL_SENTINEL: &str = "done";

/// Counts of what happened during a workflow run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowSummary {
    /// Orders with an assigned driver.
    pub fulfilled: usize,
    /// Orders no driver could take.
    pub unavailable: usize,
    /// Attempts abandoned because of invalid input.
    pub restarted: usize,
    /// Invoices that could not be appended to the log.
    pub invoice_failures: usize,
}

enum Outcome {
    Fulfilled,
    Unavailable,
}

pub struct OrderWorkflow<R, W> {
    prompter: Prompter<R, W>,
    drivers: DriverClient,
    invoices: InvoiceClient,
    max_field_attempts: usize,
}

impl<R, W> OrderWorkflow<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        prompter: Prompter<R, W>,
        drivers: DriverClient,
        invoices: InvoiceClient,
        max_field_attempts: usize,
    ) -> Self {
        Self {
            prompter,
            drivers,
            invoices,
            max_field_attempts,
        }
    }

    /// Takes orders until the operator declines to continue or input ends.
    ///
    /// Consumes the workflow so that its clients are dropped on return.
    ///
    /// # Errors
    /// Console I/O failures and an unreachable driver registry.
    pub async fn run(mut self) -> Result<WorkflowSummary, WorkflowError> {
        let mut summary = WorkflowSummary::default();
        let mut attempt: u64 = 0;

        loop {
            attempt += 1;
            let span = info_span!("order_attempt", attempt);
            match self.take_order(&mut summary).instrument(span).await {
                Ok(Outcome::Fulfilled) => {}
                Ok(Outcome::Unavailable) => continue,
                Err(WorkflowError::Validation(e)) => {
                    warn!(attempt, error = %e, "Order attempt restarted");
                    summary.restarted += 1;
                    self.prompter.say(&e.to_string()).await?;
                    self.prompter.say("Let's start this order again.").await?;
                    continue;
                }
                Err(WorkflowError::InputClosed) => break,
                Err(e) => return Err(e),
            }

            let answer = match self.prompter.ask("Would you like to place another order? (yes/no) ").await {
                Ok(answer) => answer,
                Err(WorkflowError::InputClosed) => break,
                Err(e) => return Err(e),
            };
            if !answer.trim().eq_ignore_ascii_case("yes") {
                break;
            }
        }

        info!(?summary, "Workflow finished");
        Ok(summary)
    }

    async fn take_order(&mut self, summary: &mut WorkflowSummary) -> Result<Outcome, WorkflowError> {
        let customer = self.collect_customer().await?;
        let restaurant = self.collect_restaurant().await?;

        let driver = match self.drivers.assign_driver(restaurant.location()).await {
            Ok(driver) => driver,
            Err(e @ DriverError::NotFound { .. }) => {
                info!(
                    order_number = customer.order_number(),
                    location = restaurant.location(),
                    "No driver available"
                );
                self.emit(InvoiceRecord::Unavailable { customer }, summary).await?;
                self.prompter.say(&e.to_string()).await?;
                summary.unavailable += 1;
                return Ok(Outcome::Unavailable);
            }
            Err(e) => return Err(WorkflowError::Driver(e)),
        };

        let meals = self.collect_meals().await?;
        let special_instructions = self.prompter.ask("Enter any special instructions: ").await?;

        let order = Order::new(customer, restaurant, meals, special_instructions);
        info!(
            order_number = order.customer.order_number(),
            driver = %driver.name,
            meals = order.meals.len(),
            total = order.total(),
            "Order taken"
        );
        self.emit(InvoiceRecord::Fulfilled { order, driver }, summary).await?;
        summary.fulfilled += 1;
        Ok(Outcome::Fulfilled)
    }

    async fn collect_customer(&mut self) -> Result<Customer, WorkflowError> {
        let attempts = self.max_field_attempts;
        let prompter = &mut self.prompter;

        prompter.say("Enter customer details below").await?;
        let order_number = prompter
            .ask_valid("Order number: ", attempts, |v| validation::integer("order number", v))
            .await?;
        let name = prompter
            .ask_valid("Name: ", attempts, |v| validation::letters("name", v).map(str::to_owned))
            .await?;
        let contact_number = prompter
            .ask_valid("Contact number: ", attempts, |v| {
                validation::phone("contact number", v).map(str::to_owned)
            })
            .await?;
        let address = prompter
            .ask_valid("Address: ", attempts, |v| validation::address("address", v).map(str::to_owned))
            .await?;
        let location = prompter
            .ask_valid("Location: ", attempts, |v| validation::letters("location", v).map(str::to_owned))
            .await?;
        let email = prompter
            .ask_valid("Email: ", attempts, |v| validation::email("email", v).map(str::to_owned))
            .await?;

        Ok(Customer::new(order_number, &name, &contact_number, &address, &location, &email)?)
    }

    async fn collect_restaurant(&mut self) -> Result<Restaurant, WorkflowError> {
        let attempts = self.max_field_attempts;
        let prompter = &mut self.prompter;

        prompter.say("Enter restaurant details below").await?;
        let name = prompter
            .ask_valid("Name: ", attempts, |v| validation::letters("name", v).map(str::to_owned))
            .await?;
        let location = prompter
            .ask_valid("Location: ", attempts, |v| validation::letters("location", v).map(str::to_owned))
            .await?;
        let contact_number = prompter
            .ask_valid("Contact number: ", attempts, |v| {
                validation::phone("contact number", v).map(str::to_owned)
            })
            .await?;

        Ok(Restaurant::new(&name, &location, &contact_number)?)
    }

    async fn collect_meals(&mut self) -> Result<Vec<Meal>, WorkflowError> {
        let prompter = &mut self.prompter;
        prompter.say("Enter order details:").await?;

        let mut meals: Vec<Meal> = Vec::new();
        loop {
            let name = prompter
                .ask_until_valid("Enter meal name (or type 'done' to finish): ", |v| {
                    validation::free_text("meal name", v).map(str::to_owned)
                })
                .await?;
            if name.eq_ignore_ascii_case(MEAL_SENTINEL) {
                break;
            }

            let quantity = prompter
                .ask_until_valid("Enter quantity: ", |v| validation::integer("quantity", v))
                .await?;
            let price = prompter
                .ask_until_valid("Enter price: ", |v| validation::decimal("price", v))
                .await?;

            meals.push(Meal::new(name, quantity, price));
            let running_total: f64 = meals.iter().map(Meal::line_total).sum();
            debug!(meals = meals.len(), running_total, "Meal added");
        }
        Ok(meals)
    }

    /// Appends a record; a failed append is reported and counted, not returned.
    async fn emit(&mut self, record: InvoiceRecord, summary: &mut WorkflowSummary) -> Result<(), WorkflowError> {
        let order_number = record.order_number();
        if let Err(e) = self.invoices.append(record).await {
            error!(order_number, error = %e, "Invoice not saved");
            summary.invoice_failures += 1;
            self.prompter
                .say(&format!("Could not save the invoice for order {order_number}: {e}"))
                .await?;
        }
        Ok(())
    }
}
