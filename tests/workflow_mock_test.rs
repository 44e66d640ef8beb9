use quickfood_dispatch::clients::{DriverClient, InvoiceClient};
use quickfood_dispatch::driver_actor::{DriverError, DriverRegistry, DriverReply, DriverRequest};
use quickfood_dispatch::framework::{mock::MockClient, FrameworkError};
use quickfood_dispatch::invoice_actor::{InvoiceLog, InvoiceRecord};
use quickfood_dispatch::model::Driver;
use quickfood_dispatch::workflow::{OrderWorkflow, Prompter, WorkflowError};

const CUSTOMER_AND_RESTAURANT: &str = "\
3
Jane Doe
0821234567
12 Long Street
Cape Town
jane@example.com
Burger Barn
Durban
0315550000
";

/// Real workflow with mocked registry and invoice log.
/// An unserved location must skip meal entry and write the unavailable record.
#[tokio::test]
async fn test_unavailable_order_skips_meal_entry() {
    let mut driver_mock = MockClient::<DriverRegistry>::new();
    let mut invoice_mock = MockClient::<InvoiceLog>::new();

    driver_mock.expect_call().return_err(DriverError::NotFound { location: "Durban".to_string() });
    invoice_mock.expect_call().return_ok(120);

    let mut output = Vec::new();
    let workflow = OrderWorkflow::new(
        Prompter::new(CUSTOMER_AND_RESTAURANT.as_bytes(), &mut output),
        DriverClient::new(driver_mock.client()),
        InvoiceClient::new(invoice_mock.client()),
        3,
    );
    let summary = workflow.run().await.unwrap();

    assert_eq!(summary.unavailable, 1);
    assert_eq!(summary.fulfilled, 0);

    driver_mock.verify();
    invoice_mock.verify();

    assert_eq!(
        driver_mock.take_requests(),
        vec![DriverRequest::Assign { location: "Durban".to_string() }]
    );
    let records = invoice_mock.take_requests();
    assert_eq!(records.len(), 1);
    match &records[0] {
        InvoiceRecord::Unavailable { customer } => {
            assert_eq!(customer.order_number(), 3);
            assert_eq!(customer.name(), "Jane Doe");
        }
        other => panic!("expected unavailable record, got {other:?}"),
    }

    let transcript = String::from_utf8(output).unwrap();
    assert!(!transcript.contains("Enter meal name"));
    assert!(!transcript.contains("Would you like to place another order?"));
}

/// The driver snapshot returned by the registry is what gets invoiced.
#[tokio::test]
async fn test_fulfilled_order_invoices_assigned_driver() {
    let mut driver_mock = MockClient::<DriverRegistry>::new();
    let mut invoice_mock = MockClient::<InvoiceLog>::new();

    driver_mock
        .expect_call()
        .return_ok(DriverReply::Assign(Driver::new("Thandi", "Durban", 5)));
    invoice_mock.expect_call().return_ok(400);

    let script = format!("{CUSTOMER_AND_RESTAURANT}Bunny chow\n2\n45.5\ndone\nNo onions\nno\n");
    let mut output = Vec::new();
    let workflow = OrderWorkflow::new(
        Prompter::new(script.as_bytes(), &mut output),
        DriverClient::new(driver_mock.client()),
        InvoiceClient::new(invoice_mock.client()),
        3,
    );
    let summary = workflow.run().await.unwrap();
    assert_eq!(summary.fulfilled, 1);

    let records = invoice_mock.take_requests();
    let InvoiceRecord::Fulfilled { order, driver } = &records[0] else {
        panic!("expected fulfilled record");
    };
    assert_eq!(driver.name, "Thandi");
    assert_eq!(order.meals.len(), 1);
    assert_eq!(order.total(), 91.0);
    assert_eq!(order.special_instructions, "No onions");
    assert_eq!(order.restaurant.location(), "Durban");
}

/// A broken registry channel aborts the workflow.
#[tokio::test]
async fn test_registry_failure_aborts_workflow() {
    let mut driver_mock = MockClient::<DriverRegistry>::new();
    let invoice_mock = MockClient::<InvoiceLog>::new();

    driver_mock
        .expect_call()
        .return_err(DriverError::ActorCommunication(FrameworkError::ActorClosed));

    let workflow = OrderWorkflow::new(
        Prompter::new(CUSTOMER_AND_RESTAURANT.as_bytes(), Vec::new()),
        DriverClient::new(driver_mock.client()),
        InvoiceClient::new(invoice_mock.client()),
        3,
    );
    let result = workflow.run().await;

    assert!(matches!(
        result,
        Err(WorkflowError::Driver(DriverError::ActorCommunication(FrameworkError::ActorClosed)))
    ));
    assert!(invoice_mock.take_requests().is_empty());
}
