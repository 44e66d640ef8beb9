use quickfood_dispatch::driver_actor::{load_roster, DriverError};
use quickfood_dispatch::invoice_actor::{InvoiceLog, InvoiceRecord, SEPARATOR};
use quickfood_dispatch::lifecycle::DispatchSystem;
use quickfood_dispatch::model::{Customer, Meal, Order, Restaurant};

/// Full end-to-end test: roster file -> real actors -> invoice file.
#[tokio::test]
async fn test_dispatch_system_assigns_and_invoices() {
    let dir = tempfile::tempdir().unwrap();
    let roster_path = dir.path().join("drivers.txt");
    let invoice_path = dir.path().join("invoice.txt");
    std::fs::write(&roster_path, "A,X,3\nB,X,1\nC,Y,0\nbroken line\n").unwrap();

    let registry = load_roster(&roster_path).await.expect("Failed to load roster");
    assert_eq!(registry.len(), 3);

    let system = DispatchSystem::start(registry, InvoiceLog::new(&invoice_path), 8);

    // Three assignments at X: B, B, then A on the tie
    let first = system.driver_client.assign_driver("x").await.unwrap();
    assert_eq!((first.name.as_str(), first.load), ("B", 2));
    let second = system.driver_client.assign_driver("X").await.unwrap();
    assert_eq!((second.name.as_str(), second.load), ("B", 3));
    let third = system.driver_client.assign_driver("X").await.unwrap();
    assert_eq!((third.name.as_str(), third.load), ("A", 4));

    // Unknown location changes nothing
    let err = system.driver_client.assign_driver("Z").await.unwrap_err();
    assert!(matches!(err, DriverError::NotFound { .. }));
    let loads: Vec<i64> = system
        .driver_client
        .roster()
        .await
        .unwrap()
        .iter()
        .map(|d| d.load)
        .collect();
    assert_eq!(loads, vec![4, 3, 0]);

    // Two invoices, in submission order
    let customer = Customer::new(1, "Jane", "0821234567", "1 Main Road", "X", "jane@example.com").unwrap();
    let restaurant = Restaurant::new("Grill", "X", "0215550000").unwrap();
    let order = Order::new(
        customer.clone(),
        restaurant,
        vec![Meal::new("Burger", 2, 50.0), Meal::new("Fries", 1, 20.0)],
        "Ring the bell",
    );
    system
        .invoice_client
        .append(InvoiceRecord::Fulfilled { order, driver: first })
        .await
        .unwrap();
    system
        .invoice_client
        .append(InvoiceRecord::Unavailable { customer })
        .await
        .unwrap();

    let registry = system.shutdown().await.expect("Failed to shutdown system");
    assert_eq!(registry.drivers()[0].load, 4);

    let contents = std::fs::read_to_string(&invoice_path).unwrap();
    let records: Vec<&str> = contents.split_terminator(&format!("{SEPARATOR}\n")).collect();
    assert_eq!(records.len(), 2);
    assert!(records[0].contains("2 x Burger (R50.00)"));
    assert!(records[0].contains("1 x Fries (R20.00)"));
    assert!(records[0].contains("Total: R120.00"));
    assert!(records[0].contains("B is nearest to the restaurant"));
    assert!(records[1].contains("Sorry! Our drivers are too far away"));
}

/// Concurrent assignments are serialized by the registry actor.
#[tokio::test]
async fn test_concurrent_assignments_never_lose_increments() {
    let dir = tempfile::tempdir().unwrap();
    let roster_path = dir.path().join("drivers.txt");
    std::fs::write(&roster_path, "A,Durban,0\nB,Durban,0\n").unwrap();

    let registry = load_roster(&roster_path).await.unwrap();
    let system = DispatchSystem::start(registry, InvoiceLog::new(dir.path().join("invoice.txt")), 4);

    let mut handles = vec![];
    for _ in 0..20 {
        let drivers = system.driver_client.clone();
        handles.push(tokio::spawn(async move { drivers.assign_driver("durban").await }));
    }
    for handle in handles {
        handle.await.unwrap().expect("assignment failed");
    }

    let registry = system.shutdown().await.unwrap();
    let loads: Vec<i64> = registry.drivers().iter().map(|d| d.load).collect();
    assert_eq!(loads, vec![10, 10], "least-load policy should balance the drivers");
}
