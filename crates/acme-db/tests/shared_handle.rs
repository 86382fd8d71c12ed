//! Lifecycle of the process-wide database handle.
//!
//! The handle is a process global, so the whole lifecycle runs in one test.

use acme_db::{shared, DbConfig};

#[tokio::test]
async fn test_shared_handle_lifecycle() {
    assert!(shared::get().is_none());

    // concurrent first calls connect once
    let (a, b) = tokio::join!(shared::init(DbConfig::in_memory()), shared::init(DbConfig::in_memory()));
    let a = a.unwrap();
    let b = b.unwrap();
    assert!(std::ptr::eq(a, b));

    // later calls return the same handle whatever the config
    let c = shared::init(DbConfig::new("sqlite:///nonexistent-dir/missing/acme.db"))
        .await
        .unwrap();
    assert!(std::ptr::eq(a, c));
    assert!(std::ptr::eq(a, shared::get().unwrap()));

    let dashboard = a.dashboard();
    dashboard.create_comment(Some("shared")).await.unwrap();
    assert_eq!(a.comments().count().await.unwrap(), 1);
    assert_eq!(dashboard.fetch_card_data().await.number_of_customers, 0);

    // after shutdown, reads degrade to fallbacks and the write reports failure
    shared::shutdown().await;
    assert!(a.is_closed());
    assert!(dashboard.fetch_customers().await.is_empty());
    assert_eq!(dashboard.fetch_invoices_pages("").await, 0);
    assert!(dashboard.create_comment(Some("late")).await.is_err());
}
