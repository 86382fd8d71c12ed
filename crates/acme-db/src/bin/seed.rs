//! # Seed Data Generator
//!
//! Populates the database with placeholder dashboard data for development.
//!
//! ## Usage
//! ```bash
//! # Seed the store named by DATABASE_URL
//! DATABASE_URL=sqlite://./acme_dev.db cargo run -p acme-db --bin seed
//!
//! # Override the store
//! cargo run -p acme-db --bin seed -- --db sqlite://./data/acme.db
//! ```
//!
//! ## Generated Data
//! - Six customers
//! - Fifteen invoices spread over 2022-2023, pending and paid
//! - Twelve months of revenue

use std::env;

use acme_core::{Customer, Invoice, InvoiceStatus, Revenue};
use acme_db::{AppConfig, Database};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

/// Placeholder customers: (name, email, avatar file)
const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Evil Rabbit", "evil@rabbit.com", "evil-rabbit.png"),
    ("Delba de Oliveira", "delba@oliveira.com", "delba-de-oliveira.png"),
    ("Lee Robinson", "lee@robinson.com", "lee-robinson.png"),
    ("Michael Novotny", "michael@novotny.com", "michael-novotny.png"),
    ("Amy Burns", "amy@burns.com", "amy-burns.png"),
    ("Balazs Orban", "balazs@orban.com", "balazs-orban.png"),
];

/// Placeholder invoices: (customer index, cents, status, date)
const INVOICES: &[(usize, i64, InvoiceStatus, &str)] = &[
    (0, 15795, InvoiceStatus::Pending, "2022-12-06"),
    (1, 20348, InvoiceStatus::Pending, "2022-11-14"),
    (4, 3040, InvoiceStatus::Paid, "2022-10-29"),
    (3, 44800, InvoiceStatus::Paid, "2023-09-10"),
    (5, 34577, InvoiceStatus::Pending, "2023-08-05"),
    (2, 54246, InvoiceStatus::Pending, "2023-07-16"),
    (0, 666, InvoiceStatus::Pending, "2023-06-27"),
    (3, 32545, InvoiceStatus::Paid, "2023-06-09"),
    (4, 1250, InvoiceStatus::Paid, "2023-06-17"),
    (5, 8546, InvoiceStatus::Paid, "2023-06-07"),
    (1, 500, InvoiceStatus::Paid, "2023-08-19"),
    (5, 8945, InvoiceStatus::Paid, "2023-06-03"),
    (2, 1000, InvoiceStatus::Paid, "2022-06-05"),
    (3, 4300, InvoiceStatus::Pending, "2023-10-01"),
    (4, 98765, InvoiceStatus::Paid, "2023-02-21"),
];

/// Monthly revenue in whole currency units, January first
const REVENUE: &[(&str, i64)] = &[
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    acme_db::init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut db_override: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_override = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Acme Dashboard Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <URL>     Store connection string (default: $DATABASE_URL)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = AppConfig::from_lookup(|key| match (key, &db_override) {
        ("DATABASE_URL", Some(url)) => Some(url.clone()),
        _ => env::var(key).ok(),
    })?;

    info!(database_url = %config.database_url, "Seeding database");
    let db = Database::new(config.db_config()).await?;

    // Check existing data
    let existing = db.invoices().count().await?;
    if existing > 0 {
        warn!(existing, "Database already has invoices, skipping seed");
        return Ok(());
    }

    let customers: Vec<Customer> = CUSTOMERS
        .iter()
        .map(|(name, email, avatar)| Customer {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            image_url: format!("/customers/{}", avatar),
        })
        .collect();

    for customer in &customers {
        db.customers().insert(customer).await?;
    }
    info!(count = customers.len(), "Inserted customers");

    for (customer_idx, amount, status, date) in INVOICES {
        let invoice = Invoice {
            id: Uuid::new_v4().to_string(),
            customer_id: customers[*customer_idx].id.clone(),
            amount: *amount,
            status: *status,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
        };
        db.invoices().insert(&invoice).await?;
    }
    info!(count = INVOICES.len(), "Inserted invoices");

    for (month, revenue) in REVENUE {
        db.revenue()
            .upsert(&Revenue {
                month: month.to_string(),
                revenue: *revenue,
            })
            .await?;
    }
    info!(count = REVENUE.len(), "Inserted revenue");

    let cards = db.dashboard().fetch_card_data().await;
    info!(
        invoices = cards.number_of_invoices,
        customers = cards.number_of_customers,
        paid = %cards.total_paid_invoices,
        pending = %cards.total_pending_invoices,
        "Seed complete"
    );

    db.close().await;
    Ok(())
}
