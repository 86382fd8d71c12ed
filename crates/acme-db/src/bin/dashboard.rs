//! # Dashboard Snapshot
//!
//! Prints what the dashboard pages would show, as JSON.
//!
//! ## Usage
//! ```bash
//! DATABASE_URL=sqlite://./acme_dev.db cargo run -p acme-db --bin dashboard
//!
//! # One page of the invoices table, filtered
//! cargo run -p acme-db --bin dashboard -- --query paid --page 2
//! ```

use std::env;

use acme_core::validation::parse_page;
use acme_db::{shared, AppConfig};
use serde_json::json;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    acme_db::init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut query = String::new();
    let mut raw_page: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--query" | "-q" => {
                if i + 1 < args.len() {
                    query = args[i + 1].clone();
                    i += 1;
                }
            }
            "--page" | "-p" => {
                if i + 1 < args.len() {
                    raw_page = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Acme Dashboard Snapshot");
                println!();
                println!("Usage: dashboard [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -q, --query <TEXT>  Invoice search text (default: none)");
                println!("  -p, --page <N>      Invoice page (default: 1)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let page = parse_page(raw_page.as_deref())?;
    let config = AppConfig::load()?;

    let db = shared::init(config.db_config()).await?;
    info!(query = %query, page, "Loading dashboard");

    let dashboard = db.dashboard();
    let (cards, latest, revenue, invoices, pages) = tokio::join!(
        dashboard.fetch_card_data(),
        dashboard.fetch_latest_invoices(),
        dashboard.fetch_revenue(),
        dashboard.fetch_filtered_invoices(&query, page),
        dashboard.fetch_invoices_pages(&query),
    );

    let snapshot = json!({
        "cards": cards,
        "revenue": revenue,
        "latestInvoices": latest,
        "invoices": {
            "query": query,
            "page": page,
            "totalPages": pages,
            "rows": invoices,
        },
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    shared::shutdown().await;
    Ok(())
}
