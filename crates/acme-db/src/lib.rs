//! # acme-db: Data Layer for the Acme Dashboard
//!
//! This crate provides store access for the dashboard pages: parameterized
//! SQLite queries through sqlx, one repository per table, and the
//! fault-contained [`DashboardData`] façade the pages call.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Acme Dashboard Data Flow                           │
//! │                                                                         │
//! │  Dashboard page (fetch_card_data, fetch_filtered_invoices, ...)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     acme-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ DashboardData │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │(dashboard.rs) │───►│ (repository/) │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ fallbacks     │    │ InvoiceRepo   │    │ 001_initial_ │  │   │
//! │  │   │ formatting    │    │ CustomerRepo  │    │ schema.sql   │  │   │
//! │  │   └───────────────┘    │ RevenueRepo   │    └──────────────┘  │   │
//! │  │                        │ CommentRepo   │                      │   │
//! │  │   ┌───────────────┐    └───────┬───────┘                      │   │
//! │  │   │   Database    │◄───────────┘                              │   │
//! │  │   │   (pool.rs)   │◄── shared.rs (one handle per process)     │   │
//! │  │   └───────────────┘◄── config.rs (DATABASE_URL, ...)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   SQLite: customers, invoices, revenue, comments                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Environment configuration
//! - [`pool`] - Connection pool creation and configuration
//! - [`shared`] - Process-wide database handle
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (invoice, customer, etc.)
//! - [`dashboard`] - Fault-contained reads and the comment write
//!
//! ## Usage
//!
//! ```rust,ignore
//! use acme_db::{shared, AppConfig};
//!
//! let config = AppConfig::load()?;
//! let db = shared::init(config.db_config()).await?;
//!
//! let cards = db.dashboard().fetch_card_data().await;
//! let rows = db.dashboard().fetch_filtered_invoices("lee", 1).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod dashboard;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod shared;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{AppConfig, ConfigError};
pub use dashboard::DashboardData;
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::comment::CommentRepository;
pub use repository::customer::CustomerRepository;
pub use repository::invoice::InvoiceRepository;
pub use repository::revenue::RevenueRepository;

use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber used by the binaries.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every query
/// - `RUST_LOG=acme_db=trace` - Trace this crate only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
