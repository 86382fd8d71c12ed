//! # Process-wide Database Handle
//!
//! One `Database` per process, created on first use and reused by every
//! caller afterwards.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  shared::init(config) ──► first call: Database::new(config)            │
//! │       │                   concurrent first calls wait for that one     │
//! │       │                   later calls: same handle, config ignored     │
//! │       ▼                                                                 │
//! │  shared::get() ──► Some(&Database)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  shared::shutdown() ──► pool closed; dashboard reads return fallbacks  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed `init` leaves the handle unset, so the next call tries again.

use tokio::sync::OnceCell;
use tracing::info;

use crate::error::DbResult;
use crate::pool::{Database, DbConfig};

static DATABASE: OnceCell<Database> = OnceCell::const_new();

/// Returns the process-wide database, connecting on the first call.
pub async fn init(config: DbConfig) -> DbResult<&'static Database> {
    DATABASE
        .get_or_try_init(|| async move {
            info!("Initializing shared database handle");
            Database::new(config).await
        })
        .await
}

/// Returns the process-wide database if `init` has succeeded.
pub fn get() -> Option<&'static Database> {
    DATABASE.get()
}

/// Closes the process-wide database's pool.
///
/// The handle stays set; reads through it degrade to their fallbacks.
pub async fn shutdown() {
    if let Some(db) = DATABASE.get() {
        db.close().await;
    }
}
