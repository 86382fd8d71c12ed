//! # acme-core: Pure Logic for the Acme Dashboard
//!
//! Types and pure functions shared by the data layer and the pages that
//! render its results. Zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Acme Dashboard Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard pages (external)                      │   │
//! │  │    Overview ──► Invoices table ──► Customers table ──► Edit     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              acme-db  (DashboardData façade)                    │   │
//! │  │        SQLite queries, repositories, fault containment          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ acme-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │  Invoice  │  │   Money   │  │  paging   │                  │   │
//! │  │   │  CardData │  │  format   │  │  comments │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (Customer, Invoice, Revenue) and read models
//! - [`money`] - Money type and the currency formatter
//! - [`error`] - Domain error types
//! - [`validation`] - Pagination and input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use acme_core::money::format_currency;
//! use acme_core::validation::page_offset;
//!
//! assert_eq!(format_currency(123456), "$1,234.56");
//! assert_eq!(page_offset(3), 12);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::{format_currency, Money};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Rows per page of the invoices table.
pub const ITEMS_PER_PAGE: i64 = 6;

/// Number of invoices on the dashboard's "latest invoices" card.
pub const LATEST_INVOICES_LIMIT: i64 = 5;
