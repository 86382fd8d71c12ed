//! # Domain Types
//!
//! Store entities and the read models the dashboard consumes.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Stored Entities                                 │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │     Invoice     │   │    Revenue      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  customer_id    │   │  month          │       │
//! │  │  name           │   │  amount (cents) │   │  revenue        │       │
//! │  │  email          │   │  status         │   └─────────────────┘       │
//! │  │  image_url      │   │  date           │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │                         Read Models (per query)                         │
//! │                                                                         │
//! │  LatestInvoice      invoice + customer, amount formatted                │
//! │  InvoicesTableRow   invoice + customer, amount in cents                 │
//! │  CustomersTableRow  customer + invoice count + formatted totals         │
//! │  CustomerField      id + name (select boxes)                            │
//! │  InvoiceForm        invoice for editing, amount in major units          │
//! │  CardData           four summary metrics                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entities are created and changed by the invoice-management workflow;
//! this workspace only reads them (and seeds them for development).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::{format_currency, Money};

// =============================================================================
// Invoice Status
// =============================================================================

/// The status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Issued, not yet paid.
    Pending,
    /// Settled.
    Paid,
}

impl InvoiceStatus {
    /// Returns the stored/wire representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

// =============================================================================
// Entities
// =============================================================================

/// A customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Customer {
    /// Opaque unique identifier, referenced by invoices.
    pub id: String,
    pub name: String,
    pub email: String,
    /// Path or URL of the avatar image.
    pub image_url: String,
}

/// An invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Invoice {
    pub id: String,
    /// Customer this invoice belongs to.
    pub customer_id: String,
    /// Amount in cents, never negative.
    pub amount: i64,
    pub status: InvoiceStatus,
    #[ts(as = "String")]
    pub date: NaiveDate,
}

/// Revenue for one period (materialized, one row per month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Revenue {
    /// Period label, e.g. "Jan".
    pub month: String,
    pub revenue: i64,
}

// =============================================================================
// Read Models
// =============================================================================

/// One of the most recent invoices, shown on the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LatestInvoice {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    /// Already formatted, e.g. "$157.95".
    pub amount: String,
}

impl LatestInvoice {
    /// Builds the read model from raw row values, formatting the amount.
    pub fn new(id: String, name: String, email: String, image_url: String, amount: i64) -> Self {
        LatestInvoice {
            id,
            name,
            email,
            image_url,
            amount: format_currency(amount),
        }
    }
}

/// A row of the invoices table page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct InvoicesTableRow {
    pub id: String,
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Amount in cents (the table formats it itself).
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// A row of the customers table page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomersTableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    /// Formatted sum of pending invoice amounts.
    pub total_pending: String,
    /// Formatted sum of paid invoice amounts.
    pub total_paid: String,
}

/// Customer id and name, for select inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}

/// An invoice loaded into the edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceForm {
    pub id: String,
    pub customer_id: String,
    /// Major units (dollars), e.g. 157.95.
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl InvoiceForm {
    /// Builds the form from a stored amount in cents.
    pub fn from_cents(id: String, customer_id: String, amount_cents: i64, status: InvoiceStatus) -> Self {
        InvoiceForm {
            id,
            customer_id,
            amount: Money::from_cents(amount_cents).as_major_units(),
            status,
        }
    }
}

/// The four summary cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

impl CardData {
    /// Builds card data from raw counts and cent totals.
    pub fn new(
        number_of_invoices: i64,
        number_of_customers: i64,
        paid_cents: Option<i64>,
        pending_cents: Option<i64>,
    ) -> Self {
        CardData {
            number_of_invoices,
            number_of_customers,
            total_paid_invoices: format_currency(paid_cents),
            total_pending_invoices: format_currency(pending_cents),
        }
    }

    /// All counts zero, both totals formatted as zero currency.
    pub fn zeroed() -> Self {
        CardData::new(0, 0, None, None)
    }
}

impl Default for CardData {
    fn default() -> Self {
        CardData::zeroed()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
