//! # Invoice Repository
//!
//! Invoice queries, most of them joined with the owning customer.
//!
//! ## Search Predicate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  search("Lee", 6, 0)                                                    │
//! │       │                                                                 │
//! │       ▼  pattern = "%lee%" (lowercased, bound once as ?1, used 4 times) │
//! │                                                                         │
//! │  customers.search_name       LIKE ?1   "lee robinson"      ✓            │
//! │  customers.search_email      LIKE ?1   "lee@robinson.com"  ✓            │
//! │  CAST(invoices.amount AS TEXT) LIKE ?1 "20348"                          │
//! │  invoices.status             LIKE ?1   "pending"                        │
//! │                                                                         │
//! │  Any column matching keeps the row. Both sides are lowercased.          │
//! │  ORDER BY date DESC, rowid DESC  LIMIT ?2 OFFSET ?3                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use super::like_pattern;
use crate::error::DbResult;
use acme_core::{Invoice, InvoiceStatus, InvoicesTableRow};

/// Raw row behind the "latest invoices" card (amount still in cents).
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LatestInvoiceRow {
    pub id: String,
    pub amount: i64,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Paid and pending sums over all invoices.
///
/// `None` when the table is empty (SQL `SUM` over zero rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::FromRow)]
pub struct StatusTotals {
    pub paid: Option<i64>,
    pub pending: Option<i64>,
}

/// Raw row behind the edit form (amount still in cents).
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct InvoiceFormRow {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// Repository for the `invoices` table.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    /// Most recent invoices joined with their customer.
    ///
    /// Newest date first; invoices sharing a date are returned newest row
    /// first.
    pub async fn latest(&self, limit: i64) -> DbResult<Vec<LatestInvoiceRow>> {
        let rows = sqlx::query_as::<_, LatestInvoiceRow>(
            r#"
            SELECT
                invoices.id,
                invoices.amount,
                customers.name,
                customers.email,
                customers.image_url
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC, invoices.rowid DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), limit, "Loaded latest invoices");
        Ok(rows)
    }

    /// Counts all invoices.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Sums invoice amounts per status in one pass.
    pub async fn status_totals(&self) -> DbResult<StatusTotals> {
        let totals = sqlx::query_as::<_, StatusTotals>(
            r#"
            SELECT
                SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END) AS paid,
                SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END) AS pending
            FROM invoices
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(totals)
    }

    /// One page of invoices whose customer name, customer email, amount
    /// (as text) or status contains `query`.
    ///
    /// ## Arguments
    /// * `query` - Search text, matched literally (empty matches everything)
    /// * `limit` - Page size
    /// * `offset` - Rows to skip
    pub async fn search(&self, query: &str, limit: i64, offset: i64) -> DbResult<Vec<InvoicesTableRow>> {
        debug!(query = %query, limit, offset, "Searching invoices");

        let rows = sqlx::query_as::<_, InvoicesTableRow>(
            r#"
            SELECT
                invoices.id,
                invoices.customer_id,
                customers.name,
                customers.email,
                customers.image_url,
                invoices.date,
                invoices.amount,
                invoices.status
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE
                customers.search_name LIKE ?1 ESCAPE '\' OR
                customers.search_email LIKE ?1 ESCAPE '\' OR
                CAST(invoices.amount AS TEXT) LIKE ?1 ESCAPE '\' OR
                invoices.status LIKE ?1 ESCAPE '\'
            ORDER BY invoices.date DESC, invoices.rowid DESC
            LIMIT ?2
            OFFSET ?3
            "#,
        )
        .bind(like_pattern(query))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Invoice search returned rows");
        Ok(rows)
    }

    /// Counts the invoices `search` would match across all pages.
    pub async fn count_matching(&self, query: &str) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE
                customers.search_name LIKE ?1 ESCAPE '\' OR
                customers.search_email LIKE ?1 ESCAPE '\' OR
                CAST(invoices.amount AS TEXT) LIKE ?1 ESCAPE '\' OR
                invoices.status LIKE ?1 ESCAPE '\'
            "#,
        )
        .bind(like_pattern(query))
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Gets the editable fields of one invoice.
    ///
    /// ## Returns
    /// * `Ok(Some(row))` - Invoice found
    /// * `Ok(None)` - No invoice with that id
    pub async fn get_form_by_id(&self, id: &str) -> DbResult<Option<InvoiceFormRow>> {
        let row = sqlx::query_as::<_, InvoiceFormRow>(
            r#"
            SELECT id, customer_id, amount, status
            FROM invoices
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Inserts an invoice (used for seeding).
    ///
    /// ## Returns
    /// * `Err(DbError::ForeignKeyViolation)` - customer doesn't exist
    /// * `Err(DbError::UniqueViolation)` - id already exists
    /// * `Err(DbError::CheckViolation)` - negative amount
    pub async fn insert(&self, invoice: &Invoice) -> DbResult<()> {
        debug!(id = %invoice.id, customer_id = %invoice.customer_id, "Inserting invoice");

        sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&invoice.id)
        .bind(&invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status)
        .bind(invoice.date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
