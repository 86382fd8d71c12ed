//! # Customer Repository
//!
//! Customer lists and the per-customer invoice aggregation behind the
//! customers table.
//!
//! ## Aggregation
//! ```text
//! customers LEFT JOIN invoices  (customers without invoices are kept)
//!      │
//!      ▼  GROUP BY customer
//! total_invoices = COUNT(invoices.id)                       → 0 when none
//! total_pending  = SUM(amount WHERE status = 'pending')     → cents
//! total_paid     = SUM(amount WHERE status = 'paid')        → cents
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use super::{like_pattern, search_key};
use crate::error::DbResult;
use acme_core::{Customer, CustomerField};

/// Raw aggregated row behind the customers table (totals still in cents).
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CustomerTotalsRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: Option<i64>,
    pub total_paid: Option<i64>,
}

/// Repository for the `customers` table.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// All customers' id and name, ordered by name.
    pub async fn list_fields(&self) -> DbResult<Vec<CustomerField>> {
        let rows = sqlx::query_as::<_, CustomerField>(
            r#"
            SELECT id, name
            FROM customers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Counts all customers.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Customers whose name or email contains `query`, each with invoice
    /// count and pending/paid sums, ordered by name.
    pub async fn search_with_totals(&self, query: &str) -> DbResult<Vec<CustomerTotalsRow>> {
        debug!(query = %query, "Searching customers");

        let rows = sqlx::query_as::<_, CustomerTotalsRow>(
            r#"
            SELECT
                customers.id,
                customers.name,
                customers.email,
                customers.image_url,
                COUNT(invoices.id) AS total_invoices,
                SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END) AS total_pending,
                SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END) AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            WHERE
                customers.search_name LIKE ?1 ESCAPE '\' OR
                customers.search_email LIKE ?1 ESCAPE '\'
            GROUP BY
                customers.id,
                customers.name,
                customers.email,
                customers.image_url
            ORDER BY customers.name ASC
            "#,
        )
        .bind(like_pattern(query))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Customer search returned rows");
        Ok(rows)
    }

    /// Inserts a customer (used for seeding), with its lowercased search
    /// keys.
    pub async fn insert(&self, customer: &Customer) -> DbResult<()> {
        debug!(id = %customer.id, "Inserting customer");

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url, search_name, search_email)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.image_url)
        .bind(search_key(&customer.name))
        .bind(search_key(&customer.email))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
