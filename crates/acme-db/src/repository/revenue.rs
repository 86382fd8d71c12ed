//! # Revenue Repository
//!
//! Reads the materialized monthly revenue table behind the revenue chart.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use acme_core::Revenue;

/// Repository for the `revenue` table.
#[derive(Debug, Clone)]
pub struct RevenueRepository {
    pool: SqlitePool,
}

impl RevenueRepository {
    /// Creates a new RevenueRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RevenueRepository { pool }
    }

    /// Returns every revenue row, unfiltered, in stored order.
    pub async fn list_all(&self) -> DbResult<Vec<Revenue>> {
        let rows = sqlx::query_as::<_, Revenue>(
            r#"
            SELECT month, revenue
            FROM revenue
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded revenue rows");
        Ok(rows)
    }

    /// Inserts or replaces the revenue of one month (used for seeding).
    pub async fn upsert(&self, revenue: &Revenue) -> DbResult<()> {
        debug!(month = %revenue.month, "Upserting revenue");

        sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES (?1, ?2)
            ON CONFLICT (month) DO UPDATE SET revenue = excluded.revenue
            "#,
        )
        .bind(&revenue.month)
        .bind(revenue.revenue)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
