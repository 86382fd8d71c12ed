//! # Dashboard Data
//!
//! The read API the dashboard pages call. Every read composes one or more
//! repositories with the currency formatter and never fails: a store error is
//! logged and replaced by the operation's fallback value.
//!
//! ## Fault Containment
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Dashboard Read                                     │
//! │                                                                         │
//! │  page calls fetch_xxx()                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repository query (DbResult<T>)                                        │
//! │       │                                                                 │
//! │       ├── Ok(rows) ──► format amounts ──► read model                   │
//! │       │                                                                 │
//! │       └── Err(e)   ──► error!(operation, error) ──► fallback           │
//! │                        (empty list / zeroed cards / None / 0)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `create_comment` is the one write and the one operation that reports
//! store failure to its caller.

use tracing::{debug, error, warn};

use crate::error::{DbError, DbResult};
use crate::pool::Database;
use acme_core::validation::{page_offset, total_pages, validate_comment};
use acme_core::{
    format_currency, CardData, CustomerField, CustomersTableRow, InvoiceForm, InvoicesTableRow,
    LatestInvoice, Revenue, ITEMS_PER_PAGE, LATEST_INVOICES_LIMIT,
};

/// Fault-contained dashboard reads over a [`Database`].
///
/// ## Usage
/// ```rust,ignore
/// let dashboard = db.dashboard();
///
/// let cards = dashboard.fetch_card_data().await;
/// let rows = dashboard.fetch_filtered_invoices("paid", 1).await;
/// ```
#[derive(Debug, Clone)]
pub struct DashboardData {
    db: Database,
}

impl DashboardData {
    /// Creates the dashboard API over a database handle.
    pub fn new(db: Database) -> Self {
        DashboardData { db }
    }

    // =========================================================================
    // Overview
    // =========================================================================

    /// Every stored revenue month, in stored order.
    ///
    /// Fallback: empty list.
    pub async fn fetch_revenue(&self) -> Vec<Revenue> {
        contain("fetch_revenue", self.db.revenue().list_all().await, Vec::new)
    }

    /// The five most recent invoices with formatted amounts.
    ///
    /// Fallback: empty list.
    pub async fn fetch_latest_invoices(&self) -> Vec<LatestInvoice> {
        let result = self.db.invoices().latest(LATEST_INVOICES_LIMIT).await.map(|rows| {
            rows.into_iter()
                .map(|row| LatestInvoice::new(row.id, row.name, row.email, row.image_url, row.amount))
                .collect()
        });

        contain("fetch_latest_invoices", result, Vec::new)
    }

    /// Invoice count, customer count, and paid/pending totals.
    ///
    /// The three queries run concurrently and fail together: if any one
    /// fails, the whole result is the zeroed fallback.
    pub async fn fetch_card_data(&self) -> CardData {
        let invoices = self.db.invoices();
        let customers = self.db.customers();

        let result = tokio::try_join!(invoices.count(), customers.count(), invoices.status_totals())
            .map(|(invoice_count, customer_count, totals)| {
                CardData::new(invoice_count, customer_count, totals.paid, totals.pending)
            });

        contain("fetch_card_data", result, CardData::zeroed)
    }

    // =========================================================================
    // Invoices
    // =========================================================================

    /// One page (six rows at most) of invoices matching `query`.
    ///
    /// Pages below 1 are treated as page 1. Fallback: empty list.
    pub async fn fetch_filtered_invoices(&self, query: &str, current_page: i64) -> Vec<InvoicesTableRow> {
        let offset = page_offset(current_page);
        let result = self.db.invoices().search(query, ITEMS_PER_PAGE, offset).await;

        contain("fetch_filtered_invoices", result, Vec::new)
    }

    /// Number of pages of invoices matching `query`.
    ///
    /// Fallback: 0.
    pub async fn fetch_invoices_pages(&self, query: &str) -> i64 {
        let result = self.db.invoices().count_matching(query).await.map(total_pages);

        contain("fetch_invoices_pages", result, || 0)
    }

    /// An invoice prepared for the edit form, amount in major units.
    ///
    /// Returns `None` when no invoice has this id, or when the store fails.
    pub async fn fetch_invoice_by_id(&self, id: &str) -> Option<InvoiceForm> {
        match self.db.invoices().get_form_by_id(id).await {
            Ok(Some(row)) => Some(InvoiceForm::from_cents(row.id, row.customer_id, row.amount, row.status)),
            Ok(None) => {
                let not_found = DbError::not_found("Invoice", id);
                warn!(operation = "fetch_invoice_by_id", error = %not_found, "Invoice lookup found nothing");
                None
            }
            Err(e) => {
                error!(operation = "fetch_invoice_by_id", error = %e, "Dashboard read failed");
                None
            }
        }
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// All customers' id and name, ordered by name.
    ///
    /// Fallback: empty list.
    pub async fn fetch_customers(&self) -> Vec<CustomerField> {
        contain("fetch_customers", self.db.customers().list_fields().await, Vec::new)
    }

    /// Customers matching `query` with their invoice count and formatted
    /// pending/paid totals, ordered by name.
    ///
    /// Fallback: empty list.
    pub async fn fetch_filtered_customers(&self, query: &str) -> Vec<CustomersTableRow> {
        let result = self.db.customers().search_with_totals(query).await.map(|rows| {
            rows.into_iter()
                .map(|row| CustomersTableRow {
                    id: row.id,
                    name: row.name,
                    email: row.email,
                    image_url: row.image_url,
                    total_invoices: row.total_invoices,
                    total_pending: format_currency(row.total_pending),
                    total_paid: format_currency(row.total_paid),
                })
                .collect()
        });

        contain("fetch_filtered_customers", result, Vec::new)
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Stores one comment.
    ///
    /// Absent or empty text stores nothing and succeeds. Any other text is
    /// stored verbatim; a store failure is returned to the caller.
    pub async fn create_comment(&self, text: Option<&str>) -> DbResult<()> {
        match validate_comment(text) {
            Ok(text) => self.db.comments().insert(text).await,
            Err(reason) => {
                debug!(%reason, "Comment not stored");
                Ok(())
            }
        }
    }
}

/// Unwraps a read result, logging the error and substituting the fallback.
fn contain<T>(operation: &'static str, result: DbResult<T>, fallback: impl FnOnce() -> T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!(operation, error = %e, "Dashboard read failed");
            fallback()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use crate::repository::fixtures::{customer, dashboard_database, database_with, invoice};
    use acme_core::InvoiceStatus::{Paid, Pending};

    /// A store whose tables were never created.
    async fn schemaless_database() -> Database {
        Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap()
    }

    /// Every invoice id matching `query`, walking the pages in order.
    async fn all_matching_ids(dashboard: &DashboardData, query: &str) -> Vec<String> {
        let pages = dashboard.fetch_invoices_pages(query).await;
        let mut ids = Vec::new();
        for page in 1..=pages {
            ids.extend(
                dashboard
                    .fetch_filtered_invoices(query, page)
                    .await
                    .into_iter()
                    .map(|row| row.id),
            );
        }
        ids
    }

    #[tokio::test]
    async fn test_card_data_counts_and_totals() {
        let db = database_with(
            &[
                customer("c1", "Amy Burns", "amy@burns.com"),
                customer("c2", "Balazs Orban", "balazs@orban.com"),
            ],
            &[
                invoice("i1", "c1", 100, Paid, "2023-01-01"),
                invoice("i2", "c1", 200, Paid, "2023-01-02"),
                invoice("i3", "c2", 300, Pending, "2023-01-03"),
            ],
        )
        .await;

        let cards = db.dashboard().fetch_card_data().await;
        assert_eq!(cards.number_of_invoices, 3);
        assert_eq!(cards.number_of_customers, 2);
        assert_eq!(cards.total_paid_invoices, "$3.00");
        assert_eq!(cards.total_pending_invoices, "$3.00");
    }

    #[tokio::test]
    async fn test_card_data_empty_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert_eq!(db.dashboard().fetch_card_data().await, CardData::zeroed());
    }

    #[tokio::test]
    async fn test_card_data_all_or_nothing() {
        // invoices exist, customers table doesn't: one of three queries fails
        let db = schemaless_database().await;
        sqlx::query(
            "CREATE TABLE invoices (id TEXT PRIMARY KEY, customer_id TEXT NOT NULL, \
             amount INTEGER NOT NULL, status TEXT NOT NULL, date TEXT NOT NULL)",
        )
        .execute(db.pool())
        .await
        .unwrap();
        sqlx::query("INSERT INTO invoices VALUES ('i1', 'c1', 500, 'paid', '2023-01-01')")
            .execute(db.pool())
            .await
            .unwrap();

        assert_eq!(db.invoices().count().await.unwrap(), 1);
        assert!(db.customers().count().await.is_err());

        assert_eq!(db.dashboard().fetch_card_data().await, CardData::zeroed());
    }

    #[tokio::test]
    async fn test_latest_invoices_formatted() {
        let db = dashboard_database().await;

        let latest = db.dashboard().fetch_latest_invoices().await;
        assert_eq!(latest.len(), 5);
        assert_eq!(latest[0].id, "inv-04");
        assert_eq!(latest[0].name, "Lee Robinson");
        assert_eq!(latest[0].amount, "$448.00");
        assert_eq!(latest[3].id, "inv-07");
        assert_eq!(latest[3].amount, "$6.66");
    }

    #[tokio::test]
    async fn test_filtered_invoices_pages() {
        let db = dashboard_database().await;
        let dashboard = db.dashboard();

        let first = dashboard.fetch_filtered_invoices("", 1).await;
        assert_eq!(first.len(), 6);
        let second = dashboard.fetch_filtered_invoices("", 2).await;
        assert_eq!(second.len(), 2);
        assert!(dashboard.fetch_filtered_invoices("", 3).await.is_empty());

        assert_eq!(dashboard.fetch_invoices_pages("").await, 2);
        assert_eq!(dashboard.fetch_invoices_pages("paid").await, 1);
        assert_eq!(dashboard.fetch_invoices_pages("no such text").await, 0);
    }

    #[tokio::test]
    async fn test_filtered_invoices_non_positive_page_is_first() {
        let db = dashboard_database().await;
        let dashboard = db.dashboard();

        let first = dashboard.fetch_filtered_invoices("", 1).await;
        assert_eq!(dashboard.fetch_filtered_invoices("", 0).await, first);
        assert_eq!(dashboard.fetch_filtered_invoices("", -3).await, first);
    }

    #[tokio::test]
    async fn test_filtered_invoices_narrow_as_query_grows() {
        let db = dashboard_database().await;
        let dashboard = db.dashboard();

        let mut previous = all_matching_ids(&dashboard, "").await;
        assert_eq!(previous.len(), 8);

        for query in ["r", "ro", "rob", "robinson"] {
            let current = all_matching_ids(&dashboard, query).await;
            assert!(current.iter().all(|id| previous.contains(id)), "{query}");
            previous = current;
        }
        assert_eq!(previous.len(), 4);
    }

    #[tokio::test]
    async fn test_filters_ignore_non_ascii_case() {
        let db = database_with(
            &[customer("emile", "Émile Zoë", "emile@zoe.fr")],
            &[invoice("i1", "emile", 1250, Pending, "2023-05-01")],
        )
        .await;
        let dashboard = db.dashboard();

        assert_eq!(dashboard.fetch_filtered_invoices("Émile", 1).await.len(), 1);
        assert_eq!(dashboard.fetch_filtered_invoices("émile", 1).await.len(), 1);
        assert_eq!(dashboard.fetch_invoices_pages("ZOË").await, 1);

        let customers = dashboard.fetch_filtered_customers("émile").await;
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].total_pending, "$12.50");
    }

    #[tokio::test]
    async fn test_invoice_by_id_major_units() {
        let db = dashboard_database().await;

        let form = db.dashboard().fetch_invoice_by_id("inv-01").await.unwrap();
        assert_eq!(form.customer_id, "delba");
        assert_eq!(form.amount, 157.95);
        assert_eq!(form.status, Pending);

        let form = db.dashboard().fetch_invoice_by_id("inv-07").await.unwrap();
        assert_eq!(form.amount, 6.66);
    }

    #[tokio::test]
    async fn test_invoice_by_id_absent() {
        let db = dashboard_database().await;
        assert!(db.dashboard().fetch_invoice_by_id("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_customers_ordered_by_name() {
        let db = dashboard_database().await;

        let ids: Vec<String> = db
            .dashboard()
            .fetch_customers()
            .await
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["delba", "hector", "lee"]);
    }

    #[tokio::test]
    async fn test_filtered_customers_formatted_totals() {
        let db = database_with(
            &[
                customer("c1", "Amy Burns", "amy@burns.com"),
                customer("c2", "Balazs Orban", "balazs@orban.com"),
            ],
            &[
                invoice("i1", "c1", 5000, Pending, "2023-01-01"),
                invoice("i2", "c1", 15000, Paid, "2023-01-02"),
            ],
        )
        .await;

        let rows = db.dashboard().fetch_filtered_customers("").await;
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].name, "Amy Burns");
        assert_eq!(rows[0].total_invoices, 2);
        assert_eq!(rows[0].total_pending, "$50.00");
        assert_eq!(rows[0].total_paid, "$150.00");

        assert_eq!(rows[1].name, "Balazs Orban");
        assert_eq!(rows[1].total_invoices, 0);
        assert_eq!(rows[1].total_pending, "$0.00");
        assert_eq!(rows[1].total_paid, "$0.00");

        let amy = db.dashboard().fetch_filtered_customers("AMY@").await;
        assert_eq!(amy.len(), 1);
    }

    #[tokio::test]
    async fn test_reads_fall_back_when_store_closed() {
        let db = dashboard_database().await;
        db.close().await;
        let dashboard = db.dashboard();

        assert!(dashboard.fetch_revenue().await.is_empty());
        assert!(dashboard.fetch_latest_invoices().await.is_empty());
        assert_eq!(dashboard.fetch_card_data().await, CardData::zeroed());
        assert!(dashboard.fetch_filtered_invoices("", 1).await.is_empty());
        assert_eq!(dashboard.fetch_invoices_pages("").await, 0);
        assert!(dashboard.fetch_invoice_by_id("inv-01").await.is_none());
        assert!(dashboard.fetch_customers().await.is_empty());
        assert!(dashboard.fetch_filtered_customers("").await.is_empty());
    }

    #[tokio::test]
    async fn test_reads_fall_back_when_schema_missing() {
        let db = schemaless_database().await;
        let dashboard = db.dashboard();

        assert!(dashboard.fetch_revenue().await.is_empty());
        assert!(dashboard.fetch_latest_invoices().await.is_empty());
        assert_eq!(dashboard.fetch_card_data().await, CardData::zeroed());
        assert!(dashboard.fetch_filtered_invoices("x", 2).await.is_empty());
        assert_eq!(dashboard.fetch_invoices_pages("x").await, 0);
        assert!(dashboard.fetch_invoice_by_id("inv-01").await.is_none());
        assert!(dashboard.fetch_customers().await.is_empty());
        assert!(dashboard.fetch_filtered_customers("x").await.is_empty());
    }

    #[tokio::test]
    async fn test_create_comment_counts() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let dashboard = db.dashboard();

        dashboard.create_comment(None).await.unwrap();
        dashboard.create_comment(Some("")).await.unwrap();
        assert_eq!(db.comments().count().await.unwrap(), 0);

        dashboard.create_comment(Some("Great quarter")).await.unwrap();
        assert_eq!(db.comments().count().await.unwrap(), 1);
        assert_eq!(db.comments().list_all().await.unwrap(), vec!["Great quarter"]);
    }

    #[tokio::test]
    async fn test_create_comment_propagates_store_failure() {
        let db = schemaless_database().await;

        assert!(db.dashboard().create_comment(Some("hello")).await.is_err());
        // empty text never reaches the store
        assert!(db.dashboard().create_comment(Some("")).await.is_ok());
    }
}
