//! # Repository Module
//!
//! One repository per table. Repositories return `DbResult<T>` and never
//! hide a failure; containment happens one layer up in
//! [`DashboardData`](crate::dashboard::DashboardData).
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  DashboardData::fetch_filtered_invoices("lee", 2)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InvoiceRepository                                                     │
//! │  ├── latest(limit)                                                     │
//! │  ├── count() / status_totals()                                         │
//! │  ├── search(query, limit, offset)  ◄── like_pattern("lee") = "%lee%"   │
//! │  └── get_form_by_id(id)                                                │
//! │       │                                                                 │
//! │       │  Parameterized SQL (.bind)                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`RevenueRepository`](revenue::RevenueRepository) - Monthly revenue
//! - [`InvoiceRepository`](invoice::InvoiceRepository) - Invoices joined with customers
//! - [`CustomerRepository`](customer::CustomerRepository) - Customers and per-customer totals
//! - [`CommentRepository`](comment::CommentRepository) - Append-only comments

pub mod comment;
pub mod customer;
pub mod invoice;
pub mod revenue;

/// Escape character used in every `LIKE ... ESCAPE` clause.
pub(crate) const LIKE_ESCAPE: char = '\\';

/// Case-folded form of a searchable value.
///
/// Stored in `customers.search_name` / `search_email` on insert and applied
/// to the search text, so matching ignores case beyond ASCII ("Émile"
/// matches "émile").
pub fn search_key(text: &str) -> String {
    text.to_lowercase()
}

/// Builds a case-folded substring pattern for `LIKE ... ESCAPE '\'`.
///
/// `%`, `_` and the escape character itself are escaped so the caller's text
/// matches literally; the result is always passed as a bound parameter.
///
/// ```rust
/// use acme_db::repository::like_pattern;
///
/// assert_eq!(like_pattern("Lee"), "%lee%");
/// assert_eq!(like_pattern("50%"), "%50\\%%");
/// assert_eq!(like_pattern(""), "%%");
/// ```
pub fn like_pattern(query: &str) -> String {
    let folded = search_key(query);
    let mut pattern = String::with_capacity(folded.len() + 2);
    pattern.push('%');
    for ch in folded.chars() {
        if ch == '%' || ch == '_' || ch == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

// =============================================================================
// Test Fixtures
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
        assert_eq!(like_pattern("O'Brien"), "%o'brien%");
    }

    #[test]
    fn test_like_pattern_folds_unicode_case() {
        assert_eq!(like_pattern("ÉMILE Zoë"), "%émile zoë%");
        assert_eq!(search_key("Émile Zoë"), search_key("émile ZOË"));
    }
}
