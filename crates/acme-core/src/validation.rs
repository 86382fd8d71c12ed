//! # Validation Module
//!
//! Input rules applied before a dashboard query is built.
//!
//! ## Where Inputs Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /dashboard/invoices?query=lee&page=2                                   │
//! │       │                                                                 │
//! │       ├── query  ──► used as-is (bound parameter, never interpolated)   │
//! │       │                                                                 │
//! │       └── page   ──► parse_page ──► normalize_page ──► page_offset      │
//! │                                                                         │
//! │  comment form                                                           │
//! │       └── text   ──► validate_comment (absent/empty → nothing stored)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::ITEMS_PER_PAGE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Pagination
// =============================================================================

/// Clamps a 1-indexed page number to the first page.
///
/// Page 0 and negative pages would produce a negative OFFSET; they are
/// treated as page 1.
///
/// ```rust
/// use acme_core::validation::normalize_page;
///
/// assert_eq!(normalize_page(3), 3);
/// assert_eq!(normalize_page(0), 1);
/// assert_eq!(normalize_page(-4), 1);
/// ```
#[inline]
pub fn normalize_page(page: i64) -> i64 {
    page.max(1)
}

/// Row offset of a page: `(page - 1) * ITEMS_PER_PAGE`.
///
/// ```rust
/// use acme_core::validation::page_offset;
///
/// assert_eq!(page_offset(1), 0);
/// assert_eq!(page_offset(2), 6);
/// assert_eq!(page_offset(-1), 0);
/// ```
#[inline]
pub fn page_offset(page: i64) -> i64 {
    (normalize_page(page) - 1).saturating_mul(ITEMS_PER_PAGE)
}

/// Number of pages needed to show `total_rows` rows.
#[inline]
pub fn total_pages(total_rows: i64) -> i64 {
    if total_rows <= 0 {
        return 0;
    }
    (total_rows + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
}

/// Parses the `page` parameter of a listing request.
///
/// ## Rules
/// - Absent or blank: page 1
/// - Otherwise must be an integer (it is then normalized)
pub fn parse_page(raw: Option<&str>) -> ValidationResult<i64> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(1),
        Some(raw) => raw,
    };

    raw.parse::<i64>()
        .map(normalize_page)
        .map_err(|_| ValidationError::InvalidFormat {
            field: "page".to_string(),
            reason: format!("'{}' is not a whole number", raw),
        })
}

// =============================================================================
// Comments
// =============================================================================

/// Checks comment text before it is stored.
///
/// ## Rules
/// - Absent or empty text is rejected (the caller stores nothing)
/// - Anything else, whitespace included, is accepted verbatim; there is no
///   length bound
pub fn validate_comment(text: Option<&str>) -> ValidationResult<&str> {
    match text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ValidationError::Required {
            field: "comment".to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), 6);
        assert_eq!(page_offset(5), 24);
        assert_eq!(page_offset(0), 0);
        assert_eq!(page_offset(i64::MIN), 0);
        assert_eq!(page_offset(i64::MAX), i64::MAX);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None).unwrap(), 1);
        assert_eq!(parse_page(Some("")).unwrap(), 1);
        assert_eq!(parse_page(Some(" 3 ")).unwrap(), 3);
        assert_eq!(parse_page(Some("-2")).unwrap(), 1);
        assert!(matches!(
            parse_page(Some("two")),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_comment() {
        assert!(validate_comment(None).is_err());
        assert!(validate_comment(Some("")).is_err());
        assert_eq!(validate_comment(Some(" ")).unwrap(), " ");
        assert_eq!(validate_comment(Some("looks good")).unwrap(), "looks good");
    }
}
