//! Page-number pagination for list endpoints.
//!
//! List endpoints take a raw `?page=` value and answer with a fixed-size
//! slice of rows plus the total row count and page count. Out-of-range and
//! unparseable page numbers never fail: they resolve to the nearest valid
//! page, and an empty table still has one (empty) page.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default number of rows per page when `PAGE_SIZE` is not configured.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest configurable page size.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// First page number. Pages are 1-based.
pub const FIRST_PAGE: i64 = 1;

// ---------------------------------------------------------------------------
// Paginator
// ---------------------------------------------------------------------------

/// Splits `total` rows into pages of `per_page` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total: i64,
    per_page: i64,
}

/// A resolved page: its 1-based number and the SQL window that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
    pub limit: i64,
    pub offset: i64,
}

impl Paginator {
    /// `per_page` below 1 is treated as 1; a negative `total` as 0.
    pub fn new(total: i64, per_page: i64) -> Self {
        Self {
            total: total.max(0),
            per_page: per_page.max(1),
        }
    }

    /// Total number of rows across all pages.
    pub fn count(&self) -> i64 {
        self.total
    }

    /// Number of pages. Always at least 1.
    pub fn num_pages(&self) -> i64 {
        let pages = self.total / self.per_page + i64::from(self.total % self.per_page != 0);
        pages.max(FIRST_PAGE)
    }

    /// Resolve a raw `page` query value into a valid page.
    ///
    /// Missing or non-numeric values yield the first page. Any number that
    /// names no page, whether below 1 or past the end, yields the last one.
    pub fn page(&self, raw: Option<&str>) -> Page {
        let requested = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(FIRST_PAGE);
        let last = self.num_pages();
        let number = if (FIRST_PAGE..=last).contains(&requested) {
            requested
        } else {
            last
        };

        Page {
            number,
            limit: self.per_page,
            offset: (number - 1) * self.per_page,
        }
    }
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// `{ "items": [...], "total": N, "number_of_pages": N }` list envelope.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub number_of_pages: i64,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(items: Vec<T>, paginator: &Paginator) -> Self {
        Self {
            items,
            total: paginator.count(),
            number_of_pages: paginator.num_pages(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
