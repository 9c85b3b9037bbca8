//! Product list queries.

/// Page used when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Product list query.
///
/// `page` and `page_size` are taken as given; [`ProductQuery::offset`] and
/// [`ProductQuery::limit`] clamp whatever they produce to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Substring matched against name or SKU. Empty means no filter.
    pub search: Option<String>,
    pub page: i64,
    pub page_size: i64,
    /// Bypass the soft-delete filter.
    pub include_deleted: bool,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            include_deleted: false,
        }
    }
}

impl ProductQuery {
    /// The search term, when there is one to apply.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|search| !search.is_empty())
    }

    /// Rows to skip: `(page - 1) * page_size`, never negative.
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .max(0)
    }

    /// Rows to take, never negative.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.page_size.max(0)
    }
}
