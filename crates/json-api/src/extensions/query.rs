//! Product list query parsing.

use std::str::FromStr;

use catalog_app::domain::products::query::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, ProductQuery};

use crate::products::requests::ProductListQuery;

/// Turn extracted list filters into a [`ProductQuery`].
///
/// Values that do not parse fall back to their defaults.
pub(crate) trait ProductQueryExt {
    fn into_product_query(self) -> ProductQuery;
}

impl ProductQueryExt for ProductListQuery {
    fn into_product_query(self) -> ProductQuery {
        ProductQuery {
            search: self.search.filter(|search| !search.is_empty()),
            page: parse_or(self.page, DEFAULT_PAGE),
            page_size: parse_or(self.page_size, DEFAULT_PAGE_SIZE),
            include_deleted: self
                .include_deleted
                .and_then(|value| parse_bool(&value))
                .unwrap_or(false),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();

    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
