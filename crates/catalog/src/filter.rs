//! List filtering and ordering.
//!
//! Filter and sort values arrive as query-string strings and parse through
//! `FromStr`; malformed values are a validation failure at the boundary,
//! before the service runs.

use core::str::FromStr;

use vitrine_core::DomainError;

use crate::product::Product;

/// Predicate over product attributes used to restrict list results.
///
/// Grammar: `published:true`, `published:false`, or `name:<substring>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    Published(bool),
    /// Case-insensitive substring match on the product name.
    NameContains(String),
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::Published(wanted) => product.published == *wanted,
            Self::NameContains(needle) => product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

impl FromStr for ProductFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("published", "true")) => Ok(Self::Published(true)),
            Some(("published", "false")) => Ok(Self::Published(false)),
            Some(("published", other)) => Err(DomainError::validation(format!(
                "filter 'published' takes true or false, got '{other}'"
            ))),
            Some(("name", needle)) if !needle.is_empty() => {
                Ok(Self::NameContains(needle.to_string()))
            }
            Some(("name", _)) => Err(DomainError::validation(
                "filter 'name' requires a non-empty substring",
            )),
            _ => Err(DomainError::validation(format!(
                "unrecognized filter '{s}' (expected published:<bool> or name:<substring>)"
            ))),
        }
    }
}

/// Ordering specification for list results.
///
/// Grammar: `name:asc`, `name:desc`, `created:asc`, `created:desc`. When
/// absent, results keep the provider-default order, which callers must not
/// rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    NameAsc,
    NameDesc,
    CreatedAsc,
    CreatedDesc,
}

impl ProductSort {
    pub fn apply(self, products: &mut [Product]) {
        match self {
            Self::NameAsc => products.sort_by(|a, b| a.name.cmp(&b.name)),
            Self::NameDesc => products.sort_by(|a, b| b.name.cmp(&a.name)),
            Self::CreatedAsc => products.sort_by_key(|p| p.created_at),
            Self::CreatedDesc => {
                products.sort_by_key(|p| std::cmp::Reverse(p.created_at));
            }
        }
    }
}

impl FromStr for ProductSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name:asc" => Ok(Self::NameAsc),
            "name:desc" => Ok(Self::NameDesc),
            "created:asc" => Ok(Self::CreatedAsc),
            "created:desc" => Ok(Self::CreatedDesc),
            _ => Err(DomainError::validation(format!(
                "unrecognized sort '{s}' (expected name:asc|name:desc|created:asc|created:desc)"
            ))),
        }
    }
}
