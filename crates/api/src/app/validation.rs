//! The validation boundary: raw query/path values into typed domain values.
//!
//! Pure input transformation; nothing here touches the gate or the service.

use vitrine_catalog::{ProductFilter, ProductSort, Slug};
use vitrine_core::{DomainError, ProductId};

pub fn filter_from_query(raw: Option<&str>) -> Result<Option<ProductFilter>, DomainError> {
    raw.map(str::parse).transpose()
}

pub fn sort_from_query(raw: Option<&str>) -> Result<Option<ProductSort>, DomainError> {
    raw.map(str::parse).transpose()
}

pub fn slug_from_path(raw: &str) -> Result<Slug, DomainError> {
    raw.parse()
}

pub fn product_id_from_path(raw: &str) -> Result<ProductId, DomainError> {
    raw.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_query_values_validate_to_none() {
        assert_eq!(filter_from_query(None).unwrap(), None);
        assert_eq!(sort_from_query(None).unwrap(), None);
    }

    #[test]
    fn present_query_values_parse_through_the_domain() {
        assert_eq!(
            filter_from_query(Some("published:true")).unwrap(),
            Some(ProductFilter::Published(true))
        );
        assert_eq!(
            sort_from_query(Some("name:desc")).unwrap(),
            Some(ProductSort::NameDesc)
        );
    }

    #[test]
    fn malformed_query_values_are_validation_errors() {
        assert!(matches!(
            filter_from_query(Some("price:low")).unwrap_err(),
            DomainError::Validation(_)
        ));
        assert!(matches!(
            sort_from_query(Some("name:sideways")).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn path_segments_are_checked() {
        assert!(slug_from_path("widget-pro").is_ok());
        assert!(slug_from_path("Widget Pro").is_err());
        assert!(product_id_from_path("0192d7a0-0000-7000-8000-000000000000").is_ok());
        assert!(matches!(
            product_id_from_path("not-a-uuid").unwrap_err(),
            DomainError::InvalidId(_)
        ));
    }
}
