//! The catalog service: the only component with business invariants.

use std::sync::Arc;

use vitrine_core::{DomainError, ProductId, UserId};

use crate::filter::{ProductFilter, ProductSort};
use crate::product::{Product, ProductDraft};
use crate::slug::Slug;
use crate::store::{InsertError, ProductStore};

/// Domain operations over the product catalog.
///
/// Every operation is a single provider call; the service never holds locks
/// of its own, so concurrent mutations race at the store and the loser sees
/// `NotFound` rather than a crash.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// All products matching `filter`, ordered per `sort`.
    ///
    /// Absent filter means no restriction; absent sort keeps the
    /// provider-default order, which callers must not rely on.
    pub fn list_products(
        &self,
        filter: Option<&ProductFilter>,
        sort: Option<ProductSort>,
    ) -> Result<Vec<Product>, DomainError> {
        let mut products = self.store.list(filter)?;
        if let Some(sort) = sort {
            sort.apply(&mut products);
        }
        Ok(products)
    }

    /// Exact-match detail lookup by slug.
    pub fn product_by_slug(&self, slug: &Slug) -> Result<Product, DomainError> {
        self.store.get_by_slug(slug)?.ok_or(DomainError::NotFound)
    }

    /// Create a new unpublished product owned by `owner_id`.
    ///
    /// The slug is derived from the draft name; a collision with an existing
    /// product is a conflict.
    pub fn create_product(
        &self,
        draft: ProductDraft,
        owner_id: UserId,
    ) -> Result<Product, DomainError> {
        let product = Product::new(draft, owner_id)?;
        self.store.insert(product).map_err(|e| match e {
            InsertError::SlugTaken(slug) => {
                DomainError::conflict(format!("slug '{slug}' is already in use"))
            }
            InsertError::Store(e) => e.into(),
        })
    }

    /// Remove a product, returning the pre-deletion record.
    pub fn delete_product(&self, product_id: ProductId) -> Result<Product, DomainError> {
        self.store.remove(product_id)?.ok_or(DomainError::NotFound)
    }

    /// Set `published = true`, returning the updated record.
    ///
    /// Idempotent in effect: publishing an already-published product is not
    /// an error, and no reversal path exists.
    pub fn publish_product(&self, product_id: ProductId) -> Result<Product, DomainError> {
        self.store
            .mark_published(product_id)?
            .ok_or(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryProductStore;
    use std::collections::HashSet;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(InMemoryProductStore::new()))
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn create_round_trips_through_detail_lookup() {
        let svc = service();
        let owner = UserId::new();

        let created = svc.create_product(draft("Widget"), owner).unwrap();
        assert!(!created.published);
        assert_eq!(created.owner_id, owner);

        let fetched = svc.product_by_slug(&created.slug).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn ids_and_slugs_stay_unique_across_creates() {
        let svc = service();
        for name in ["Widget", "Gadget", "Sprocket"] {
            svc.create_product(draft(name), UserId::new()).unwrap();
        }

        let products = svc.list_products(None, None).unwrap();
        let ids: HashSet<_> = products.iter().map(|p| p.product_id).collect();
        let slugs: HashSet<_> = products.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(ids.len(), products.len());
        assert_eq!(slugs.len(), products.len());
    }

    #[test]
    fn duplicate_derived_slug_is_a_conflict() {
        let svc = service();
        svc.create_product(draft("Widget Pro"), UserId::new()).unwrap();

        // Different spelling, same derived slug.
        let err = svc
            .create_product(draft("  widget PRO "), UserId::new())
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn invalid_draft_never_reaches_the_store() {
        let svc = service();
        let err = svc.create_product(draft("   "), UserId::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(svc.list_products(None, None).unwrap().is_empty());
    }

    #[test]
    fn publish_is_idempotent() {
        let svc = service();
        let created = svc.create_product(draft("Widget"), UserId::new()).unwrap();

        let first = svc.publish_product(created.product_id).unwrap();
        assert!(first.published);
        let second = svc.publish_product(created.product_id).unwrap();
        assert!(second.published);
        assert_eq!(first, second);
    }

    #[test]
    fn publish_unknown_product_is_not_found() {
        let svc = service();
        let err = svc.publish_product(ProductId::new()).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn delete_returns_record_then_not_found() {
        let svc = service();
        let created = svc.create_product(draft("Widget"), UserId::new()).unwrap();

        let deleted = svc.delete_product(created.product_id).unwrap();
        assert_eq!(deleted, created);

        let err = svc.delete_product(created.product_id).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn detail_of_unknown_slug_is_not_found() {
        let svc = service();
        let slug: Slug = "nonexistent-slug".parse().unwrap();
        assert_eq!(svc.product_by_slug(&slug).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn published_filter_tracks_the_transition() {
        let svc = service();
        let widget = svc.create_product(draft("Widget"), UserId::new()).unwrap();
        svc.create_product(draft("Gadget"), UserId::new()).unwrap();
        svc.publish_product(widget.product_id).unwrap();

        let published = svc
            .list_products(Some(&ProductFilter::Published(true)), None)
            .unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].product_id, widget.product_id);

        let unpublished = svc
            .list_products(Some(&ProductFilter::Published(false)), None)
            .unwrap();
        assert!(unpublished.iter().all(|p| p.product_id != widget.product_id));
        assert_eq!(unpublished.len(), 1);
    }

    #[test]
    fn sort_is_applied_after_filtering() {
        let svc = service();
        for name in ["Banana", "Apple", "Cherry"] {
            svc.create_product(draft(name), UserId::new()).unwrap();
        }

        let products = svc
            .list_products(None, Some(ProductSort::NameAsc))
            .unwrap();
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Banana", "Cherry"]);
    }
}
