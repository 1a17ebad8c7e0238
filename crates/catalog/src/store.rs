//! Persistence port for product records.
//!
//! The catalog service talks to an opaque provider through [`ProductStore`].
//! Every method is a single atomic operation against the provider; there is
//! no cross-call locking, so two racing mutations resolve here and the loser
//! observes `None` (surfaced by the service as not-found).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use vitrine_core::{DomainError, ProductId};

use crate::filter::ProductFilter;
use crate::product::Product;
use crate::slug::Slug;

/// Provider-level failure (connectivity, corruption). Uniqueness conflicts
/// are reported separately through [`InsertError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::store(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum InsertError {
    #[error("slug '{0}' is already in use")]
    SlugTaken(Slug),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Product persistence provider.
pub trait ProductStore: Send + Sync {
    /// Persist a new record, enforcing slug uniqueness atomically.
    fn insert(&self, product: Product) -> Result<Product, InsertError>;

    /// Exact-match lookup by slug.
    fn get_by_slug(&self, slug: &Slug) -> Result<Option<Product>, StoreError>;

    /// Remove a record, returning the pre-deletion state when it existed.
    fn remove(&self, product_id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Conditional read-modify-write setting `published = true`.
    ///
    /// Idempotent: an already-published record is returned unchanged.
    fn mark_published(&self, product_id: ProductId) -> Result<Option<Product>, StoreError>;

    /// All records matching `filter`, in provider-default (unspecified) order.
    fn list(&self, filter: Option<&ProductFilter>) -> Result<Vec<Product>, StoreError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn insert(&self, product: Product) -> Result<Product, InsertError> {
        (**self).insert(product)
    }

    fn get_by_slug(&self, slug: &Slug) -> Result<Option<Product>, StoreError> {
        (**self).get_by_slug(slug)
    }

    fn remove(&self, product_id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).remove(product_id)
    }

    fn mark_published(&self, product_id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).mark_published(product_id)
    }

    fn list(&self, filter: Option<&ProductFilter>) -> Result<Vec<Product>, StoreError> {
        (**self).list(filter)
    }
}

/// In-memory product store for dev/test wiring.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable("product store lock poisoned".to_string())
    }
}

impl ProductStore for InMemoryProductStore {
    fn insert(&self, product: Product) -> Result<Product, InsertError> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;

        if map.values().any(|p| p.slug == product.slug) {
            return Err(InsertError::SlugTaken(product.slug));
        }

        map.insert(product.product_id, product.clone());
        Ok(product)
    }

    fn get_by_slug(&self, slug: &Slug) -> Result<Option<Product>, StoreError> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(map.values().find(|p| &p.slug == slug).cloned())
    }

    fn remove(&self, product_id: ProductId) -> Result<Option<Product>, StoreError> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        Ok(map.remove(&product_id))
    }

    fn mark_published(&self, product_id: ProductId) -> Result<Option<Product>, StoreError> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        Ok(map.get_mut(&product_id).map(|p| {
            p.publish();
            p.clone()
        }))
    }

    fn list(&self, filter: Option<&ProductFilter>) -> Result<Vec<Product>, StoreError> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(map
            .values()
            .filter(|p| filter.is_none_or(|f| f.matches(p)))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductDraft;
    use vitrine_core::UserId;

    fn new_product(name: &str) -> Product {
        Product::new(
            ProductDraft {
                name: name.to_string(),
                description: None,
            },
            UserId::new(),
        )
        .unwrap()
    }

    #[test]
    fn insert_then_lookup_by_slug() {
        let store = InMemoryProductStore::new();
        let product = store.insert(new_product("Widget")).unwrap();

        let found = store.get_by_slug(&product.slug).unwrap().unwrap();
        assert_eq!(found, product);
    }

    #[test]
    fn duplicate_slug_is_rejected_atomically() {
        let store = InMemoryProductStore::new();
        store.insert(new_product("Widget")).unwrap();

        let err = store.insert(new_product("Widget")).unwrap_err();
        assert!(matches!(err, InsertError::SlugTaken(_)));

        // The losing insert left nothing behind.
        assert_eq!(store.list(None).unwrap().len(), 1);
    }

    #[test]
    fn remove_returns_the_record_once() {
        let store = InMemoryProductStore::new();
        let product = store.insert(new_product("Widget")).unwrap();

        assert_eq!(store.remove(product.product_id).unwrap(), Some(product.clone()));
        assert_eq!(store.remove(product.product_id).unwrap(), None);
        assert_eq!(store.get_by_slug(&product.slug).unwrap(), None);
    }

    #[test]
    fn mark_published_is_idempotent() {
        let store = InMemoryProductStore::new();
        let product = store.insert(new_product("Widget")).unwrap();

        let first = store.mark_published(product.product_id).unwrap().unwrap();
        assert!(first.published);
        let second = store.mark_published(product.product_id).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn mark_published_on_a_vanished_record_is_none() {
        let store = InMemoryProductStore::new();
        let product = store.insert(new_product("Widget")).unwrap();
        store.remove(product.product_id).unwrap();

        assert_eq!(store.mark_published(product.product_id).unwrap(), None);
    }

    #[test]
    fn list_pushes_the_filter_down() {
        let store = InMemoryProductStore::new();
        let widget = store.insert(new_product("Widget")).unwrap();
        store.insert(new_product("Gadget")).unwrap();
        store.mark_published(widget.product_id).unwrap();

        let published = store
            .list(Some(&ProductFilter::Published(true)))
            .unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].product_id, widget.product_id);

        assert_eq!(store.list(None).unwrap().len(), 2);
    }
}
