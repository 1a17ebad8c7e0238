use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{DomainError, ProductId, UserId};

use crate::slug::Slug;

/// Caller-supplied data for product creation.
///
/// Shape is owned by the validation boundary; semantic checks (blank name,
/// slug derivability) happen in [`Product::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
}

/// A catalog product record.
///
/// `product_id`, `slug` and `owner_id` are immutable once assigned;
/// `published` only ever transitions `false → true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub slug: Slug,
    pub name: String,
    pub description: Option<String>,
    pub published: bool,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

const MAX_NAME_LEN: usize = 200;

impl Product {
    /// Build a new unpublished product from a draft.
    ///
    /// Validates the draft, derives the slug from the name and allocates a
    /// fresh identifier. The record is not persisted here; uniqueness of the
    /// slug is enforced by the store at insert time.
    pub fn new(draft: ProductDraft, owner_id: UserId) -> Result<Self, DomainError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "name cannot exceed {MAX_NAME_LEN} characters"
            )));
        }

        let slug = Slug::derive(&name)?;

        Ok(Self {
            product_id: ProductId::new(),
            slug,
            name,
            description: draft.description,
            published: false,
            owner_id,
            created_at: Utc::now(),
        })
    }

    /// One-way transition to the published state. There is no reversal path.
    pub fn publish(&mut self) {
        self.published = true;
    }
}
