use serde::Deserialize;

use vitrine_catalog::Product;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /products/create`. Shape errors (missing fields, wrong
/// types) are rejected at extraction; semantic checks live in the domain.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Query string of `GET /products/`. Unknown keys are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListQuery {
    pub filter: Option<String>,
    pub sort: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Delete responses carry the removed product's fields plus a confirmation
/// message at the top level.
pub fn deleted_product_json(product: &Product) -> serde_json::Value {
    let mut body = serde_json::to_value(product).unwrap_or_else(|_| serde_json::json!({}));
    if let Some(map) = body.as_object_mut() {
        map.insert(
            "message".to_string(),
            serde_json::Value::from("product deleted successfully"),
        );
    }
    body
}
