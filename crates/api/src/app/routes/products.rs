use std::sync::Arc;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Extension, Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use vitrine_auth::Permission;
use vitrine_catalog::ProductDraft;

use crate::app::services::AppServices;
use crate::app::{dto, errors, validation};
use crate::gate::{self, GateState};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/create", post(create_product))
        .route(
            "/:key",
            get(get_product).delete(delete_product).patch(publish_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::ListQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rej) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", rej.body_text())
        }
    };

    let filter = match validation::filter_from_query(query.filter.as_deref()) {
        Ok(f) => f,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let sort = match validation::sort_from_query(query.sort.as_deref()) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.list_products(filter.as_ref(), sort) {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(key): Path<String>,
) -> axum::response::Response {
    let slug = match validation::slug_from_path(&key) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.product_by_slug(&slug) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(gate_state): Extension<GateState>,
    headers: HeaderMap,
    body: Result<Json<dto::CreateProductRequest>, JsonRejection>,
) -> axum::response::Response {
    // Validation boundary first: a malformed body never reaches the gate.
    let Json(body) = match body {
        Ok(b) => b,
        Err(rej) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", rej.body_text())
        }
    };

    let principal = match gate::authenticate(&gate_state, &headers) {
        Ok(p) => p,
        Err(e) => return errors::gate_error_to_response(e),
    };
    if let Err(e) = gate::authorize_action(&principal, &Permission::new("catalog.create")) {
        return errors::gate_error_to_response(e);
    }

    let draft = ProductDraft {
        name: body.name,
        description: body.description,
    };

    match services
        .catalog
        .create_product(draft, principal.principal_id().into())
    {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(gate_state): Extension<GateState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> axum::response::Response {
    let product_id = match validation::product_id_from_path(&key) {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let principal = match gate::authenticate(&gate_state, &headers) {
        Ok(p) => p,
        Err(e) => return errors::gate_error_to_response(e),
    };
    if let Err(e) = gate::authorize_action(&principal, &Permission::new("catalog.delete")) {
        return errors::gate_error_to_response(e);
    }

    match services.catalog.delete_product(product_id) {
        Ok(product) => {
            (StatusCode::CREATED, Json(dto::deleted_product_json(&product))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn publish_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(gate_state): Extension<GateState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> axum::response::Response {
    let product_id = match validation::product_id_from_path(&key) {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let principal = match gate::authenticate(&gate_state, &headers) {
        Ok(p) => p,
        Err(e) => return errors::gate_error_to_response(e),
    };
    if let Err(e) = gate::authorize_action(&principal, &Permission::new("catalog.publish")) {
        return errors::gate_error_to_response(e);
    }

    match services.catalog.publish_product(product_id) {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
