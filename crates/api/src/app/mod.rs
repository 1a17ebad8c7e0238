//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: infrastructure wiring (store + catalog service)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `validation.rs`: the validation boundary for query/path inputs
//! - `errors.rs`: consistent error responses (the status-mapping table)

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use vitrine_auth::{Hs256TokenVerifier, TokenVerifier};

use crate::gate::GateState;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod validation;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(jwt_secret: String) -> Router {
    let verifier: Arc<dyn TokenVerifier> =
        Arc::new(Hs256TokenVerifier::new(jwt_secret.as_bytes()));
    let gate = GateState { verifier };

    let services = Arc::new(services::build_services());

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/products/", get(routes::products::list_products))
        .nest("/products", routes::products::router())
        .layer(Extension(services))
        .layer(Extension(gate))
}
