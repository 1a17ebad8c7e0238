//! Authorization gate for mutating routes.
//!
//! Two sequential checks: authentication (bearer credential → principal),
//! then a role-derived permission check. The two failures are distinct and
//! map to distinct statuses; handlers run the gate only after their input has
//! passed the validation boundary.

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::Utc;
use thiserror::Error;

use vitrine_auth::{authorize, AuthzError, Permission, Principal, Role, TokenVerifier};

use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct GateState {
    pub verifier: Arc<dyn TokenVerifier>,
}

#[derive(Debug, Error)]
pub enum GateError {
    /// Missing or invalid bearer credential.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Valid credential, insufficient role.
    #[error(transparent)]
    Authorization(#[from] AuthzError),
}

/// Resolve the bearer credential into a principal context.
pub fn authenticate(state: &GateState, headers: &HeaderMap) -> Result<PrincipalContext, GateError> {
    let token = extract_bearer(headers)?;

    let claims = state
        .verifier
        .verify(token, Utc::now())
        .map_err(|e| GateError::Authentication(e.to_string()))?;

    Ok(PrincipalContext::new(claims.sub, claims.roles))
}

/// Check that the principal's flat permission set covers `required`.
pub fn authorize_action(
    principal: &PrincipalContext,
    required: &Permission,
) -> Result<(), GateError> {
    let principal = Principal {
        principal_id: principal.principal_id(),
        roles: principal.roles().to_vec(),
        permissions: permissions_from_roles(principal.roles()),
    };

    authorize(&principal, required)?;
    Ok(())
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, GateError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| GateError::Authentication("missing Authorization header".to_string()))?;

    let header = header
        .to_str()
        .map_err(|_| GateError::Authentication("malformed Authorization header".to_string()))?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| GateError::Authentication("expected a Bearer credential".to_string()))?;

    let token = header.trim();
    if token.is_empty() {
        return Err(GateError::Authentication("empty bearer token".to_string()));
    }

    Ok(token)
}

/// Role→permission policy.
///
/// Roles expand to a flat capability set: `admin` gets the wildcard,
/// `merchant` gets the catalog mutations, everything else (notably
/// `consumer`) gets nothing.
fn permissions_from_roles(roles: &[Role]) -> Vec<Permission> {
    let mut perms = Vec::new();
    for role in roles {
        match role.as_str() {
            "admin" => perms.push(Permission::new("*")),
            "merchant" => perms.extend([
                Permission::new("catalog.create"),
                Permission::new("catalog.delete"),
                Permission::new("catalog.publish"),
            ]),
            _ => {}
        }
    }
    perms
}
