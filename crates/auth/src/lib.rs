//! `vitrine-auth` — pure authentication/authorization boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod authorize;
pub mod claims;
pub mod permissions;
pub mod principal;
pub mod roles;
pub mod token;

pub use authorize::{authorize, AuthzError, Principal};
pub use claims::{validate_claims, AccessClaims, TokenValidationError};
pub use permissions::Permission;
pub use principal::PrincipalId;
pub use roles::Role;
pub use token::{Hs256TokenVerifier, TokenError, TokenVerifier};
