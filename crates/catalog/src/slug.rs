use core::str::FromStr;

use serde::{Deserialize, Serialize};

use vitrine_core::DomainError;

/// Human-readable unique key for a product, used in place of its opaque
/// identifier for public detail lookups.
///
/// Always non-empty, lowercase `[a-z0-9-]`, with no leading or trailing dash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a product name.
    ///
    /// ASCII alphanumerics are kept (lowercased); every other run of
    /// characters collapses into a single dash. A name with no slug-safe
    /// characters cannot be addressed and is rejected.
    pub fn derive(name: &str) -> Result<Self, DomainError> {
        let mut out = String::with_capacity(name.len());
        let mut pending_dash = false;

        for ch in name.chars() {
            if ch.is_ascii_alphanumeric() {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push(ch.to_ascii_lowercase());
            } else {
                pending_dash = true;
            }
        }

        if out.is_empty() {
            return Err(DomainError::validation(
                "name contains no characters usable in a slug",
            ));
        }

        Ok(Self(out))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::validation("slug must not be empty"));
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(DomainError::validation(
                "slug must not start or end with a dash",
            ));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::validation(
                "slug may only contain lowercase letters, digits and dashes",
            ));
        }
        Ok(Self(s.to_string()))
    }
}
