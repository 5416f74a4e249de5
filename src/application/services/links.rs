//! Link shortener service
//!
//! Generates short codes for target URLs and resolves them back. No
//! hierarchy involved; the store is flat.

use std::sync::Arc;

use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{DomainError, Link, LinkId};
use crate::infrastructure::traits::LinkStore;

/// Length of generated short codes (hex characters).
const CODE_LEN: usize = 8;

/// Service for creating and resolving shortened links.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    /// Public base URL the short links are served under
    base_url: String,
}

impl LinkService {
    /// Create a new link service. `base_url` has any trailing slash removed.
    pub fn new(store: Arc<dyn LinkStore>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { store, base_url }
    }

    /// All links, in store order.
    pub fn list_all(&self) -> ApplicationResult<Vec<Link>> {
        debug!("list_all");
        self.store.fetch_all().with_context("fetch all links")
    }

    /// Shorten a target URL.
    ///
    /// The target must parse as an absolute URL; anything else is rejected
    /// before touching the store.
    pub fn create(&self, target: &str) -> ApplicationResult<Link> {
        debug!("create: target={target:?}");
        Url::parse(target).map_err(|e| {
            DomainError::InvalidArgument(format!("invalid target URL {target:?}: {e}"))
        })?;

        let code = generate_code();
        let link = Link {
            id: LinkId::new(),
            target: target.to_string(),
            short_url: format!("{}/{}", self.base_url, code),
            code,
        };

        self.store.save(link).with_context("save new link")
    }

    /// Resolve a short code to its target URL.
    pub fn resolve(&self, code: &str) -> ApplicationResult<String> {
        debug!("resolve: code={code}");
        let link = self
            .store
            .fetch_by_code(code)
            .with_context("fetch link by code")?
            .ok_or_else(|| DomainError::LinkNotFound(code.to_string()))?;
        Ok(link.target)
    }

    /// Delete a link. Unknown ids are a no-op, matching item deletion.
    pub fn delete(&self, id: &LinkId) -> ApplicationResult<()> {
        debug!("delete: id={id}");
        self.store.delete(id).with_context("delete link")
    }
}

/// Generate a random short code (8 lowercase hex characters).
fn generate_code() -> String {
    let mut hex = Uuid::new_v4().simple().to_string();
    hex.truncate(CODE_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_generator_when_called_then_code_is_eight_hex_chars() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
