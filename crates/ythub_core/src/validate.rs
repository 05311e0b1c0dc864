use thiserror::Error;

use crate::{StatusCode, StatusKind, StatusRegistry};

/// Extension point for accepting or rejecting codes the registry does not
/// know about (or vetoing ones it does). `None` means "no opinion".
pub type ValidationHook = Box<dyn Fn(StatusCode) -> Option<bool> + Send + Sync>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid {domain} status {code}.")]
    InvalidStatus { domain: String, code: StatusCode },
}

pub struct StatusValidator<'a> {
    domain: &'static str,
    registry: &'a StatusRegistry,
    hooks: Vec<ValidationHook>,
}

impl<'a> StatusValidator<'a> {
    pub fn new(domain: &'static str, registry: &'a StatusRegistry) -> Self {
        Self {
            domain,
            registry,
            hooks: Vec::new(),
        }
    }

    pub fn for_kind<K: StatusKind>(registry: &'a StatusRegistry) -> Self {
        Self::new(K::DOMAIN, registry)
    }

    pub fn add_hook<F>(&mut self, hook: F)
    where
        F: Fn(StatusCode) -> Option<bool> + Send + Sync + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// The last hook with an opinion decides; otherwise registered codes are valid.
    pub fn is_valid(&self, code: StatusCode) -> bool {
        self.hooks
            .iter()
            .filter_map(|hook| hook(code))
            .last()
            .unwrap_or_else(|| self.registry.contains(code))
    }

    pub fn validate(&self, code: StatusCode) -> Result<StatusCode, ValidationError> {
        if self.is_valid(code) {
            Ok(code)
        } else {
            Err(ValidationError::InvalidStatus {
                domain: self.domain.to_string(),
                code,
            })
        }
    }
}
