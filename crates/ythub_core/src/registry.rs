use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ythub_logging::ythub_debug;

use crate::{StatusCode, StatusKind};

/// Display metadata bound to one status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDescriptor {
    pub text: String,
    pub icon: String,
}

/// One registration: the symbolic name, its code and how to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub name: String,
    pub code: StatusCode,
    pub text: String,
    pub icon: String,
}

impl StatusEntry {
    pub fn new(
        name: impl Into<String>,
        code: StatusCode,
        text: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code,
            text: text.into(),
            icon: icon.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("status code {code} registered twice ({first} and {second})")]
    DuplicateCode {
        code: StatusCode,
        first: String,
        second: String,
    },
    #[error("status name {0} registered twice")]
    DuplicateName(String),
    #[error("status entry for code {0} has an empty name")]
    EmptyName(StatusCode),
}

/// Code to descriptor lookup table for one status domain.
///
/// Lookups are total: an unregistered code renders as its bare integer with
/// no icon, so a client running behind the backend's enum never fails to
/// draw a row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusRegistry {
    descriptors: HashMap<StatusCode, StatusDescriptor>,
    names: HashMap<String, StatusCode>,
}

impl StatusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated from a domain's static table.
    pub fn for_kind<K: StatusKind>() -> Self {
        let mut registry = Self::new();
        registry.register_status(K::entries());
        registry
    }

    /// Strict construction: duplicate codes, duplicate names and empty names
    /// are rejected instead of overwritten.
    pub fn try_from_entries<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = StatusEntry>,
    {
        let mut registry = Self::new();
        let mut seen_names = HashSet::new();
        let mut code_owner: HashMap<StatusCode, String> = HashMap::new();

        for entry in entries {
            if entry.name.is_empty() {
                return Err(RegistryError::EmptyName(entry.code));
            }
            if !seen_names.insert(entry.name.clone()) {
                return Err(RegistryError::DuplicateName(entry.name));
            }
            if let Some(first) = code_owner.get(&entry.code) {
                return Err(RegistryError::DuplicateCode {
                    code: entry.code,
                    first: first.clone(),
                    second: entry.name,
                });
            }
            code_owner.insert(entry.code, entry.name.clone());
            registry.insert(entry);
        }
        Ok(registry)
    }

    /// Adds entries, last write wins on a repeated code or name.
    pub fn register_status<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = StatusEntry>,
    {
        for entry in entries {
            self.insert(entry);
        }
    }

    fn insert(&mut self, entry: StatusEntry) {
        let descriptor = StatusDescriptor {
            text: entry.text,
            icon: entry.icon,
        };
        if let Some(previous) = self.descriptors.get(&entry.code) {
            if *previous != descriptor {
                ythub_debug!(
                    "status code {} re-registered as {:?} (was {:?})",
                    entry.code,
                    descriptor.text,
                    previous.text
                );
            }
        }
        self.names.insert(entry.name, entry.code);
        self.descriptors.insert(entry.code, descriptor);
    }

    pub fn descriptor(&self, code: StatusCode) -> Option<&StatusDescriptor> {
        self.descriptors.get(&code)
    }

    /// Registered label, or the code itself when unregistered.
    pub fn text(&self, code: StatusCode) -> Cow<'_, str> {
        match self.descriptors.get(&code) {
            Some(descriptor) => Cow::Borrowed(descriptor.text.as_str()),
            None => Cow::Owned(code.to_string()),
        }
    }

    pub fn icon(&self, code: StatusCode) -> Option<&str> {
        self.descriptors.get(&code).map(|d| d.icon.as_str())
    }

    /// `text(code)` as an HTML class fragment: lowercase, spaces to hyphens.
    pub fn class_affix(&self, code: StatusCode) -> String {
        self.text(code).to_lowercase().replace(' ', "-")
    }

    /// The code bound to a symbolic name such as `"RUNNING"`.
    pub fn code_of(&self, name: &str) -> Option<StatusCode> {
        self.names.get(name).copied()
    }

    pub fn contains(&self, code: StatusCode) -> bool {
        self.descriptors.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn codes(&self) -> Vec<StatusCode> {
        let mut codes: Vec<StatusCode> = self.descriptors.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}
