//! User aliases and the invocation context guarding them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment variable carrying the name of the alias being executed.
pub const RUNNING_ALIAS_ENV: &str = "ZK_RUNNING_ALIAS";

/// Mapping of alias name to shell command template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable(BTreeMap<String, String>);

impl AliasTable {
    pub fn new() -> Self {
        AliasTable::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, command: impl Into<String>) {
        self.0.insert(name.into(), command.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate aliases sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of this table; entries of `other` win.
    pub fn merged_with(&self, other: &AliasTable) -> AliasTable {
        let mut merged = self.clone();
        for (name, command) in other.iter() {
            merged.insert(name, command);
        }
        merged
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AliasTable(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// State inherited from the process that launched us.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    /// Alias whose command spawned this process, if any
    pub running_alias: Option<String>,
}

impl InvocationContext {
    /// Read the context once from the process environment.
    pub fn from_env() -> Self {
        let running_alias = std::env::var(RUNNING_ALIAS_ENV)
            .ok()
            .filter(|name| !name.is_empty());
        InvocationContext { running_alias }
    }

    pub fn with_running_alias(name: impl Into<String>) -> Self {
        InvocationContext {
            running_alias: Some(name.into()),
        }
    }

    /// True when `alias` is the one currently executing, in which case it
    /// must not be intercepted again.
    pub fn is_running(&self, alias: &str) -> bool {
        self.running_alias.as_deref() == Some(alias)
    }
}
