use crate::builtin;
use crate::catalog::Catalog;
use crate::textprep::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tagfinder_core::{Error, Result};

const ALIASES_KIND: &str = "tagfinder_aliases";

/// Normalized phrase (one or more words) → record key.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    map: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliasEntry {
    pub phrase: String,
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct AliasesFile {
    schema_version: u64,
    kind: String,
    aliases: Vec<AliasEntry>,
}

impl AliasTable {
    /// Build from `(phrase, key)` pairs. Phrases are normalized here; when two phrases collapse
    /// to the same text the later pair wins.
    pub fn new<I, P, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, K)>,
        P: AsRef<str>,
        K: AsRef<str>,
    {
        let mut map: HashMap<String, String> = HashMap::new();
        for (phrase, key) in pairs {
            let phrase = normalize(phrase.as_ref());
            if phrase.is_empty() {
                continue;
            }
            let key = key.as_ref().trim().to_string();
            if let Some(prev) = map.insert(phrase.clone(), key.clone()) {
                if prev != key {
                    tracing::debug!(phrase = %phrase, from = %prev, to = %key, "alias overridden");
                }
            }
        }
        Self { map }
    }

    pub fn builtin() -> Self {
        Self::new(builtin::ALIASES.iter().copied())
    }

    /// Read a `tagfinder_aliases` JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: AliasesFile = serde_json::from_str(raw)?;
        if file.schema_version != 1 || file.kind != ALIASES_KIND {
            return Err(Error::Config(format!(
                "unexpected aliases file kind/schema_version (want {ALIASES_KIND}/1, got {}/{})",
                file.kind, file.schema_version
            )));
        }
        Ok(Self::new(file.aliases.into_iter().map(|a| (a.phrase, a.key))))
    }

    /// Exact lookup. `phrase` must already be normalized.
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.map.get(phrase).map(String::as_str)
    }

    /// Entries whose target key is not in `catalog`, sorted by phrase.
    pub fn dangling(&self, catalog: &Catalog) -> Vec<AliasEntry> {
        let mut out: Vec<AliasEntry> = self
            .map
            .iter()
            .filter(|(_, key)| catalog.position(key).is_none())
            .map(|(phrase, key)| AliasEntry {
                phrase: phrase.clone(),
                key: key.clone(),
            })
            .collect();
        out.sort_by(|a, b| a.phrase.cmp(&b.phrase));
        out
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
