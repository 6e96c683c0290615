//! Frozen, ordered record collection plus the one-time integrity pass run before it is handed
//! to the resolver.
//!
//! Startup sequence: raw records (built-in literal or JSON file) → [`validate_and_repair`] →
//! [`Catalog`] (immutable) → `Resolver`.

use crate::builtin;
use crate::textprep::normalize;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tagfinder_core::{Error, Record, Result};

const CATALOG_KIND: &str = "tagfinder_catalog";

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Record>,
    by_key: HashMap<String, usize>,
    by_normalized_key: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    schema_version: u64,
    kind: String,
    records: Vec<Record>,
}

impl Catalog {
    /// Freeze `records` as-is. Fails on an empty key or when two records share a key after
    /// normalization.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut by_key = HashMap::with_capacity(records.len());
        let mut by_normalized_key = HashMap::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            let nk = normalize(&r.key);
            if nk.is_empty() {
                return Err(Error::InvalidRecord(format!(
                    "record #{i} has an empty key (title {:?})",
                    r.title
                )));
            }
            if by_normalized_key.insert(nk, i).is_some() {
                return Err(Error::DuplicateKey(r.key.clone()));
            }
            by_key.insert(r.key.clone(), i);
        }
        Ok(Self {
            records,
            by_key,
            by_normalized_key,
        })
    }

    /// The shipped knowledge base, after the integrity pass.
    pub fn builtin() -> Result<Self> {
        validate_and_repair(builtin::records())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the record whose key is exactly `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.position(key).map(|i| &self.records[i])
    }

    /// Lookup by an already-normalized key.
    pub fn get_normalized(&self, normalized_key: &str) -> Option<&Record> {
        self.by_normalized_key
            .get(normalized_key)
            .map(|&i| &self.records[i])
    }
}

/// Read a `tagfinder_catalog` JSON file. The records are returned raw; run them through
/// [`validate_and_repair`] before use.
pub fn load_records_json(path: &Path) -> Result<Vec<Record>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
    parse_records_json(&raw)
}

pub fn parse_records_json(raw: &str) -> Result<Vec<Record>> {
    let file: CatalogFile = serde_json::from_str(raw)?;
    if file.schema_version != 1 || file.kind != CATALOG_KIND {
        return Err(Error::Config(format!(
            "unexpected catalog file kind/schema_version (want {CATALOG_KIND}/1, got {}/{})",
            file.kind, file.schema_version
        )));
    }
    Ok(file.records)
}

fn repair_record(mut r: Record) -> Result<Record> {
    r.key = r.key.trim().to_string();
    if normalize(&r.key).is_empty() {
        return Err(Error::InvalidRecord(format!(
            "empty key (title {:?})",
            r.title
        )));
    }
    r.title = r.title.trim().to_string();
    if r.title.is_empty() {
        r.title = format!("<{}>", r.key);
        tracing::warn!(key = %r.key, "record without title; using the key");
    }
    r.description = r.description.trim().to_string();

    // Per-record keyword cleanup only: the same word may still belong to other records.
    let mut seen = HashSet::new();
    r.keywords = std::mem::take(&mut r.keywords)
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| {
            let n = normalize(k);
            !n.is_empty() && seen.insert(n)
        })
        .collect();
    Ok(r)
}

/// One-time integrity pass over raw catalog data.
///
/// - trims fields; drops blank keywords and keywords repeated within one record
/// - rejects a record whose key normalizes to nothing
/// - backfills an empty title with `<key>`
/// - collapses exact duplicate records into the first occurrence
/// - fails with [`Error::DuplicateKey`] when different records share a key
pub fn validate_and_repair(records: Vec<Record>) -> Result<Catalog> {
    let mut out: Vec<Record> = Vec::with_capacity(records.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(records.len());
    for raw in records {
        let r = repair_record(raw)?;
        let nk = normalize(&r.key);
        match index.get(&nk) {
            Some(&i) if out[i] == r => {
                tracing::warn!(key = %r.key, "duplicate record dropped");
            }
            Some(_) => return Err(Error::DuplicateKey(r.key)),
            None => {
                index.insert(nk, out.len());
                out.push(r);
            }
        }
    }
    Catalog::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(key: &str, title: &str, keywords: &[&str]) -> Record {
        Record {
            key: key.to_string(),
            title: title.to_string(),
            description: format!("{key} description"),
            example: format!("<{key}></{key}>"),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        let c = Catalog::builtin().unwrap();
        assert_eq!(c.len(), 39);
        assert_eq!(c.records()[0].key, "doctype");
        assert_eq!(c.get("img").unwrap().title, "<img>");
        assert_eq!(c.get_normalized("select").unwrap().key, "select");
    }

    #[test]
    fn new_rejects_key_collisions_after_normalization() {
        let err = Catalog::new(vec![rec("img", "a", &[]), rec("IMG", "b", &[])]).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(k) if k == "IMG"));
    }

    #[test]
    fn repair_collapses_identical_duplicates() {
        let c = validate_and_repair(vec![
            rec("p", "<p>", &["texto"]),
            rec("a", "<a>", &["link"]),
            rec("p", "<p>", &["texto"]),
        ])
        .unwrap();
        let keys: Vec<&str> = c.records().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["p", "a"]);
    }

    #[test]
    fn repair_fails_fast_on_conflicting_duplicates() {
        let err = validate_and_repair(vec![rec("p", "<p>", &[]), rec(" p ", "<P>", &["x"])])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(_)));
    }

    #[test]
    fn repair_backfills_title_and_cleans_keywords() {
        let c = validate_and_repair(vec![rec(
            " nav ",
            "  ",
            &["menu", " ", "Menu", "navegação", "navegacao"],
        )])
        .unwrap();
        let r = &c.records()[0];
        assert_eq!(r.key, "nav");
        assert_eq!(r.title, "<nav>");
        assert_eq!(r.keywords, vec!["menu", "navegação"]);
    }

    #[test]
    fn repair_rejects_blank_keys() {
        let err = validate_and_repair(vec![rec("<>", "x", &[])]).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
    }

    #[test]
    fn catalog_file_is_parsed_and_checked() {
        let raw = r#"{"schema_version":1,"kind":"tagfinder_catalog","records":[
            {"key":"img","title":"<img>","desc":"Imagem","example":"<img>","keywords":["foto"]}
        ]}"#;
        let records = parse_records_json(raw).unwrap();
        assert_eq!(records[0].description, "Imagem");

        let wrong = r#"{"schema_version":1,"kind":"other","records":[]}"#;
        assert!(matches!(parse_records_json(wrong), Err(Error::Config(_))));
    }
}
