//! Startup settings: an optional JSON file plus `TAGFINDER_*` environment overrides.
//!
//! Lookup order for the file: explicit path (CLI `--config` / `TAGFINDER_CONFIG`), then
//! `<config_dir>/tagfinder/config.json` when present, else built-in defaults.

use crate::alias::AliasTable;
use crate::catalog::{load_records_json, validate_and_repair, Catalog};
use crate::resolver::Resolver;
use crate::stopwords::StopwordSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tagfinder_core::{Error, MatchConfig, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Catalog JSON replacing the built-in records.
    pub catalog: Option<PathBuf>,
    /// Alias JSON replacing the built-in alias table.
    pub aliases: Option<PathBuf>,
    /// Added to the built-in stopwords.
    pub extra_stopwords: Vec<String>,
    pub matching: MatchConfig,
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

fn env_u32(key: &str) -> Result<Option<u32>> {
    let Ok(v) = std::env::var(key) else {
        return Ok(None);
    };
    let v = v.trim();
    if v.is_empty() {
        return Ok(None);
    }
    v.parse::<u32>()
        .map(Some)
        .map_err(|_| Error::Config(format!("{key} must be a non-negative integer, got {v:?}")))
}

/// `<config_dir>/tagfinder/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tagfinder").join("config.json"))
}

impl Settings {
    /// Parse a settings file. Relative data paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        let mut s: Settings = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        s.catalog = s.catalog.map(|p| base.join(p));
        s.aliases = s.aliases.map(|p| base.join(p));
        Ok(s)
    }

    /// Explicit file if given, else the default location when it exists, else defaults.
    /// Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let s = match explicit {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(p) => {
                    tracing::debug!(path = %p.display(), "using default settings file");
                    Self::from_file(&p)?
                }
                None => Self::default(),
            },
        };
        s.with_env_overrides()
    }

    /// `TAGFINDER_CATALOG`, `TAGFINDER_ALIASES`, `TAGFINDER_MIN_SCORE`, `TAGFINDER_GAP`.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(p) = env_path("TAGFINDER_CATALOG") {
            self.catalog = Some(p);
        }
        if let Some(p) = env_path("TAGFINDER_ALIASES") {
            self.aliases = Some(p);
        }
        if let Some(n) = env_u32("TAGFINDER_MIN_SCORE")? {
            self.matching.min_score = n;
        }
        if let Some(n) = env_u32("TAGFINDER_GAP")? {
            self.matching.gap = n;
        }
        Ok(self)
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(p) => validate_and_repair(load_records_json(p)?),
            None => Catalog::builtin(),
        }
    }

    pub fn load_aliases(&self) -> Result<AliasTable> {
        match &self.aliases {
            Some(p) => AliasTable::from_json_file(p),
            None => Ok(AliasTable::builtin()),
        }
    }

    pub fn stopwords(&self) -> StopwordSet {
        let mut sw = StopwordSet::builtin();
        sw.extend(&self.extra_stopwords);
        sw
    }

    /// load → validate/repair → freeze → resolver.
    pub fn build_resolver(&self) -> Result<Resolver> {
        let catalog = self.load_catalog()?;
        let aliases = self.load_aliases()?;
        tracing::debug!(
            records = catalog.len(),
            aliases = aliases.len(),
            min_score = self.matching.min_score,
            gap = self.matching.gap,
            "building resolver"
        );
        Ok(Resolver::new(
            catalog,
            aliases,
            self.stopwords(),
            self.matching,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagfinder_core::MatchReason;

    #[test]
    fn empty_object_means_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.matching, MatchConfig::default());
    }

    #[test]
    fn relative_data_paths_follow_the_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("config.json");
        std::fs::write(
            &cfg,
            r#"{"catalog":"data/catalog.json","matching":{"min_score":4}}"#,
        )
        .unwrap();
        let s = Settings::from_file(&cfg).unwrap();
        assert_eq!(s.catalog, Some(dir.path().join("data/catalog.json")));
        assert_eq!(s.aliases, None);
        assert_eq!(s.matching, MatchConfig { min_score: 4, gap: 2 });
    }

    #[test]
    fn malformed_settings_are_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("config.json");
        std::fs::write(&cfg, r#"{"matching":{"gap":"wide"}}"#).unwrap();
        assert!(matches!(Settings::from_file(&cfg), Err(Error::Config(_))));
        assert!(matches!(
            Settings::from_file(&dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn build_resolver_from_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("catalog.json"),
            r#"{"schema_version":1,"kind":"tagfinder_catalog","records":[
                {"key":"canvas","title":"<canvas>","description":"Desenho.","example":"<canvas></canvas>","keywords":["desenho"]},
                {"key":"canvas","title":"<canvas>","description":"Desenho.","example":"<canvas></canvas>","keywords":["desenho"]}
            ]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("aliases.json"),
            r#"{"schema_version":1,"kind":"tagfinder_aliases","aliases":[
                {"phrase":"quadro branco","key":"canvas"},
                {"phrase":"imagem","key":"img"}
            ]}"#,
        )
        .unwrap();
        let s = Settings {
            catalog: Some(dir.path().join("catalog.json")),
            aliases: Some(dir.path().join("aliases.json")),
            extra_stopwords: vec!["grande".to_string()],
            matching: MatchConfig::default(),
        };
        let r = s.build_resolver().unwrap();
        assert_eq!(r.records().len(), 1);
        assert_eq!(r.aliases().dangling(r.catalog()).len(), 1);

        let m = r.resolve("um quadro grande branco");
        assert_eq!(m.key(), Some("canvas"));
        assert_eq!(m.reason, MatchReason::AliasPhrase);
        // Dangling "imagem" alias is skipped.
        assert_eq!(r.resolve("imagem").reason, MatchReason::NoMatch);
    }

    #[test]
    fn conflicting_catalog_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("catalog.json"),
            r#"{"schema_version":1,"kind":"tagfinder_catalog","records":[
                {"key":"p","title":"<p>","description":"a","example":"<p>"},
                {"key":"P","title":"<p>","description":"b","example":"<p>"}
            ]}"#,
        )
        .unwrap();
        let s = Settings {
            catalog: Some(dir.path().join("catalog.json")),
            ..Settings::default()
        };
        assert!(matches!(s.build_resolver(), Err(Error::DuplicateKey(_))));
    }
}
