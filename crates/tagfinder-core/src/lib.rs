use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("duplicate catalog key: {0}")]
    DuplicateKey(String),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// One catalog entry describing a single markup element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Short identifier, unique across the catalog (e.g. `img`).
    pub key: String,
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
    /// Literal code sample, shown verbatim.
    pub example: String,
    /// Synonyms. The same word may belong to several records.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Why a resolution produced (or did not produce) a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchReason {
    Empty,
    OnlyStopwords,
    DirectKey,
    AliasPhrase,
    AliasToken,
    ExactKey,
    ExactKeyword,
    NoMatch,
    Ambiguous,
    Scored,
}

impl MatchReason {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchReason::Empty => "empty",
            MatchReason::OnlyStopwords => "only-stopwords",
            MatchReason::DirectKey => "direct-key",
            MatchReason::AliasPhrase => "alias-phrase",
            MatchReason::AliasToken => "alias-token",
            MatchReason::ExactKey => "exact-key",
            MatchReason::ExactKeyword => "exact-keyword",
            MatchReason::NoMatch => "no-match",
            MatchReason::Ambiguous => "ambiguous",
            MatchReason::Scored => "scored",
        }
    }

    /// True for the reasons that always carry a record.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            MatchReason::DirectKey
                | MatchReason::AliasPhrase
                | MatchReason::AliasToken
                | MatchReason::ExactKey
                | MatchReason::ExactKeyword
                | MatchReason::Scored
        )
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolver's only output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub record: Option<Record>,
    pub reason: MatchReason,
}

impl MatchResult {
    pub fn hit(record: &Record, reason: MatchReason) -> Self {
        Self {
            record: Some(record.clone()),
            reason,
        }
    }

    pub fn miss(reason: MatchReason) -> Self {
        Self {
            record: None,
            reason,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.record.as_ref().map(|r| r.key.as_str())
    }
}

/// Scoring thresholds for the last pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum total a record needs to be accepted.
    #[serde(default = "MatchConfig::default_min_score")]
    pub min_score: u32,
    /// Minimum margin of the winner over the runner-up.
    #[serde(default = "MatchConfig::default_gap")]
    pub gap: u32,
}

impl MatchConfig {
    pub const MIN_SCORE: u32 = 3;
    pub const GAP: u32 = 2;

    fn default_min_score() -> u32 {
        Self::MIN_SCORE
    }

    fn default_gap() -> u32 {
        Self::GAP
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: Self::MIN_SCORE,
            gap: Self::GAP,
        }
    }
}

/// Display-ready strings for one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    pub title: String,
    pub description: String,
    pub code: String,
}

/// Presentation collaborator: receives what should be on screen.
pub trait DisplaySink {
    fn show(&mut self, rendered: &Rendered);
}

impl DisplaySink for Vec<Rendered> {
    fn show(&mut self, rendered: &Rendered) {
        self.push(rendered.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_serializes_kebab_case() {
        let s = serde_json::to_string(&MatchReason::OnlyStopwords).unwrap();
        assert_eq!(s, "\"only-stopwords\"");
        for r in [
            MatchReason::Empty,
            MatchReason::DirectKey,
            MatchReason::AliasPhrase,
            MatchReason::ExactKeyword,
            MatchReason::NoMatch,
            MatchReason::Scored,
        ] {
            let s = serde_json::to_string(&r).unwrap();
            assert_eq!(s, format!("\"{}\"", r.as_str()));
        }
    }

    #[test]
    fn record_reads_desc_alias() {
        let r: Record = serde_json::from_str(
            r#"{"key":"p","title":"<p>","desc":"Paragrafo","example":"<p></p>"}"#,
        )
        .unwrap();
        assert_eq!(r.description, "Paragrafo");
        assert!(r.keywords.is_empty());
    }

    #[test]
    fn match_config_defaults_fill_missing_fields() {
        let c: MatchConfig = serde_json::from_str(r#"{"gap":5}"#).unwrap();
        assert_eq!(c.min_score, 3);
        assert_eq!(c.gap, 5);
        assert_eq!(MatchConfig::default(), MatchConfig { min_score: 3, gap: 2 });
    }

    #[test]
    fn hit_reasons_are_exactly_the_record_bearing_ones() {
        assert!(MatchReason::Scored.is_hit());
        assert!(!MatchReason::Ambiguous.is_hit());
        assert!(!MatchReason::Empty.is_hit());
    }
}
