//! Query → record resolution.
//!
//! Stages run in a fixed order and the first one that decides wins:
//! empty → direct key → tokenize → alias phrase → alias token → exact key/keyword → scoring.
//! Each stage is looser than the previous one; the scoring stage additionally refuses to answer
//! when the winner does not clearly beat the runner-up.
//!
//! A `Resolver` holds only immutable data, so `resolve` is a pure function of its input and can
//! be called from several threads at once.

use crate::alias::AliasTable;
use crate::catalog::Catalog;
use crate::stopwords::StopwordSet;
use crate::textprep::{normalize, tokenize};
use serde::Serialize;
use std::cmp::Reverse;
use tagfinder_core::{MatchConfig, MatchReason, MatchResult, Record, Result};

/// Normalized view of one record, computed once.
#[derive(Debug, Clone)]
struct IndexedRecord {
    key: String,
    keywords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Catalog,
    aliases: AliasTable,
    stopwords: StopwordSet,
    config: MatchConfig,
    index: Vec<IndexedRecord>,
}

/// Per-record totals of the scoring stage, for diagnostics.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Explanation {
    pub tokens: Vec<String>,
    /// `(key, total)` for every record with a positive total, best first.
    pub scores: Vec<(String, u32)>,
    pub result: MatchResult,
}

fn token_score(token: &str, rec: &IndexedRecord) -> u32 {
    let mut s = 0;
    if rec
        .keywords
        .iter()
        .any(|k| k.contains(token) || token.contains(k.as_str()))
    {
        s += 2;
    }
    if rec.key.contains(token) || token.contains(rec.key.as_str()) {
        s += 2;
    }
    let exact = rec.key == token || rec.keywords.iter().any(|k| k == token);
    if exact && token.chars().count() >= 4 {
        s += 1;
    }
    s
}

impl Resolver {
    pub fn new(
        catalog: Catalog,
        aliases: AliasTable,
        stopwords: StopwordSet,
        config: MatchConfig,
    ) -> Self {
        for d in aliases.dangling(&catalog) {
            tracing::warn!(
                phrase = %d.phrase,
                key = %d.key,
                "alias targets a key missing from the catalog"
            );
        }
        let index = catalog
            .records()
            .iter()
            .map(|r| {
                let mut keywords: Vec<String> = Vec::with_capacity(r.keywords.len());
                for k in &r.keywords {
                    let n = normalize(k);
                    if !n.is_empty() && !keywords.contains(&n) {
                        keywords.push(n);
                    }
                }
                IndexedRecord {
                    key: normalize(&r.key),
                    keywords,
                }
            })
            .collect();
        Self {
            catalog,
            aliases,
            stopwords,
            config,
            index,
        }
    }

    /// Shipped catalog, aliases and stopwords with default thresholds.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            Catalog::builtin()?,
            AliasTable::builtin(),
            StopwordSet::builtin(),
            MatchConfig::default(),
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn config(&self) -> MatchConfig {
        self.config
    }

    /// Records in catalog order (menu order).
    pub fn records(&self) -> &[Record] {
        self.catalog.records()
    }

    /// Direct load by key, e.g. from a menu entry. Accepts `img`, `IMG` or `<img>`.
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.catalog.get_normalized(&normalize(key))
    }

    pub fn resolve(&self, query: &str) -> MatchResult {
        let (tokens, result) = self.run(query);
        tracing::debug!(
            reason = %result.reason,
            key = result.key().unwrap_or("-"),
            tokens = tokens.len(),
            "resolved query"
        );
        result
    }

    /// Like [`Resolver::resolve`], but also reports the tokens and the scoring totals.
    pub fn explain(&self, query: &str) -> Explanation {
        let (tokens, result) = self.run(query);
        let scores = self
            .rank(&tokens)
            .into_iter()
            .map(|(i, s)| (self.catalog.records()[i].key.clone(), s))
            .collect();
        Explanation {
            tokens,
            scores,
            result,
        }
    }

    fn alias_target(&self, phrase: &str) -> Option<&Record> {
        // A dangling alias yields None here and the pipeline moves on.
        self.aliases.get(phrase).and_then(|key| self.catalog.get(key))
    }

    fn run(&self, query: &str) -> (Vec<String>, MatchResult) {
        let cleaned = normalize(query);
        if cleaned.is_empty() {
            return (Vec::new(), MatchResult::miss(MatchReason::Empty));
        }

        // Normalization already turned `<` and `>` into separators, so "<img>" is "img" here.
        if let Some(r) = self.catalog.get_normalized(&cleaned) {
            return (Vec::new(), MatchResult::hit(r, MatchReason::DirectKey));
        }

        let tokens = tokenize(query, &self.stopwords);
        if tokens.is_empty() {
            return (tokens, MatchResult::miss(MatchReason::OnlyStopwords));
        }

        if let Some(r) = self.alias_target(&tokens.join(" ")) {
            let result = MatchResult::hit(r, MatchReason::AliasPhrase);
            return (tokens, result);
        }
        if let Some(r) = tokens.iter().find_map(|t| self.alias_target(t)) {
            let result = MatchResult::hit(r, MatchReason::AliasToken);
            return (tokens, result);
        }

        for token in &tokens {
            for (i, rec) in self.index.iter().enumerate() {
                let r = &self.catalog.records()[i];
                if rec.key == *token {
                    return (tokens.clone(), MatchResult::hit(r, MatchReason::ExactKey));
                }
                if rec.keywords.iter().any(|k| k == token) {
                    return (tokens.clone(), MatchResult::hit(r, MatchReason::ExactKeyword));
                }
            }
        }

        let ranked = self.rank(&tokens);
        let Some(&(best_idx, best)) = ranked.first() else {
            return (tokens, MatchResult::miss(MatchReason::NoMatch));
        };
        let second = ranked.get(1).map(|&(_, s)| s).unwrap_or(0);
        if best < self.config.min_score || best - second < self.config.gap {
            return (tokens, MatchResult::miss(MatchReason::Ambiguous));
        }
        let r = &self.catalog.records()[best_idx];
        (tokens, MatchResult::hit(r, MatchReason::Scored))
    }

    /// `(record index, total)` for records scoring above zero, best first. Ties keep catalog
    /// order.
    fn rank(&self, tokens: &[String]) -> Vec<(usize, u32)> {
        let mut totals = vec![0u32; self.index.len()];
        for token in tokens {
            for (i, rec) in self.index.iter().enumerate() {
                totals[i] += token_score(token, rec);
            }
        }
        let mut ranked: Vec<(usize, u32)> = totals
            .into_iter()
            .enumerate()
            .filter(|&(_, s)| s > 0)
            .collect();
        ranked.sort_by_key(|&(_, s)| Reverse(s));
        ranked
    }
}
