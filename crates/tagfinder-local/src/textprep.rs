//! Minimal, deterministic text normalization helpers.
//!
//! Both the query side and the data side (record keys, keywords, alias phrases, stopwords) go
//! through [`normalize`], so every comparison in the resolver is plain string equality or
//! substring containment over the same alphabet.

use crate::stopwords::StopwordSet;
use unicode_normalization::UnicodeNormalization;

/// Characters treated as separators. Everything else (including `-`) is kept.
const PUNCTUATION: &[char] = &['<', '>', '/', '.', ',', ';', ':', '!', '?', '(', ')', '"', '\''];

/// Prefix users glue to the element name ("tagimagem").
const TAG_PREFIX: &str = "tag";

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Matching key for free text.
///
/// - lowercase
/// - NFD + drop combining diacritics ("á" becomes "a")
/// - the fixed punctuation set becomes spaces
/// - whitespace runs collapse to one space, ends trimmed
pub fn normalize(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut last_space = true;
    for ch in lowered.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_whitespace() || PUNCTUATION.contains(&ch) {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
            continue;
        }
        out.push(ch);
        last_space = false;
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Same as [`normalize`], for optional input.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize).unwrap_or_default()
}

/// Split a query into useful tokens.
///
/// Stopwords are dropped first, then a single leading `tag` is stripped from each survivor.
/// Order and duplicates are preserved.
pub fn tokenize(query: &str, stopwords: &StopwordSet) -> Vec<String> {
    let cleaned = normalize(query);
    if cleaned.is_empty() {
        return Vec::new();
    }
    cleaned
        .split(' ')
        .filter(|t| !t.is_empty())
        .filter(|t| !stopwords.contains(t))
        .map(|t| t.strip_prefix(TAG_PREFIX).unwrap_or(t).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_folds_case_accents_and_punctuation() {
        assert_eq!(normalize("  Imàgem  "), "imagem");
        assert_eq!(normalize("<IMG>"), "img");
        assert_eq!(normalize("Parágrafo, por favor!"), "paragrafo por favor");
        assert_eq!(normalize("cabeçalho\t\nda   tabela"), "cabecalho da tabela");
        assert_eq!(normalize("(a) \"b\" 'c'"), "a b c");
    }

    #[test]
    fn normalize_keeps_hyphens_and_digits() {
        assert_eq!(normalize("Pré-formatado"), "pre-formatado");
        assert_eq!(normalize("H1"), "h1");
    }

    #[test]
    fn normalize_of_blank_or_absent_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("<>/.,"), "");
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("Áudio")), "audio");
    }

    #[test]
    fn tokenize_drops_stopwords_and_keeps_order() {
        let sw = StopwordSet::builtin();
        assert_eq!(
            tokenize("quero colocar uma imagem no site", &sw),
            vec!["imagem", "site"]
        );
        assert_eq!(tokenize("lista lista", &sw), vec!["lista", "lista"]);
        assert!(tokenize("para o", &sw).is_empty());
        assert!(tokenize("tag html", &sw).is_empty());
        assert!(tokenize("", &sw).is_empty());
    }

    #[test]
    fn tokenize_strips_only_a_leading_tag_prefix() {
        let sw = StopwordSet::builtin();
        assert_eq!(tokenize("tagimagem", &sw), vec!["imagem"]);
        assert_eq!(tokenize("<tagvideo>", &sw), vec!["video"]);
        assert_eq!(tokenize("vintage", &sw), vec!["vintage"]);
        assert_eq!(tokenize("tagtagx", &sw), vec!["tagx"]);
    }

    proptest! {
        #[test]
        fn normalize_output_is_canonical(s in any::<String>()) {
            let n = normalize(&s);
            prop_assert!(!n.starts_with(' ') && !n.ends_with(' '));
            prop_assert!(!n.contains("  "));
            prop_assert!(!n.chars().any(|c| PUNCTUATION.contains(&c)));
            prop_assert!(!n.chars().any(is_combining_mark));
        }

        #[test]
        fn tokens_are_never_empty_or_stopwords(s in "[a-zA-Z àéç<>.,!?]{0,40}") {
            let sw = StopwordSet::builtin();
            for t in tokenize(&s, &sw) {
                prop_assert!(!t.contains(' '));
                // "tag" alone is a stopword, so stripping the prefix never leaves nothing.
                prop_assert!(!t.is_empty());
            }
        }
    }
}
