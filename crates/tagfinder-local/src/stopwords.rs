use crate::builtin;
use crate::textprep::normalize;
use std::collections::HashSet;

/// Words ignored by the tokenizer. Stored normalized, so "explicação" and "explicacao" are
/// the same entry.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// Portuguese prepositions, articles, filler verbs and politeness words, plus
    /// `tag`/`tags`/`html`.
    pub fn builtin() -> Self {
        Self::new(builtin::STOPWORDS.iter().copied())
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for w in words {
            let n = normalize(w.as_ref());
            // A multi-word entry can never equal a single token.
            if n.is_empty() || n.contains(' ') {
                continue;
            }
            self.words.insert(n);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
