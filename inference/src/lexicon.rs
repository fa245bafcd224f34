use crate::{InferenceError, Result};
use once_cell::sync::Lazy;
use std::sync::Arc;

pub const POSITIVE_WORDS: [&str; 9] = [
    "amazing",
    "excellent",
    "outstanding",
    "great",
    "fantastic",
    "wonderful",
    "love",
    "perfect",
    "awesome",
];

pub const NEGATIVE_WORDS: [&str; 9] = [
    "terrible", "awful", "horrible", "hate", "worst", "disappointed", "broken", "useless", "waste",
];

static DEFAULT_LEXICONS: Lazy<Arc<LexiconSet>> = Lazy::new(|| {
    Arc::new(LexiconSet {
        positive: Lexicon::from_trusted(&POSITIVE_WORDS),
        negative: Lexicon::from_trusted(&NEGATIVE_WORDS),
    })
});

/// A closed list of polarity words, matched by substring containment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    /// Builds a lexicon, rejecting empty lists and entries that could never
    /// match a lowercase whitespace-split token.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.is_empty() {
            return Err(InferenceError::InvalidLexicon("lexicon cannot be empty".to_string()));
        }

        for word in &words {
            if word.is_empty() {
                return Err(InferenceError::InvalidLexicon(
                    "lexicon entries cannot be empty".to_string(),
                ));
            }
            if word.chars().any(char::is_whitespace) {
                return Err(InferenceError::InvalidLexicon(format!(
                    "entry '{}' contains whitespace",
                    word
                )));
            }
            if word.to_lowercase() != *word {
                return Err(InferenceError::InvalidLexicon(format!(
                    "entry '{}' is not lowercase",
                    word
                )));
            }
        }

        Ok(Self { words })
    }

    fn from_trusted(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// True when any entry occurs inside `token`.
    pub fn matches(&self, token: &str) -> bool {
        self.words.iter().any(|word| token.contains(word.as_str()))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconSet {
    positive: Lexicon,
    negative: Lexicon,
}

impl LexiconSet {
    pub fn new(positive: Lexicon, negative: Lexicon) -> Self {
        Self { positive, negative }
    }

    /// The process-wide default lexicons, built once and never mutated.
    pub fn shared_default() -> Arc<LexiconSet> {
        Arc::clone(&DEFAULT_LEXICONS)
    }

    pub fn positive(&self) -> &Lexicon {
        &self.positive
    }

    pub fn negative(&self) -> &Lexicon {
        &self.negative
    }
}
