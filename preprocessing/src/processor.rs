use crate::{
    lemmatizer::{IdentityLemmatizer, Lemmatizer},
    models::PreprocessingTrace,
    PreprocessingError, Result,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Function words dropped from the display pipeline. Scoring never uses this list.
pub const STOPWORDS: [&str; 14] = [
    "the", "is", "at", "which", "on", "and", "a", "to", "are", "as", "was", "were", "been", "be",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

// Word characters are ASCII only: accented letters are stripped like punctuation.
static SPECIAL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_\s]").expect("special character pattern is a valid regex")
});

/// Runs the normalization chain: lowercase, strip special characters,
/// remove stopwords, lemmatize.
pub struct TextProcessor {
    lemmatizer: Box<dyn Lemmatizer>,
}

impl TextProcessor {
    pub fn new() -> Self {
        Self::with_lemmatizer(IdentityLemmatizer)
    }

    pub fn with_lemmatizer(lemmatizer: impl Lemmatizer + 'static) -> Self {
        Self {
            lemmatizer: Box::new(lemmatizer),
        }
    }

    pub fn lemmatizer_name(&self) -> &str {
        self.lemmatizer.name()
    }

    /// Normalizes `text` and records every intermediate stage.
    ///
    /// Empty input is not an error here: it flows through every stage as an
    /// empty string. Rejecting empty requests is the caller's job.
    pub fn normalize(&self, text: &str) -> Result<PreprocessingTrace> {
        let lowercase = Self::lowercase(text);
        let no_special_chars = Self::strip_special_chars(&lowercase);
        let no_stopwords = Self::remove_stopwords(&no_special_chars);
        let lemmatized = self.lemmatize(&no_stopwords)?;

        tracing::debug!(
            "Normalized '{}' -> '{}' (lemmatizer: {})",
            text.chars().take(50).collect::<String>(),
            lemmatized,
            self.lemmatizer.name()
        );

        Ok(PreprocessingTrace::new(
            text.to_string(),
            lowercase,
            no_special_chars,
            no_stopwords,
            lemmatized,
        ))
    }

    pub fn normalize_batch(&self, texts: &[&str]) -> Vec<Result<PreprocessingTrace>> {
        texts.iter().map(|text| self.normalize(text)).collect()
    }

    pub fn lowercase(text: &str) -> String {
        text.to_lowercase()
    }

    /// Drops every character that is neither an ASCII word character
    /// (`[A-Za-z0-9_]`) nor whitespace. Whitespace is left untouched.
    pub fn strip_special_chars(text: &str) -> String {
        SPECIAL_CHARS.replace_all(text, "").into_owned()
    }

    pub fn remove_stopwords(text: &str) -> String {
        text.split_whitespace()
            .filter(|token| !Self::is_stopword(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_stopword(token: &str) -> bool {
        STOPWORD_SET.contains(token)
    }

    fn lemmatize(&self, text: &str) -> Result<String> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let lemmas = self.lemmatizer.lemmatize(&tokens)?;

        if lemmas.len() > tokens.len() {
            return Err(PreprocessingError::Lemmatization(format!(
                "lemmatizer '{}' produced {} tokens from {}",
                self.lemmatizer.name(),
                lemmas.len(),
                tokens.len()
            )));
        }

        Ok(lemmas.join(" "))
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}
