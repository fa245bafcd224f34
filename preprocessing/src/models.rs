use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of the normalization chain, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Original,
    Lowercase,
    NoSpecialChars,
    NoStopwords,
    Lemmatized,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Original,
        Stage::Lowercase,
        Stage::NoSpecialChars,
        Stage::NoStopwords,
        Stage::Lemmatized,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Original => "original",
            Stage::Lowercase => "lowercase",
            Stage::NoSpecialChars => "no_special_chars",
            Stage::NoStopwords => "no_stopwords",
            Stage::Lemmatized => "lemmatized",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of every normalization stage for one input text.
///
/// Serializes to the `preprocessing_steps` object of an analysis response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessingTrace {
    original: String,
    lowercase: String,
    no_special_chars: String,
    no_stopwords: String,
    lemmatized: String,
}

impl PreprocessingTrace {
    pub(crate) fn new(
        original: String,
        lowercase: String,
        no_special_chars: String,
        no_stopwords: String,
        lemmatized: String,
    ) -> Self {
        Self {
            original,
            lowercase,
            no_special_chars,
            no_stopwords,
            lemmatized,
        }
    }

    /// The input exactly as received.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn lowercase(&self) -> &str {
        &self.lowercase
    }

    pub fn no_special_chars(&self) -> &str {
        &self.no_special_chars
    }

    pub fn no_stopwords(&self) -> &str {
        &self.no_stopwords
    }

    pub fn lemmatized(&self) -> &str {
        &self.lemmatized
    }

    pub fn get(&self, stage: Stage) -> &str {
        match stage {
            Stage::Original => &self.original,
            Stage::Lowercase => &self.lowercase,
            Stage::NoSpecialChars => &self.no_special_chars,
            Stage::NoStopwords => &self.no_stopwords,
            Stage::Lemmatized => &self.lemmatized,
        }
    }

    /// Stages paired with their output, in execution order.
    pub fn stages(&self) -> impl Iterator<Item = (Stage, &str)> + '_ {
        Stage::ALL.into_iter().map(move |stage| (stage, self.get(stage)))
    }
}
