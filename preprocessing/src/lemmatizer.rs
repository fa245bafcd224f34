use crate::Result;

/// Reduces stopword-filtered tokens to their lemmas.
///
/// Implementations must keep token order and must never emit more tokens
/// than they receive. `TextProcessor` rejects output that grows the token
/// count.
pub trait Lemmatizer: Send + Sync {
    fn name(&self) -> &str;

    fn lemmatize(&self, tokens: &[&str]) -> Result<Vec<String>>;
}

/// Pass-through lemmatizer: the lemmatized stage equals the stopword stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn name(&self) -> &str {
        "identity"
    }

    fn lemmatize(&self, tokens: &[&str]) -> Result<Vec<String>> {
        Ok(tokens.iter().map(|token| token.to_string()).collect())
    }
}
