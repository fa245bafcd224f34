use crate::{lexicon::LexiconSet, TokenScore};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// How matched and unmatched tokens get their contribution values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContributionMode {
    /// Derived from a SHA-256 digest of the token and its polarity.
    /// Identical input always highlights identically.
    #[default]
    Deterministic,
    /// Fresh OS-seeded generator per call. Output varies between calls.
    Random,
    /// Generator seeded with a fixed value per call.
    Seeded(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    fn tag(&self) -> &'static [u8] {
        match self {
            Polarity::Positive => b"positive",
            Polarity::Negative => b"negative",
            Polarity::Neutral => b"neutral",
        }
    }

    // positive: (0.5, 1.0), negative: (-1.0, -0.5), neutral: (-0.15, 0.15)
    fn contribution(&self, fraction: f64) -> f64 {
        match self {
            Polarity::Positive => 0.5 + 0.5 * (1.0 - fraction),
            Polarity::Negative => -(0.5 + 0.5 * (1.0 - fraction)),
            Polarity::Neutral => 0.3 * (fraction - 0.5),
        }
    }
}

enum FractionSource {
    Digest,
    Rng(StdRng),
}

impl FractionSource {
    fn for_mode(mode: ContributionMode) -> Self {
        match mode {
            ContributionMode::Deterministic => FractionSource::Digest,
            ContributionMode::Random => FractionSource::Rng(StdRng::from_os_rng()),
            ContributionMode::Seeded(seed) => FractionSource::Rng(StdRng::seed_from_u64(seed)),
        }
    }

    fn next(&mut self, polarity: Polarity, token: &str) -> f64 {
        let bits = match self {
            FractionSource::Digest => {
                let mut hasher = Sha256::new();
                hasher.update(polarity.tag());
                hasher.update([0u8]);
                hasher.update(token.as_bytes());
                let digest = hasher.finalize();

                let mut prefix = [0u8; 8];
                prefix.copy_from_slice(&digest[..8]);
                u64::from_be_bytes(prefix)
            }
            FractionSource::Rng(rng) => rng.next_u64(),
        };
        open_unit(bits)
    }
}

/// Maps 64 random bits onto the open interval (0, 1) with 52-bit resolution.
/// The odd numerator keeps both endpoints out of reach.
fn open_unit(bits: u64) -> f64 {
    ((bits >> 12) | 1) as f64 / (1u64 << 52) as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct LexiconScore {
    /// Positive matches minus negative matches.
    pub aggregate: i64,
    pub token_scores: Vec<TokenScore>,
}

pub struct LexiconScorer {
    lexicons: Arc<LexiconSet>,
    mode: ContributionMode,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::with_lexicons(LexiconSet::shared_default(), ContributionMode::default())
    }

    pub fn with_mode(mode: ContributionMode) -> Self {
        Self::with_lexicons(LexiconSet::shared_default(), mode)
    }

    pub fn with_lexicons(lexicons: Arc<LexiconSet>, mode: ContributionMode) -> Self {
        Self { lexicons, mode }
    }

    pub fn mode(&self) -> ContributionMode {
        self.mode
    }

    /// Scores whitespace tokens of `text`, which should be the lowercase,
    /// unfiltered form of the input. A token matching both lexicons counts
    /// toward each and is highlighted as positive.
    pub fn score(&self, text: &str) -> LexiconScore {
        let mut source = FractionSource::for_mode(self.mode);
        let mut aggregate = 0i64;
        let mut token_scores = Vec::new();

        for token in text.split_whitespace() {
            let positive = self.lexicons.positive().matches(token);
            let negative = self.lexicons.negative().matches(token);

            if positive {
                aggregate += 1;
            }
            if negative {
                aggregate -= 1;
            }

            let polarity = if positive {
                Polarity::Positive
            } else if negative {
                Polarity::Negative
            } else {
                Polarity::Neutral
            };

            let fraction = source.next(polarity, token);
            token_scores.push(TokenScore {
                token: token.to_string(),
                contribution: polarity.contribution(fraction),
            });
        }

        LexiconScore {
            aggregate,
            token_scores,
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}
