//! Total fallback case oracle.

use crate::morphology::{CaseOracle, TokenNotFound};

/// Suffixes of strong declension forms that rule out a nominative
/// reading. Closed list; an approximation of a full morphological
/// analyzer, used only when the lexicon misses a token.
const NON_NOMINATIVE_SUFFIXES: [&str; 2] = ["es", "em"];

/// Minimum token length before a suffix is trusted; very short tokens
/// ("es", "dem") are function words, not declined nouns.
const MIN_TOKEN_LEN: usize = 5;

/// Suffix-heuristic oracle. Total: never misses, answering from the
/// token's ending alone.
pub struct SuffixCaseOracle;

impl SuffixCaseOracle {
    fn judge(&self, token: &str) -> bool {
        if token.chars().count() < MIN_TOKEN_LEN {
            return true;
        }
        !NON_NOMINATIVE_SUFFIXES
            .iter()
            .any(|s| token.ends_with(s))
    }
}

impl CaseOracle for SuffixCaseOracle {
    fn is_nominative(&self, token: &str) -> Result<bool, TokenNotFound> {
        Ok(self.judge(token))
    }
}
