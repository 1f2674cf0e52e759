//! Morphological case oracles.
//!
//! This module is organized into the following submodules:
//! - `lexicon`: the primary lexicon-backed oracle (can miss)
//! - `suffix`: the total suffix-heuristic fallback oracle
//!
//! The [`CaseResolver`] composes the two: a miss on the primary oracle
//! is a normal control-flow signal answered by the fallback, and a
//! failed lexicon load degrades the resolver to "case filtering
//! disabled" instead of failing extraction.

pub mod lexicon;
pub mod suffix;

pub use lexicon::MorphLexicon;
pub use suffix::SuffixCaseOracle;

use std::path::Path;
use std::sync::{Arc, OnceLock};

use thiserror::Error;

/// Raised by a non-total oracle when a token is absent from its
/// lexicon. Not an error condition: callers fall back to a total oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("token not found in lexicon")]
pub struct TokenNotFound;

/// Answers whether a token can be read as nominative case.
pub trait CaseOracle {
    fn is_nominative(&self, token: &str) -> Result<bool, TokenNotFound>;
}

/// Primary-plus-fallback case lookup, shared read-only across sentences.
pub struct CaseResolver {
    lexicon: Option<MorphLexicon>,
    fallback: SuffixCaseOracle,
}

impl CaseResolver {
    pub fn new(lexicon: Option<MorphLexicon>) -> Self {
        Self {
            lexicon,
            fallback: SuffixCaseOracle,
        }
    }

    /// Load the lexicon from `path`. A load failure is non-fatal: it is
    /// logged and the resolver runs with case filtering disabled.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match MorphLexicon::load(path) {
            Ok(lexicon) => Self::new(Some(lexicon)),
            Err(e) => {
                log::warn!(
                    "could not load case lexicon {}: {}; case filtering disabled",
                    path.display(),
                    e
                );
                Self::new(None)
            }
        }
    }

    /// A resolver without a lexicon; every token counts as nominative.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    /// True when a lexicon is loaded and case filtering is active.
    pub fn enabled(&self) -> bool {
        self.lexicon.is_some()
    }

    /// Resolve a token's nominative status. Lexicon misses are answered
    /// by the total fallback oracle; with no lexicon loaded the check
    /// is skipped entirely.
    pub fn is_nominative(&self, token: &str) -> bool {
        match &self.lexicon {
            Some(lexicon) => match lexicon.is_nominative(token) {
                Ok(nominative) => nominative,
                Err(TokenNotFound) => self
                    .fallback
                    .is_nominative(token)
                    .unwrap_or(true),
            },
            None => true,
        }
    }
}

/// Process-wide resolver, loaded once from the path in the
/// `DEPRIE_LEXICON` environment variable and shared by reference.
pub fn default_resolver() -> Arc<CaseResolver> {
    static RESOLVER: OnceLock<Arc<CaseResolver>> = OnceLock::new();
    RESOLVER
        .get_or_init(|| match std::env::var("DEPRIE_LEXICON") {
            Ok(path) => Arc::new(CaseResolver::load(path)),
            Err(_) => {
                log::info!("DEPRIE_LEXICON not set; case filtering disabled");
                Arc::new(CaseResolver::disabled())
            }
        })
        .clone()
}
