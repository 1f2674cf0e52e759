//! Lexicon-backed case oracle.
//!
//! The lexicon is a read-only token table loaded once at component
//! construction and shared immutably afterwards. Format: one entry per
//! line, `token<TAB>case,case,...` with cases from
//! {`nom`, `gen`, `dat`, `acc`}. Lines starting with `#` and blank
//! lines are skipped.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, Result};

use crate::morphology::{CaseOracle, TokenNotFound};

/// Grammatical case of a noun reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
}

impl Case {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "nom" => Some(Case::Nominative),
            "gen" => Some(Case::Genitive),
            "dat" => Some(Case::Dative),
            "acc" => Some(Case::Accusative),
            _ => None,
        }
    }
}

/// Token → possible cases, loaded once per process.
pub struct MorphLexicon {
    entries: HashMap<String, Vec<Case>>,
}

impl MorphLexicon {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| anyhow!("failed to open lexicon {}: {}", path.display(), e))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut entries: HashMap<String, Vec<Case>> = HashMap::new();
        for (lineno, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (token, tags) = line
                .split_once('\t')
                .ok_or_else(|| anyhow!("lexicon line {} has no tab separator", lineno + 1))?;
            let cases: Vec<Case> = tags
                .split(',')
                .filter_map(|t| Case::from_tag(t.trim()))
                .collect();
            entries.entry(token.to_string()).or_default().extend(cases);
        }
        log::info!("loaded case lexicon with {} tokens", entries.len());
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<(String, Vec<Case>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CaseOracle for MorphLexicon {
    fn is_nominative(&self, token: &str) -> Result<bool, TokenNotFound> {
        match self.entries.get(token) {
            Some(cases) => Ok(cases.contains(&Case::Nominative)),
            None => Err(TokenNotFound),
        }
    }
}
