use super::traits::ConfigSection;
use crate::data::connectors::CorpusMode;
use crate::error::MelodevoError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// A JSON phrase file, a MIDI file, or a directory of either.
    pub path: PathBuf,
    pub mode: CorpusMode,
    /// Fragments with fewer notes are dropped.
    pub min_notes: usize,
    /// Fragments with more notes are dropped.
    pub max_notes: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/corpus"),
            mode: CorpusMode::Bars,
            min_notes: 5,
            max_notes: 10,
        }
    }
}

impl ConfigSection for CorpusConfig {
    fn section_name() -> &'static str {
        "corpus"
    }

    fn validate(&self) -> Result<(), MelodevoError> {
        if self.min_notes > self.max_notes {
            return Err(MelodevoError::Configuration(format!(
                "corpus.min_notes ({}) exceeds corpus.max_notes ({})",
                self.min_notes, self.max_notes
            )));
        }
        Ok(())
    }
}
