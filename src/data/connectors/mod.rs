mod json;
mod midi;
mod types;
mod validator;

pub use json::JsonConnector;
pub use midi::MidiConnector;
pub use types::{CorpusFormat, CorpusMode};
pub use validator::{DataValidator, LengthWindow};

use crate::config::CorpusConfig;
use crate::error::{MelodevoError, Result};
use crate::music::Phrase;
use std::path::{Path, PathBuf};

/// Load the seed population described by the corpus config: read every
/// fragment, keep those inside the note-count window, and require at least
/// one survivor.
pub fn load_corpus(config: &CorpusConfig) -> Result<Vec<Phrase>> {
    let phrases = load_path(&config.path, config.mode)?;
    let total = phrases.len();

    let window = LengthWindow::new(config.min_notes, config.max_notes);
    let phrases = DataValidator::filter_by_length(phrases, window);
    DataValidator::validate_non_empty(&phrases)?;

    log::info!(
        "Loaded {} seed fragments ({} read) from {}",
        phrases.len(),
        total,
        config.path.display()
    );
    Ok(phrases)
}

/// Read a single corpus file, or every JSON/MIDI file of a directory in
/// file-name order. Unreadable files inside a directory are skipped.
pub fn load_path(path: &Path, mode: CorpusMode) -> Result<Vec<Phrase>> {
    if path.is_dir() {
        let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|file| file.is_file() && CorpusFormat::from_path(file).is_some())
            .collect();
        files.sort();

        let mut phrases = Vec::new();
        for file in files {
            match load_file(&file, mode) {
                Ok(mut loaded) => phrases.append(&mut loaded),
                Err(e) => log::warn!("Skipping {}: {}", file.display(), e),
            }
        }
        return Ok(phrases);
    }

    load_file(path, mode)
}

fn load_file(path: &Path, mode: CorpusMode) -> Result<Vec<Phrase>> {
    match CorpusFormat::from_path(path) {
        Some(CorpusFormat::Json) => JsonConnector::load(path),
        Some(CorpusFormat::Midi) => MidiConnector::load(path, mode),
        None => Err(MelodevoError::Corpus(format!(
            "Unsupported corpus file: {}",
            path.display()
        ))),
    }
}
