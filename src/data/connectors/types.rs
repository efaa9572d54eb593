use serde::{Deserialize, Serialize};
use std::path::Path;

/// How a MIDI file is cut into seed fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusMode {
    /// One fragment per bar of every track.
    #[default]
    Bars,
    /// One fragment per file: its busiest track, whole.
    MainTracks,
}

/// On-disk format of a corpus file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Json,
    Midi,
}

impl CorpusFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "mid" | "midi" => Some(Self::Midi),
            _ => None,
        }
    }
}
