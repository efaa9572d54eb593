use crate::error::Result;
use crate::music::Phrase;
use std::path::Path;

/// Seed fragments stored as a JSON array of phrases:
/// `[{"notes": [{"pitch": 60, "duration": 0.25, "step": 0.25}, ...]}, ...]`
pub struct JsonConnector;

impl JsonConnector {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Phrase>> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Vec<Phrase>> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn save<P: AsRef<Path>>(path: P, phrases: &[Phrase]) -> Result<()> {
        let json = serde_json::to_string_pretty(phrases)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
