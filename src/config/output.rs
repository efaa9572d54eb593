use super::traits::ConfigSection;
use crate::error::MelodevoError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub results_path: PathBuf,
    /// Append to an existing results file instead of truncating it.
    pub append: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from("result.txt"),
            append: false,
        }
    }
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<(), MelodevoError> {
        if self.results_path.as_os_str().is_empty() {
            return Err(MelodevoError::Configuration(
                "output.results_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
