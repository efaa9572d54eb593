use crate::error::MelodevoError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), MelodevoError>;
}

/// Checks that a rate lies in `[0, 1]`; NaN is rejected too.
pub(crate) fn validate_rate(section: &str, name: &str, value: f64) -> Result<(), MelodevoError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(MelodevoError::Configuration(format!(
            "{}.{} must be between 0 and 1, got {}",
            section, name, value
        )));
    }
    Ok(())
}
