use crate::error::{MelodevoError, Result};
use crate::music::Phrase;

/// Inclusive note-count window a seed fragment must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthWindow {
    pub min_notes: usize,
    pub max_notes: usize,
}

impl LengthWindow {
    pub fn new(min_notes: usize, max_notes: usize) -> Self {
        Self { min_notes, max_notes }
    }

    pub fn contains(&self, phrase: &Phrase) -> bool {
        (self.min_notes..=self.max_notes).contains(&phrase.len())
    }
}

impl Default for LengthWindow {
    fn default() -> Self {
        Self::new(5, 10)
    }
}

pub struct DataValidator;

impl DataValidator {
    /// Keep only fragments inside the window.
    pub fn filter_by_length(phrases: Vec<Phrase>, window: LengthWindow) -> Vec<Phrase> {
        let total = phrases.len();
        let kept: Vec<Phrase> = phrases.into_iter().filter(|p| window.contains(p)).collect();

        if kept.len() < total {
            log::debug!(
                "Dropped {} of {} fragments outside {}..={} notes",
                total - kept.len(),
                total,
                window.min_notes,
                window.max_notes
            );
        }
        kept
    }

    /// The engine needs at least one fragment to baseline against.
    pub fn validate_non_empty(phrases: &[Phrase]) -> Result<()> {
        if phrases.is_empty() {
            return Err(MelodevoError::Corpus(
                "No fragments left to seed the population".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase_of(len: usize) -> Phrase {
        Phrase::from_pitches(&vec![60; len], 0.125)
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = LengthWindow::default();
        assert!(!window.contains(&phrase_of(4)));
        assert!(window.contains(&phrase_of(5)));
        assert!(window.contains(&phrase_of(10)));
        assert!(!window.contains(&phrase_of(11)));
    }

    #[test]
    fn test_filter_by_length() {
        let phrases = vec![phrase_of(3), phrase_of(6), phrase_of(12), phrase_of(9)];
        let kept = DataValidator::filter_by_length(phrases, LengthWindow::default());

        let lengths: Vec<usize> = kept.iter().map(|p| p.len()).collect();
        assert_eq!(lengths, vec![6, 9]);
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(DataValidator::validate_non_empty(&[phrase_of(5)]).is_ok());
        assert!(matches!(
            DataValidator::validate_non_empty(&[]),
            Err(MelodevoError::Corpus(_))
        ));
    }
}
