// Seed fragments from Standard MIDI Files.
//
// Every non-drum note of a track is paired from its note-on to the matching
// note-off (a note-on with velocity 0 counts as a note-off). Tick times are
// converted to bars using the file's resolution and its first time
// signature, 4/4 when there is none.
//
// In `Bars` mode each track is cut at bar lines and every non-empty bar
// becomes a phrase; the last note of a bar steps to the bar line. In
// `MainTracks` mode the track with the most notes becomes one phrase and its
// last note steps by its own duration.

use super::types::CorpusMode;
use crate::error::{MelodevoError, Result};
use crate::music::{Note, Phrase};
use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use std::collections::{HashMap, VecDeque};
use std::path::Path;

/// General MIDI percussion channel (channel 10, zero-based 9).
const DRUM_CHANNEL: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimedNote {
    pitch: i32,
    start: u64,
    end: u64,
}

pub struct MidiConnector;

impl MidiConnector {
    pub fn load<P: AsRef<Path>>(path: P, mode: CorpusMode) -> Result<Vec<Phrase>> {
        let bytes = std::fs::read(path)?;
        Self::load_bytes(&bytes, mode)
    }

    pub fn load_bytes(bytes: &[u8], mode: CorpusMode) -> Result<Vec<Phrase>> {
        let smf = Smf::parse(bytes)?;

        let ticks_per_quarter = match smf.header.timing {
            Timing::Metrical(ticks) => u64::from(ticks.as_int()),
            Timing::Timecode(..) => {
                return Err(MelodevoError::Corpus(
                    "SMPTE timecode timing is not supported".to_string(),
                ))
            }
        };
        if ticks_per_quarter == 0 {
            return Err(MelodevoError::Corpus("MIDI resolution is zero".to_string()));
        }

        let ticks_per_bar = ticks_per_bar(&smf.tracks, ticks_per_quarter);
        let tracks: Vec<Vec<TimedNote>> = smf
            .tracks
            .iter()
            .map(|track| extract_notes(track))
            .filter(|notes| !notes.is_empty())
            .collect();

        let phrases = match mode {
            CorpusMode::Bars => tracks
                .iter()
                .flat_map(|notes| split_into_bars(notes, ticks_per_bar))
                .collect(),
            // rev() so the first of equally busy tracks wins
            CorpusMode::MainTracks => tracks
                .iter()
                .rev()
                .max_by_key(|notes| notes.len())
                .map(|notes| vec![to_phrase(notes, ticks_per_bar, None)])
                .unwrap_or_default(),
        };

        Ok(phrases)
    }
}

fn ticks_per_bar(tracks: &[Vec<TrackEvent<'_>>], ticks_per_quarter: u64) -> u64 {
    let (numerator, denominator_pow) = tracks
        .iter()
        .flatten()
        .find_map(|event| match event.kind {
            TrackEventKind::Meta(MetaMessage::TimeSignature(num, den_pow, _, _)) => Some((num, den_pow)),
            _ => None,
        })
        .unwrap_or((4, 2));

    // numerator beats of 1/2^den_pow notes, i.e. numerator * 4 / 2^den_pow quarters
    ((ticks_per_quarter * u64::from(numerator) * 4) >> denominator_pow.min(16)).max(1)
}

fn extract_notes(track: &[TrackEvent<'_>]) -> Vec<TimedNote> {
    let mut tick: u64 = 0;
    let mut sounding: HashMap<(u8, u8), VecDeque<u64>> = HashMap::new();
    let mut notes = Vec::new();

    for event in track {
        tick += u64::from(event.delta.as_int());

        let TrackEventKind::Midi { channel, message } = event.kind else {
            continue;
        };
        let channel = channel.as_int();
        if channel == DRUM_CHANNEL {
            continue;
        }

        match message {
            MidiMessage::NoteOn { key, vel } if vel.as_int() > 0 => {
                sounding
                    .entry((channel, key.as_int()))
                    .or_default()
                    .push_back(tick);
            }
            MidiMessage::NoteOn { key, .. } | MidiMessage::NoteOff { key, .. } => {
                let start = sounding
                    .get_mut(&(channel, key.as_int()))
                    .and_then(|starts| starts.pop_front());
                if let Some(start) = start {
                    notes.push(TimedNote {
                        pitch: i32::from(key.as_int()),
                        start,
                        end: tick,
                    });
                }
            }
            _ => {}
        }
    }

    // Notes never released end with the track
    for ((_, key), starts) in sounding {
        for start in starts {
            notes.push(TimedNote {
                pitch: i32::from(key),
                start,
                end: tick,
            });
        }
    }

    notes.sort_by_key(|note| (note.start, note.pitch));
    notes
}

/// `span_end` is where the last note steps to; `None` means its own end.
fn to_phrase(notes: &[TimedNote], ticks_per_bar: u64, span_end: Option<u64>) -> Phrase {
    let bar = ticks_per_bar as f64;

    let phrase_notes = notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            let next_onset = match notes.get(i + 1) {
                Some(next) => next.start,
                None => span_end.unwrap_or(note.end),
            };
            let step = next_onset.saturating_sub(note.start) as f64 / bar;
            let duration = note.end.saturating_sub(note.start) as f64 / bar;
            Note::new(note.pitch, duration, step)
        })
        .collect();

    Phrase::new(phrase_notes)
}

fn split_into_bars(notes: &[TimedNote], ticks_per_bar: u64) -> Vec<Phrase> {
    let mut phrases = Vec::new();
    let mut begin = 0;

    while begin < notes.len() {
        let bar_index = notes[begin].start / ticks_per_bar;
        let end = notes[begin..]
            .iter()
            .position(|note| note.start / ticks_per_bar != bar_index)
            .map_or(notes.len(), |offset| begin + offset);

        let bar_end = (bar_index + 1) * ticks_per_bar;
        phrases.push(to_phrase(&notes[begin..end], ticks_per_bar, Some(bar_end)));
        begin = end;
    }

    phrases
}
