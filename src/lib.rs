//! Evolutionary search over short melodic fragments.
//!
//! A seed corpus of phrases fixes a baseline dissonance profile; each
//! generation then selects, recombines and mutates phrases, scoring them by
//! how far they drift from that profile and from the configured key.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod music;

pub use error::{MelodevoError, Result};
