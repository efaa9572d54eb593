use thiserror::Error;

#[derive(Error, Debug)]
pub enum MelodevoError {
    #[error("Seed population is empty")]
    EmptySeedPopulation,

    #[error("Seed population contains no melodic intervals")]
    NoIntervals,

    #[error("Population is empty at generation {generation}")]
    EmptyPopulation { generation: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Tonality error: {0}")]
    Tonality(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("MIDI error: {0}")]
    Midi(#[from] midly::Error),
}

pub type Result<T> = std::result::Result<T, MelodevoError>;
