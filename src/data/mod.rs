pub mod connectors;
pub mod results;

pub use connectors::{load_corpus, CorpusMode, JsonConnector, LengthWindow, MidiConnector};
pub use results::ResultWriter;
