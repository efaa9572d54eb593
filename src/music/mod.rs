pub mod interval;
pub mod phrase;
pub mod pitch;
pub mod tonality;

pub use interval::Interval;
pub use phrase::{Note, Phrase};
pub use pitch::{parse_pitch_class, pitch_class, pitch_name};
pub use tonality::{ScaleType, Tonality};
