//! Audio reduction filters
//!
//! Interleaved 16-bit samples are mixed down to one normalized channel
//! ([`mixdown`]) and then reduced to a fixed number of peak values
//! ([`waveform`]).

pub mod mixdown;
pub mod waveform;

pub use mixdown::{to_mono, I16_FULL_SCALE};
pub use waveform::{summarize, WaveformOptions, WaveformSummary};
