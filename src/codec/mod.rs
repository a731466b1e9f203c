//! Codec implementations
//!
//! Only uncompressed 16-bit PCM is decoded; the container layer hands the
//! raw `data` payload to [`pcm::PcmDecoder`].

pub mod frame;
pub mod pcm;

pub use frame::DecodedAudio;
pub use pcm::{extract_samples, PcmDecoder};
