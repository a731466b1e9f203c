//! wavpeek - WAV decoding and waveform summaries
//!
//! wavpeek decodes 16-bit PCM RIFF/WAVE files held in memory and reduces
//! them to a fixed-width peak-amplitude summary suitable for drawing a
//! waveform, one value per display column.
//!
//! # Architecture
//!
//! wavpeek is organized into several key modules:
//!
//! - `format`: RIFF chunk walking and `fmt ` chunk parsing
//! - `codec`: PCM sample extraction and the decoded audio type
//! - `filter`: mono mixdown and peak bucketing
//! - `probe`: file discovery and batch loading
//!
//! # Example
//!
//! ```rust,no_run
//! use wavpeek_lib::filter::WaveformOptions;
//!
//! let audio = wavpeek_lib::format::decode_file("kick.wav")?;
//! let summary = audio.waveform(800, WaveformOptions::default())?;
//! println!("{} Hz, peak {:.3}", audio.format.sample_rate, summary.peak());
//! # Ok::<(), wavpeek_lib::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod filter;
pub mod format;
pub mod probe;

pub use codec::DecodedAudio;
pub use error::{Error, Result};
pub use filter::{WaveformOptions, WaveformSummary};
pub use format::{decode, decode_file, PcmFormat};

/// wavpeek version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Waveform width used when the caller does not pick one
pub const DEFAULT_WAVEFORM_WIDTH: i32 = 512;

/// Configuration for the wavpeek library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Maximum number of threads to use for batch loading
    pub max_threads: Option<usize>,
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize the wavpeek library with the given configuration
///
/// Sizes the global rayon pool and installs a `tracing` subscriber when
/// logging was requested. Call at most once per process.
pub fn init(config: Config) -> Result<()> {
    if let Some(threads) = config.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| Error::Init(format!("Failed to initialize thread pool: {}", e)))?;
    }

    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(level)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| Error::Init(format!("Failed to install logger: {}", e)))?;
    }

    Ok(())
}
