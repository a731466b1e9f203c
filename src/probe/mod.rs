//! Sample library probing
//!
//! Finds WAV files on disk and loads them into decoded audio plus a
//! waveform summary, one file at a time or as a batch.
//!
//! # Usage
//!
//! ```rust,no_run
//! use wavpeek_lib::filter::WaveformOptions;
//! use wavpeek_lib::probe::{discover, load_batch, CancelToken};
//!
//! let files = discover("samples/", true)?;
//! let report = load_batch(&files, 256, WaveformOptions::default(), &CancelToken::new());
//!
//! for failure in &report.failures {
//!     eprintln!("{}", failure.message);
//! }
//! # Ok::<(), wavpeek_lib::error::Error>(())
//! ```

pub mod batch;
pub mod discovery;

pub use batch::{load_batch, BatchReport, CancelToken, FileFailure};
pub use discovery::{discover, is_wav_path};

use crate::codec::DecodedAudio;
use crate::error::Result;
use crate::filter::{WaveformOptions, WaveformSummary};
use crate::format::decode_file;
use std::path::{Path, PathBuf};

/// A successfully loaded file
#[derive(Debug, Clone)]
pub struct LoadedFile {
    /// Path the file was read from
    pub path: PathBuf,
    /// Decoded format and samples
    pub audio: DecodedAudio,
    /// Peak summary of the mono mixdown
    pub waveform: WaveformSummary,
}

impl LoadedFile {
    /// File name without directories, for display
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Read, decode, and summarize one file
pub fn load_file<P: AsRef<Path>>(
    path: P,
    width: i32,
    options: WaveformOptions,
) -> Result<LoadedFile> {
    let path = path.as_ref();
    let audio = decode_file(path)?;
    let waveform = audio.waveform(width, options)?;

    Ok(LoadedFile {
        path: path.to_path_buf(),
        audio,
        waveform,
    })
}
