//! wavpeek CLI - WAV inspection and waveform summaries
//!
//! A command-line front end over `wavpeek_lib`

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use wavpeek_lib::filter::{WaveformOptions, WaveformSummary};
use wavpeek_lib::probe::{self, CancelToken};
use wavpeek_lib::{init, Config, PcmFormat, DEFAULT_WAVEFORM_WIDTH};

#[derive(Parser)]
#[command(name = "wavpeek")]
#[command(about = "wavpeek - WAV decoding and waveform summaries", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Number of threads to use
    #[arg(short = 't', long)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show format information about a WAV file
    Info {
        /// Input file path
        input: PathBuf,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the peak waveform of a WAV file
    Waveform {
        /// Input file path
        input: PathBuf,

        /// Number of buckets (values below 1 are treated as 1)
        #[arg(short, long, default_value_t = DEFAULT_WAVEFORM_WIDTH, allow_negative_numbers = true)]
        width: i32,

        /// Keep peaks above 1.0 caused by full-scale negative samples
        #[arg(long)]
        no_clamp: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Decode every WAV file in a directory
    Scan {
        /// Directory to scan
        dir: PathBuf,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Number of buckets per waveform
        #[arg(short, long, default_value_t = DEFAULT_WAVEFORM_WIDTH, allow_negative_numbers = true)]
        width: i32,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct InfoOutput<'a> {
    file: String,
    format: &'a PcmFormat,
    block_align: u16,
    byte_rate: u64,
    samples: usize,
    frames: usize,
    duration_seconds: f64,
}

#[derive(Serialize)]
struct WaveformOutput<'a> {
    file: String,
    width: usize,
    peak: f32,
    #[serde(flatten)]
    waveform: &'a WaveformSummary,
}

#[derive(Serialize)]
struct ScanEntry<'a> {
    file: String,
    format: &'a PcmFormat,
    duration_seconds: f64,
    peak: f32,
}

#[derive(Serialize)]
struct ScanFailure<'a> {
    file: String,
    error: &'a str,
}

#[derive(Serialize)]
struct ScanOutput<'a> {
    dir: String,
    recursive: bool,
    loaded: Vec<ScanEntry<'a>>,
    failed: Vec<ScanFailure<'a>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config {
        max_threads: cli.threads,
        verbose: cli.verbose,
        debug: cli.debug,
    };

    init(config)?;

    info!("wavpeek v{}", wavpeek_lib::VERSION);

    match cli.command {
        Commands::Info { input, json } => {
            info!("Getting info for: {}", input.display());
            cmd_info(&input, json)?;
        }
        Commands::Waveform {
            input,
            width,
            no_clamp,
            json,
        } => {
            cmd_waveform(&input, width, no_clamp, json)?;
        }
        Commands::Scan {
            dir,
            recursive,
            width,
            json,
        } => {
            info!("Scanning {}", dir.display());
            cmd_scan(&dir, recursive, width, json)?;
        }
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> anyhow::Result<()> {
    let audio = wavpeek_lib::decode_file(input)
        .map_err(|e| anyhow::anyhow!("File '{}': {}", input.display(), e))?;

    let output = InfoOutput {
        file: input.display().to_string(),
        format: &audio.format,
        block_align: audio.format.block_align(),
        byte_rate: audio.format.byte_rate(),
        samples: audio.samples.len(),
        frames: audio.frame_count(),
        duration_seconds: audio.duration_seconds(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("File: {}", output.file);
        println!("  Format: {}", audio.format);
        println!("  Sample Rate: {} Hz", audio.format.sample_rate);
        println!("  Channels: {}", audio.format.channels);
        println!("  Bits Per Sample: {}", audio.format.bits_per_sample);
        println!("  Block Align: {}", output.block_align);
        println!("  Byte Rate: {}", output.byte_rate);
        println!("  Samples: {}", output.samples);
        println!("  Frames: {}", output.frames);
        println!("  Duration: {:.3}s", output.duration_seconds);
    }

    Ok(())
}

fn cmd_waveform(input: &Path, width: i32, no_clamp: bool, json: bool) -> anyhow::Result<()> {
    let options = WaveformOptions { clamp: !no_clamp };
    let loaded = probe::load_file(input, width, options)
        .map_err(|e| anyhow::anyhow!("File '{}': {}", input.display(), e))?;

    if json {
        let output = WaveformOutput {
            file: input.display().to_string(),
            width: loaded.waveform.width(),
            peak: loaded.waveform.peak(),
            waveform: &loaded.waveform,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for amplitude in &loaded.waveform.amplitudes {
            println!("{:.6}", amplitude);
        }
    }

    Ok(())
}

fn cmd_scan(dir: &Path, recursive: bool, width: i32, json: bool) -> anyhow::Result<()> {
    let files = probe::discover(dir, recursive)?;
    let report = probe::load_batch(&files, width, WaveformOptions::default(), &CancelToken::new());

    if json {
        let output = ScanOutput {
            dir: dir.display().to_string(),
            recursive,
            loaded: report
                .loaded
                .iter()
                .map(|f| ScanEntry {
                    file: f.path.display().to_string(),
                    format: &f.audio.format,
                    duration_seconds: f.audio.duration_seconds(),
                    peak: f.waveform.peak(),
                })
                .collect(),
            failed: report
                .failures
                .iter()
                .map(|f| ScanFailure {
                    file: f.path.display().to_string(),
                    error: &f.message,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Found {} WAV file(s) in {}", files.len(), dir.display());
    println!();

    for loaded in &report.loaded {
        println!(
            "{}  {}  {:.2}s  peak {:.3}",
            loaded.file_name(),
            loaded.audio.format,
            loaded.audio.duration_seconds(),
            loaded.waveform.peak()
        );
    }

    for failure in &report.failures {
        let name = failure
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("[Failed] {}", name);
        eprintln!("Warning: {}", failure.message);
    }

    Ok(())
}
