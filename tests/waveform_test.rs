//! Waveform summary integration tests
//!
//! End-to-end: WAV bytes in, peak summary out.

#[path = "common/mod.rs"]
mod common;

use common::*;
use wavpeek_lib::filter::{summarize, to_mono, WaveformOptions};
use wavpeek_lib::{decode, WaveformSummary};

fn summary_of(buf: &[u8], width: i32) -> WaveformSummary {
    decode(buf)
        .expect("Should decode")
        .waveform(width, WaveformOptions::default())
        .expect("Should summarize")
}

// ============================================================================
// Width Handling
// ============================================================================

#[test]
fn test_width_matches_request() {
    let buf = sine_wav(8000);
    for width in [1, 2, 7, 100, 799, 8000, 12000] {
        assert_eq!(summary_of(&buf, width).width(), width as usize);
    }
}

#[test]
fn test_non_positive_width_gives_one_bucket() {
    let buf = pcm_wav(1, 8000, &[1000, -2000, 3000]);
    for width in [0, -1, -1920] {
        let summary = summary_of(&buf, width);
        assert_eq!(summary.width(), 1);
        assert_close(&summary.amplitudes, &[3000.0 / 32767.0], 1e-7);
    }
}

#[test]
fn test_empty_data_chunk_gives_silence() {
    let buf = pcm_wav(2, 44100, &[]);
    assert_eq!(summary_of(&buf, 4).amplitudes, vec![0.0; 4]);
}

// ============================================================================
// Amplitudes
// ============================================================================

#[test]
fn test_all_zero_payload() {
    let buf = pcm_wav(2, 44100, &[0; 4410]);
    let summary = summary_of(&buf, 64);
    assert!(summary.amplitudes.iter().all(|&a| a == 0.0));
}

#[test]
fn test_constant_full_scale_mono() {
    let buf = pcm_wav(1, 44100, &[32767; 1000]);
    let summary = summary_of(&buf, 25);
    assert_close(&summary.amplitudes, &[1.0; 25], 1e-6);
}

#[test]
fn test_stereo_pair_cancels() {
    let frames: Vec<i16> = std::iter::repeat([10000i16, -10000])
        .take(64)
        .flatten()
        .collect();
    let buf = pcm_wav(2, 44100, &frames);
    let summary = summary_of(&buf, 8);
    assert_eq!(summary.amplitudes, vec![0.0; 8]);
}

#[test]
fn test_full_scale_negative_clamped() {
    let buf = pcm_wav(1, 44100, &[100, -32768, 0, 32767]);
    let audio = decode(&buf).unwrap();

    let clamped = audio.waveform(1, WaveformOptions::default()).unwrap();
    assert_eq!(clamped.amplitudes, vec![1.0]);

    let raw = audio.waveform(1, WaveformOptions { clamp: false }).unwrap();
    assert_close(&raw.amplitudes, &[32768.0 / 32767.0], 1e-6);
}

#[test]
fn test_amplitudes_in_unit_range() {
    let samples: Vec<i16> = (0..5000).map(|i| ((i * 7919) % 65536 - 32768) as i16).collect();
    let summary = summary_of(&pcm_wav(1, 44100, &samples), 333);
    assert!(summary.amplitudes.iter().all(|&a| (0.0..=1.0).contains(&a)));
}

#[test]
fn test_reference_bucket_scenario() {
    let mono = [0.1, 0.9, 0.3, 0.2, 0.05, -0.95, 0.0, 0.4];
    let summary = summarize(&mono, 4, WaveformOptions::default());
    assert_eq!(summary.amplitudes, vec![0.9, 0.3, 0.95, 0.4]);
}

#[test]
fn test_stereo_pipeline_matches_manual_mixdown() {
    let frames = [1000i16, 3000, -8000, -2000, 32767, 32767, 0, -32768];
    let audio = decode(&pcm_wav(2, 44100, &frames)).unwrap();

    let mono = to_mono(&frames, 2).unwrap();
    assert_close(
        &mono,
        &[2000.0 / 32767.0, -5000.0 / 32767.0, 1.0, -16384.0 / 32767.0],
        1e-7,
    );

    let summary = audio.waveform(2, WaveformOptions::default()).unwrap();
    assert_close(&summary.amplitudes, &[5000.0 / 32767.0, 1.0], 1e-7);
}

#[test]
fn test_bar_geometry() {
    let summary = summary_of(&pcm_wav(1, 8000, &[0, 32767, 16384, 0]), 2);
    let (top, bottom) = summary.bar_extent(0, 200.0).unwrap();
    assert!((top - 0.0).abs() < 1e-3);
    assert!((bottom - 200.0).abs() < 1e-3);
}
