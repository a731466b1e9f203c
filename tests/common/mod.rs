//! Common test utilities for wavpeek integration tests
//!
//! Builders for RIFF/WAVE buffers, including malformed ones.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// Chunk Builders
// ============================================================================

/// Raw chunk with an arbitrary id and payload
pub fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + payload.len());
    out.extend_from_slice(id);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    out
}

/// `fmt ` chunk with full control over every field
pub fn fmt_chunk_with(format_tag: u16, channels: u16, sample_rate: u32, bits: u16) -> Vec<u8> {
    let block_align = channels * (bits / 8);
    // Not read back by the decoder
    let byte_rate = sample_rate.wrapping_mul(u32::from(block_align));

    let mut payload = Vec::with_capacity(16);
    payload.extend_from_slice(&format_tag.to_le_bytes());
    payload.extend_from_slice(&channels.to_le_bytes());
    payload.extend_from_slice(&sample_rate.to_le_bytes());
    payload.extend_from_slice(&byte_rate.to_le_bytes());
    payload.extend_from_slice(&block_align.to_le_bytes());
    payload.extend_from_slice(&bits.to_le_bytes());
    chunk(b"fmt ", &payload)
}

/// 16-bit PCM `fmt ` chunk
pub fn fmt_chunk(channels: u16, sample_rate: u32) -> Vec<u8> {
    fmt_chunk_with(1, channels, sample_rate, 16)
}

/// `data` chunk holding little-endian i16 samples
pub fn data_chunk(samples: &[i16]) -> Vec<u8> {
    let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    chunk(b"data", &bytes)
}

/// Wrap chunks in a RIFF/WAVE envelope
pub fn riff(chunks: &[Vec<u8>]) -> Vec<u8> {
    let body = chunks.concat();
    let mut out = Vec::with_capacity(12 + body.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(4 + body.len() as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(&body);
    out
}

// ============================================================================
// Whole Files
// ============================================================================

/// Canonical 16-bit PCM WAV buffer
pub fn pcm_wav(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    riff(&[fmt_chunk(channels, sample_rate), data_chunk(samples)])
}

/// One second of a 440 Hz sine at half scale, mono
pub fn sine_wav(sample_rate: u32) -> Vec<u8> {
    let samples: Vec<i16> = (0..sample_rate)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            ((2.0 * std::f64::consts::PI * 440.0 * t).sin() * 0.5 * i16::MAX as f64) as i16
        })
        .collect();
    pcm_wav(1, sample_rate, &samples)
}

/// Write bytes to a temporary `.wav` file
pub fn temp_wav(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".wav").expect("Failed to create temp file");
    file.write_all(bytes).expect("Failed to write wav");
    file.flush().expect("Failed to flush");
    file
}

/// Assert two float slices match within `eps`
pub fn assert_close(actual: &[f32], expected: &[f32], eps: f32) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() <= eps, "index {}: {} != {}", i, a, e);
    }
}
