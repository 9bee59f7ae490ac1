//! Run configuration for clip extraction.
//!
//! The canonical rate and duration are fixed for a whole run; every input is
//! resampled to the canonical rate before windowing so window lengths stay
//! comparable across files.

use std::path::PathBuf;

/// Canonical sample rate inputs are resampled to, in Hz.
///
/// Matches the expected input rate of the downstream audio-classification
/// model family.
pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;

/// Canonical clip duration in seconds.
pub const DEFAULT_CLIP_SECONDS: f64 = 10.24;

/// Suffix appended to the input file stem when naming output clips.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_processed";

/// Settings for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Directory scanned for input audio files.
    pub input_dir: PathBuf,
    /// Directory output clips are written into; created if missing.
    pub output_dir: PathBuf,
    /// Canonical sample rate in Hz.
    pub sample_rate: u32,
    /// Canonical clip duration in seconds.
    pub clip_seconds: f64,
    /// Suffix appended to output file stems before the `.wav` extension.
    pub output_suffix: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::new(),
            output_dir: PathBuf::new(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            clip_seconds: DEFAULT_CLIP_SECONDS,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Fixed length in samples of every scored window and of the output clip.
    ///
    /// Computed in `f64` so the default 16000 Hz x 10.24 s lands on exactly
    /// 163_840 samples.
    pub fn target_samples(&self) -> usize {
        (self.sample_rate as f64 * self.clip_seconds).floor().max(0.0) as usize
    }
}
