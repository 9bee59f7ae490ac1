//! Batch driver: enumerate input files, extract clips, summarize results.
//!
//! Files are processed sequentially and independently; a failure on one file
//! is recorded in the report and never aborts the rest of the batch.

mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::audio::decode_mono_at_rate;
use crate::clip::{normalize_peak_in_place, select_loudest_window};
use crate::config::ExtractConfig;

/// Supported input extensions (lowercase, without dots).
pub const SUPPORTED_AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "flac"];

/// Return true if the path has a supported audio extension.
pub fn is_supported_audio(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    SUPPORTED_AUDIO_EXTENSIONS
        .iter()
        .any(|supported| ext.eq_ignore_ascii_case(supported))
}

/// Errors that stop a batch before any file is processed.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Input path is not a directory: {0}")]
    InvalidInputDir(PathBuf),
    #[error("Failed to read {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-file errors; caught at the file boundary by the driver.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Decode failed for {path}: {detail}")]
    Decode { path: PathBuf, detail: String },
    #[error("Failed to write {path}: {detail}")]
    Write { path: PathBuf, detail: String },
}

/// One failed file in a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    /// Input file that failed.
    pub path: PathBuf,
    /// Human-readable cause.
    pub error: String,
}

/// Immutable summary of a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Number of candidate files found in the input directory.
    pub total_files: usize,
    /// Output clips written, in processing order.
    pub outputs: Vec<PathBuf>,
    /// Files that failed, with their causes.
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    /// Count of files that produced an output clip.
    pub fn succeeded(&self) -> usize {
        self.outputs.len()
    }

    /// Count of files that failed.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// List supported audio files directly inside `dir`, sorted by file name.
pub fn list_audio_files(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = fs::read_dir(dir).map_err(|source| BatchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_audio(path))
        .collect();
    files.sort();
    Ok(files)
}

/// Output path for one input: stem + suffix + `.wav` inside the output dir.
pub fn output_path_for(input: &Path, config: &ExtractConfig) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("clip");
    config
        .output_dir
        .join(format!("{stem}{}.wav", config.output_suffix))
}

/// Extract, normalize, and write the loudest clip of one file.
pub fn process_file(path: &Path, config: &ExtractConfig) -> Result<PathBuf, ProcessError> {
    let mono = decode_mono_at_rate(path, config.sample_rate).map_err(|detail| {
        ProcessError::Decode {
            path: path.to_path_buf(),
            detail,
        }
    })?;
    let mut clip = select_loudest_window(&mono, config.target_samples());
    normalize_peak_in_place(&mut clip);
    let out_path = output_path_for(path, config);
    writer::write_mono_wav(&out_path, &clip, config.sample_rate).map_err(|detail| {
        ProcessError::Write {
            path: out_path.clone(),
            detail,
        }
    })?;
    Ok(out_path)
}

/// Process every supported file in the input directory.
///
/// Returns the aggregated report; per-file failures are logged and folded
/// into it rather than propagated.
pub fn run_batch(config: &ExtractConfig) -> Result<BatchReport, BatchError> {
    if !config.input_dir.is_dir() {
        return Err(BatchError::InvalidInputDir(config.input_dir.clone()));
    }
    fs::create_dir_all(&config.output_dir).map_err(|source| BatchError::CreateOutputDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let files = list_audio_files(&config.input_dir)?;
    let total = files.len();
    info!(
        "Found {total} audio files in {}; extracting {:.2}s clips at {} Hz",
        config.input_dir.display(),
        config.clip_seconds,
        config.sample_rate
    );

    let report = files.iter().enumerate().fold(
        BatchReport {
            total_files: total,
            outputs: Vec::new(),
            failures: Vec::new(),
        },
        |mut report, (index, path)| {
            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("<unnamed>");
            match process_file(path, config) {
                Ok(out_path) => {
                    info!("[{}/{total}] {name}: wrote {}", index + 1, out_path.display());
                    report.outputs.push(out_path);
                }
                Err(err) => {
                    warn!("[{}/{total}] {name}: {err}", index + 1);
                    report.failures.push(FileFailure {
                        path: path.clone(),
                        error: err.to_string(),
                    });
                }
            }
            report
        },
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn extension_filter_is_case_insensitive_and_fixed() {
        assert!(is_supported_audio(Path::new("a.mp3")));
        assert!(is_supported_audio(Path::new("b.WAV")));
        assert!(is_supported_audio(Path::new("c.Flac")));
        assert!(!is_supported_audio(Path::new("d.ogg")));
        assert!(!is_supported_audio(Path::new("noext")));
    }

    #[test]
    fn listing_filters_and_sorts_by_name() {
        let dir = tempdir().unwrap();
        for name in ["b.wav", "a.MP3", "notes.txt", "c.flac"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.wav")).unwrap();

        let files = list_audio_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.MP3", "b.wav", "c.flac"]);
    }

    #[test]
    fn output_name_strips_extension_and_appends_suffix() {
        let config = ExtractConfig {
            output_dir: PathBuf::from("/out"),
            ..ExtractConfig::default()
        };
        let out = output_path_for(Path::new("/in/kick drum.mp3"), &config);
        assert_eq!(out, PathBuf::from("/out/kick drum_processed.wav"));
    }

    #[test]
    fn missing_input_dir_is_a_batch_error() {
        let dir = tempdir().unwrap();
        let config = ExtractConfig {
            input_dir: dir.path().join("nope"),
            output_dir: dir.path().join("out"),
            ..ExtractConfig::default()
        };
        assert!(matches!(
            run_batch(&config),
            Err(BatchError::InvalidInputDir(_))
        ));
    }
}
