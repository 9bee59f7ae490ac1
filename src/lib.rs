//! Library exports for reuse in benchmarks and tests.
/// Application directory helpers.
pub mod app_dirs;
/// Audio decoding, downmix, and resampling.
pub mod audio;
/// Batch driver and WAV output.
pub mod batch;
/// Loudest-window selection and peak normalization.
pub mod clip;
/// Run configuration.
pub mod config;
/// Logging setup.
pub mod logging;
