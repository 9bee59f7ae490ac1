//! WAV encoding for extracted clips.
//!
//! Clips are written through a temp file in the destination directory and
//! moved into place, so a failed write never leaves a partial output behind.

use std::io::BufWriter;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use tempfile::NamedTempFile;

/// Write samples as a mono 32-bit float WAV at `sample_rate`.
pub(crate) fn write_mono_wav(
    path: &Path,
    samples: &[f32],
    sample_rate: u32,
) -> Result<(), String> {
    let dir = path
        .parent()
        .ok_or_else(|| format!("No parent directory for {}", path.display()))?;
    let temp = NamedTempFile::new_in(dir)
        .map_err(|err| format!("Failed to create temp file in {}: {err}", dir.display()))?;

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let buf_writer = BufWriter::with_capacity(1024 * 1024, temp.as_file());
    let mut writer =
        WavWriter::new(buf_writer, spec).map_err(|err| format!("Failed to start wav: {err}"))?;
    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|err| format!("Failed to write sample: {err}"))?;
    }
    writer
        .finalize()
        .map_err(|err| format!("Failed to finalize wav: {err}"))?;

    temp.persist(path)
        .map_err(|err| format!("Failed to move clip to {}: {err}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn written_wav_round_trips_through_hound() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        let samples = vec![0.0_f32, 0.5, -1.0, 1.0];
        write_mono_wav(&path, &samples, 16_000).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 16_000);
        assert_eq!(spec.sample_format, SampleFormat::Float);
        let read: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn no_stray_temp_file_remains_after_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        write_mono_wav(&path, &[0.1, 0.2], 16_000).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path(), path);
    }

    #[test]
    fn missing_destination_directory_fails_cleanly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("clip.wav");
        assert!(write_mono_wav(&path, &[0.1], 16_000).is_err());
    }
}
