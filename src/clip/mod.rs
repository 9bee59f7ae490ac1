//! Loudest-window selection.
//!
//! The selector partitions a mono sequence into disjoint windows of a fixed
//! sample count, scores each window by RMS energy, and returns the most
//! energetic one. Inputs shorter than one window are zero-padded so the
//! output length is always exactly the target sample count.

mod normalize;

pub use normalize::normalize_peak_in_place;

/// Select the most energetic fixed-length window of `samples`.
///
/// Windows are contiguous and non-overlapping; a trailing remainder shorter
/// than `target_samples` is never scored. Ties keep the lowest window index,
/// so an all-silent input yields its first window. The returned clip always
/// has exactly `target_samples` samples, whatever the input length.
pub fn select_loudest_window(samples: &[f32], target_samples: usize) -> Vec<f32> {
    if target_samples == 0 {
        return Vec::new();
    }
    let padded;
    let samples = if samples.len() < target_samples {
        let mut extended = samples.to_vec();
        extended.resize(target_samples, 0.0);
        padded = extended;
        padded.as_slice()
    } else {
        samples
    };

    let num_windows = samples.len() / target_samples;
    let mut best_start = 0usize;
    let mut best_energy = -1.0_f32;
    for window in 0..num_windows {
        let start = window * target_samples;
        let energy = rms(&samples[start..start + target_samples]);
        // Strict comparison keeps the first window on ties.
        if energy > best_energy {
            best_energy = energy;
            best_start = start;
        }
    }
    samples[best_start..best_start + target_samples].to_vec()
}

/// Root-mean-square amplitude of a sample slice.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum = samples
        .iter()
        .fold(0.0_f64, |acc, &s| acc + s as f64 * s as f64);
    (sum / samples.len() as f64).sqrt() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_window(value: f32, len: usize) -> Vec<f32> {
        vec![value; len]
    }

    #[test]
    fn rms_of_constant_signal_equals_amplitude() {
        let samples = constant_window(0.5, 128);
        assert!((rms(&samples) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rms_of_empty_slice_is_zero() {
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn selects_window_with_highest_energy() {
        let target = 64;
        let mut samples = constant_window(0.1, target);
        samples.extend(constant_window(0.9, target));
        let clip = select_loudest_window(&samples, target);
        assert_eq!(clip, constant_window(0.9, target));
    }

    fn alternating_window(amplitude: f32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| if i % 2 == 0 { amplitude } else { -amplitude })
            .collect()
    }

    #[test]
    fn equal_energy_windows_keep_the_first() {
        // All three windows share the same RMS but only window 0 is
        // constant, so selecting any later tied window changes the output.
        let target = 32;
        let first = constant_window(0.4, target);
        let mut samples = first.clone();
        samples.extend(alternating_window(0.4, target));
        samples.extend(alternating_window(-0.4, target));
        let clip = select_loudest_window(&samples, target);
        assert_eq!(clip, first);
    }

    #[test]
    fn later_tied_windows_never_replace_the_leader() {
        // Window 1 is the strict maximum; window 2 ties it with different
        // content and must not displace it.
        let target = 16;
        let loud = constant_window(0.6, target);
        let mut samples = constant_window(0.1, target);
        samples.extend(loud.clone());
        samples.extend(alternating_window(0.6, target));
        let clip = select_loudest_window(&samples, target);
        assert_eq!(clip, loud);
    }

    #[test]
    fn short_input_is_zero_padded_to_target() {
        let target = 10;
        let samples = constant_window(0.5, 4);
        let clip = select_loudest_window(&samples, target);
        assert_eq!(clip.len(), target);
        assert_eq!(&clip[..4], &samples[..]);
        assert!(clip[4..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn empty_input_yields_silent_clip_of_target_length() {
        let clip = select_loudest_window(&[], 16);
        assert_eq!(clip, vec![0.0; 16]);
    }

    #[test]
    fn all_silent_input_selects_first_window() {
        let target = 8;
        let samples = vec![0.0_f32; target * 3];
        let clip = select_loudest_window(&samples, target);
        assert_eq!(clip, vec![0.0; target]);
    }

    #[test]
    fn trailing_remainder_is_never_scored() {
        // 2.5 windows: the loud half-window at the end must not win.
        let target = 40;
        let mut samples = constant_window(0.2, target);
        samples.extend(constant_window(0.3, target));
        samples.extend(constant_window(1.0, target / 2));
        let clip = select_loudest_window(&samples, target);
        assert_eq!(clip, constant_window(0.3, target));
    }

    #[test]
    fn exact_multiple_input_keeps_window_boundaries() {
        let target = 16;
        let mut samples = constant_window(0.0, target);
        samples.extend(constant_window(0.7, target));
        samples.extend(constant_window(0.1, target));
        let clip = select_loudest_window(&samples, target);
        assert_eq!(clip, constant_window(0.7, target));
    }

    #[test]
    fn zero_target_returns_empty_clip() {
        assert!(select_loudest_window(&[0.5, 0.5], 0).is_empty());
    }
}
