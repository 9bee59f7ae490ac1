//! Peak normalization for selected clips.

/// Scale samples so the maximum absolute amplitude is exactly 1.0.
///
/// Silent or non-finite-peak input is left unchanged; normalizing silence is
/// not an error and must never divide by zero.
pub fn normalize_peak_in_place(samples: &mut [f32]) {
    let peak = samples.iter().fold(0.0_f32, |m, &s| m.max(s.abs()));
    if !peak.is_finite() || peak <= 0.0 {
        return;
    }
    let gain = 1.0_f32 / peak;
    for sample in samples.iter_mut() {
        *sample = (*sample * gain).clamp(-1.0, 1.0);
    }
}
