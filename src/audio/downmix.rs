//! Interleaved-to-mono downmix with sample sanitizing.

/// Average interleaved channels into mono, sanitizing every sample.
pub(crate) fn downmix_to_mono_into(out: &mut Vec<f32>, samples: &[f32], channels: u16) {
    let channels = channels.max(1) as usize;
    out.clear();
    if channels == 1 {
        out.reserve(samples.len().saturating_sub(out.capacity()));
        for sample in samples.iter().copied() {
            out.push(sanitize_sample(sample));
        }
        return;
    }
    let frames = samples.len() / channels;
    out.reserve(frames.saturating_sub(out.capacity()));
    for frame in 0..frames {
        let start = frame * channels;
        let mut sum = 0.0_f32;
        for &sample in &samples[start..start + channels] {
            sum += sanitize_sample(sample);
        }
        out.push(sum / channels as f32);
    }
}

fn sanitize_sample(sample: f32) -> f32 {
    if !sample.is_finite() {
        return 0.0;
    }
    let clamped = sample.clamp(-1.0, 1.0);
    if clamped != 0.0 && clamped.abs() < f32::MIN_POSITIVE {
        0.0
    } else {
        clamped
    }
}
