//! Linear-interpolation resampling to the canonical rate.

#[cfg(test)]
pub(crate) fn resample_linear(samples: &[f32], input_rate: u32, output_rate: u32) -> Vec<f32> {
    let mut out = Vec::new();
    resample_linear_into(&mut out, samples, input_rate, output_rate);
    out
}

pub(crate) fn resample_linear_into(
    out: &mut Vec<f32>,
    samples: &[f32],
    input_rate: u32,
    output_rate: u32,
) {
    let input_rate = input_rate.max(1);
    let output_rate = output_rate.max(1);
    out.clear();
    if samples.is_empty() || input_rate == output_rate {
        out.extend_from_slice(samples);
        return;
    }
    // Input positions advance by this much per output sample.
    let step = input_rate as f64 / output_rate as f64;
    let out_len = (samples.len() as f64 / step).round().max(1.0) as usize;
    out.reserve(out_len);
    for i in 0..out_len {
        out.push(lerp_sample(samples, i as f64 * step));
    }
}

fn lerp_sample(samples: &[f32], pos: f64) -> f32 {
    let last = samples.len().saturating_sub(1);
    let idx = (pos.floor().max(0.0) as usize).min(last);
    let next = idx.saturating_add(1).min(last);
    let frac = (pos - idx as f64).clamp(0.0, 1.0) as f32;
    let a = samples[idx];
    let b = samples[next];
    a + (b - a) * frac
}
