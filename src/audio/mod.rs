//! Audio input: decoding, mono downmix, and resampling.

mod decode;
mod downmix;
mod resample;

pub use decode::decode_mono_at_rate;
