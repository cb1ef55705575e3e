//! Pitch Shift by Resampling
//!
//! Linear-interpolation resampling at a fixed ratio. No anti-alias filter is
//! applied, so content above Nyquist / ratio folds back. Duration changes
//! with pitch.

/// Resample `input` by `ratio` using linear interpolation
///
/// Output length is `floor(len / ratio)`. Output sample `i` reads the source
/// at position `i / ratio`. Positions past the final sample hold the final
/// sample, which only happens for `ratio < 1`.
///
/// # Arguments
/// * `input` - Source samples
/// * `ratio` - Speed factor, must be positive and finite
///
/// # Returns
/// Newly allocated resampled sequence. Empty input, or a ratio that is not
/// positive and finite, yields an empty sequence.
pub fn resample(input: &[f64], ratio: f64) -> Vec<f64> {
    if input.is_empty() || !(ratio.is_finite() && ratio > 0.0) {
        return Vec::new();
    }

    let last = input.len() - 1;
    let target_len = output_len(input.len(), ratio);
    let mut output = Vec::with_capacity(target_len);

    for i in 0..target_len {
        let src_pos = i as f64 / ratio;
        let floor = src_pos.floor();
        let i0 = (floor as usize).min(last);
        let i1 = (i0 + 1).min(last);
        let frac = if i0 == last { 0.0 } else { src_pos - floor };

        output.push(input[i0] * (1.0 - frac) + input[i1] * frac);
    }

    output
}

/// Number of samples `resample` produces for `len` inputs at `ratio`
pub fn output_len(len: usize, ratio: f64) -> usize {
    (len as f64 / ratio).floor() as usize
}
