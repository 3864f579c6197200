//! Conversion of floating samples to signed 16-bit PCM.
//!
//! Both policies map `[-1.0, 1.0]` onto `[-32768, 32767]` through the same
//! affine transform, `(f + 1) * 32767.5 - 32768`, and differ only in how the
//! fractional remainder is resolved:
//!
//! - [`Round`] rounds to nearest (ties up), so the output is a pure function
//!   of the input.
//! - [`Dither`] rounds up with probability equal to the remainder, which
//!   decorrelates quantization error from the signal at the cost of a small
//!   noise floor. The random source is a type parameter so that seeded
//!   generators give reproducible output.
//!
//! Out-of-range input is clamped rather than wrapped.

use rand::Rng;

const SCALE: f64 = 32767.5;
const MIN: f64 = i16::MIN as f64;
const MAX: f64 = i16::MAX as f64;

/// A policy for turning one floating sample into one PCM sample.
pub trait Quantizer {
    fn quantize(&mut self, sample: f64) -> i16;

    /// Quantizes `input` into `output` element by element.
    ///
    /// Only the overlapping prefix of the two slices is written.
    fn quantize_slice(&mut self, input: &[f64], output: &mut [i16]) {
        for (out, &sample) in output.iter_mut().zip(input) {
            *out = self.quantize(sample);
        }
    }
}

/// Round-to-nearest quantization of a sample in `[-1.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use psynth::quantize_round;
///
/// assert_eq!(quantize_round(-1.0), -32768);
/// assert_eq!(quantize_round(0.0), 0);
/// assert_eq!(quantize_round(1.0), 32767);
/// ```
pub fn quantize_round(sample: f64) -> i16 {
    let unsigned = ((sample + 1.0) * SCALE + 0.5).floor();
    (unsigned + MIN).clamp(MIN, MAX) as i16
}

/// Deterministic round-to-nearest quantizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Round;

impl Quantizer for Round {
    fn quantize(&mut self, sample: f64) -> i16 {
        quantize_round(sample)
    }
}

/// Randomized rounding driven by an injectable random source.
pub struct Dither<R: Rng = rand::rngs::ThreadRng> {
    rng: R,
}

impl Dither<rand::rngs::ThreadRng> {
    /// Creates a dithering quantizer backed by the thread-local generator.
    ///
    /// Output is not reproducible; use [`Dither::with_rng`] with a seeded
    /// generator where that matters.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for Dither<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Dither<R> {
    /// Creates a dithering quantizer with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use psynth::{Dither, Quantizer};
    /// use rand::SeedableRng;
    ///
    /// let mut a = Dither::with_rng(rand::rngs::StdRng::seed_from_u64(7));
    /// let mut b = Dither::with_rng(rand::rngs::StdRng::seed_from_u64(7));
    /// assert_eq!(a.quantize(0.123), b.quantize(0.123));
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes the quantizer and returns its random source.
    ///
    /// # Returns
    ///
    /// The generator in whatever state the last quantized sample left it.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Quantizer for Dither<R> {
    fn quantize(&mut self, sample: f64) -> i16 {
        let scaled = (sample + 1.0) * SCALE + MIN;
        let whole = scaled.floor();
        let fraction = scaled - whole;
        let uniform: f64 = self.rng.r#gen();
        let bump = if uniform < fraction { 1.0 } else { 0.0 };
        (whole + bump).clamp(MIN, MAX) as i16
    }
}
