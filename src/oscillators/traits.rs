//! Core trait for waveform generators.

use super::{BlepKernel, PhaseAccumulator};

/// One waveform's per-sample shaping function.
///
/// A generator reads the current phase and returns one floating sample in
/// `[-1.0, 1.0]`. It never advances the phase itself; the owning
/// [`Oscillator`](super::Oscillator) does that after every sample, whichever
/// generator is active.
pub trait Waveshape {
    /// Produces the sample for the accumulator's current phase.
    ///
    /// # Arguments
    ///
    /// * `phase` - Phase state before this sample's advance
    /// * `bandlimit` - Kernel used to correct discontinuities, or `None` for
    ///   the naive (aliased) waveform
    fn sample(&mut self, phase: &PhaseAccumulator, bandlimit: Option<BlepKernel>) -> f64;

    /// Clears any state carried between samples.
    fn reset(&mut self) {}
}
