//! Core signal trait.

/// Common interface for anything that produces floating-point samples.
///
/// Samples are nominally in `[-1.0, 1.0]`; quantization to integer PCM
/// happens later, see [`crate::Quantizer`].
pub trait Signal {
    /// Generates the next sample from the signal.
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element, in
    /// index order.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}
