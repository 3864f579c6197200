//! Error type shared by oscillator configuration and the WAV writer.

use thiserror::Error;

/// Errors produced while configuring an oscillator or writing a WAV file.
///
/// Sample generation itself never fails; everything here is either a
/// configuration problem caught up front or an I/O problem in the writer.
#[derive(Debug, Error)]
pub enum Error {
    /// The sample rate was zero, or too large for the WAV header's byte rate.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    /// The frequency is not positive, not finite, or not below Nyquist.
    #[error("unsupported frequency {frequency} Hz at sample rate {sample_rate} Hz: must be above 0 and below Nyquist")]
    UnsupportedFrequency { frequency: f64, sample_rate: u32 },

    /// A phase increment outside `(0, 2π)` radians.
    #[error("invalid phase step: {0} rad (must be in (0, 2π))")]
    InvalidPhaseStep(f64),

    /// A single buffered write was at least as large as the buffer.
    #[error("write of {len} bytes exceeds buffer capacity of {capacity} bytes")]
    WriteExceedsCapacity { len: usize, capacity: usize },

    /// The data chunk no longer fits a 32-bit RIFF size field.
    #[error("{0} bytes of sample data do not fit in a WAV file")]
    DataTooLarge(u64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias using the crate [`enum@Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
