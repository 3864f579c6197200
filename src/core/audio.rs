//! Audio signal trait for sample-rate-aware signals.

use super::Signal;

/// A [`Signal`] whose sample rate is part of its type.
///
/// Encoding the rate as a const generic keeps it fixed for the lifetime of
/// the signal and stops signals at different rates from being mixed.
///
/// # Examples
///
/// ```
/// use psynth::{AudioSignal, Oscillator, Waveform};
///
/// let osc = Oscillator::<44100>::new(Waveform::Sine, 440.0).unwrap();
/// assert_eq!(osc.sample_rate(), 44100.0);
/// assert_eq!(osc.nyquist(), 22050.0);
/// ```
pub trait AudioSignal<const SAMPLE_RATE: u32>: Signal {
    /// Sample rate in Hz.
    fn sample_rate(&self) -> f64 {
        SAMPLE_RATE as f64
    }

    /// Half the sample rate; the highest frequency representable without aliasing.
    fn nyquist(&self) -> f64 {
        SAMPLE_RATE as f64 / 2.0
    }
}
