//! The oscillator facade: waveform selection, phase state and bulk fills.

use super::{BlepKernel, PhaseAccumulator, Sawtooth, Sine, Square, Triangle, Waveshape};
use crate::core::{AudioSignal, Signal};
use crate::error::{Error, Result};
use crate::quantize::{Quantizer, Round};

/// Which generator a fill call drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
        }
    }
}

/// Checks that `frequency` can be synthesized at `sample_rate` without aliasing.
///
/// The frequency must be finite, positive and strictly below Nyquist. This
/// also keeps the phase step below π, so the phase wrap never loops more
/// than once.
pub fn validate_frequency(frequency: f64, sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(Error::InvalidSampleRate(sample_rate));
    }
    let nyquist = sample_rate as f64 / 2.0;
    if !(frequency.is_finite() && frequency > 0.0 && frequency < nyquist) {
        return Err(Error::UnsupportedFrequency {
            frequency,
            sample_rate,
        });
    }
    Ok(())
}

/// A single-voice oscillator producing quantized 16-bit samples.
///
/// All mutable state lives here: the active waveform, the phase accumulator
/// and the triangle integrator's previous output. Each fill call picks up
/// where the previous one stopped, so a stream can be generated in blocks of
/// any size, and switching waveform between blocks keeps the phase
/// continuous.
///
/// Every sample is computed from the phase *before* that sample's advance:
/// the first sample after construction or [`reset`](Self::reset) uses phase 0.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality)
/// * `Q` - Quantization policy, [`Round`] unless replaced with
///   [`with_quantizer`](Self::with_quantizer)
///
/// # Examples
///
/// ```
/// use psynth::{Oscillator, Waveform};
///
/// let mut osc = Oscillator::<44100>::new(Waveform::Sine, 440.0).unwrap();
/// let mut buffer = [0i16; 128];
/// osc.fill(&mut buffer);
///
/// // Same phase, different shape
/// osc.set_waveform(Waveform::Square);
/// osc.fill(&mut buffer);
/// ```
pub struct Oscillator<const SAMPLE_RATE: u32, Q: Quantizer = Round> {
    waveform: Waveform,
    frequency: f64,
    phase: PhaseAccumulator,
    triangle: Triangle,
    bandlimit: Option<BlepKernel>,
    quantizer: Q,
}

impl<const SAMPLE_RATE: u32> Oscillator<SAMPLE_RATE, Round> {
    /// Creates an oscillator at phase 0 with narrow polyBLEP correction and
    /// rounding quantization.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSampleRate`] when `SAMPLE_RATE` is 0, and
    /// [`Error::UnsupportedFrequency`] unless `0 < frequency < SAMPLE_RATE / 2`.
    pub fn new(waveform: Waveform, frequency: f64) -> Result<Self> {
        validate_frequency(frequency, SAMPLE_RATE)?;
        let phase = PhaseAccumulator::new(frequency, SAMPLE_RATE)?;
        log::debug!(
            "oscillator configured: {} at {} Hz, {} Hz sample rate, step {:.6} rad",
            waveform.name(),
            frequency,
            SAMPLE_RATE,
            phase.step()
        );
        Ok(Self {
            waveform,
            frequency,
            phase,
            triangle: Triangle::new(),
            bandlimit: Some(BlepKernel::Narrow),
            quantizer: Round,
        })
    }
}

impl<const SAMPLE_RATE: u32, Q: Quantizer> Oscillator<SAMPLE_RATE, Q> {
    /// Replaces the quantization policy, keeping all other state.
    pub fn with_quantizer<Q2: Quantizer>(self, quantizer: Q2) -> Oscillator<SAMPLE_RATE, Q2> {
        Oscillator {
            waveform: self.waveform,
            frequency: self.frequency,
            phase: self.phase,
            triangle: self.triangle,
            bandlimit: self.bandlimit,
            quantizer,
        }
    }

    /// Selects the discontinuity correction; `None` produces naive waveforms.
    pub fn with_bandlimit(mut self, bandlimit: Option<BlepKernel>) -> Self {
        self.bandlimit = bandlimit;
        self
    }

    /// The shape currently being generated.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Switches generator for subsequent samples without touching the phase.
    pub fn set_waveform(&mut self, waveform: Waveform) {
        self.waveform = waveform;
    }

    /// The polyBLEP kernel in use, or `None` for naive output.
    pub fn bandlimit(&self) -> Option<BlepKernel> {
        self.bandlimit
    }

    /// Switches the correction kernel for subsequent samples.
    ///
    /// # Arguments
    ///
    /// * `bandlimit` - `Some(kernel)` to smooth discontinuities, `None` for
    ///   the naive shapes
    ///
    /// Phase and triangle state are left untouched.
    pub fn set_bandlimit(&mut self, bandlimit: Option<BlepKernel>) {
        self.bandlimit = bandlimit;
    }

    /// Fundamental frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Current phase in radians, in `[0, 2π)`.
    pub fn phase(&self) -> f64 {
        self.phase.phase()
    }

    /// Per-sample phase increment in radians.
    pub fn phase_step(&self) -> f64 {
        self.phase.step()
    }

    /// The triangle integrator's last output.
    pub fn previous_output(&self) -> f64 {
        self.triangle.previous()
    }

    /// The quantizer used by [`fill`](Self::fill).
    pub fn quantizer(&self) -> &Q {
        &self.quantizer
    }

    /// Mutable access to the quantizer, e.g. to reseed a dither source.
    pub fn quantizer_mut(&mut self) -> &mut Q {
        &mut self.quantizer
    }

    /// Returns phase and the triangle integrator to their initial state.
    pub fn reset(&mut self) {
        self.phase.reset();
        self.triangle.reset();
    }

    /// Writes `buffer.len()` quantized samples of the active waveform.
    pub fn fill(&mut self, buffer: &mut [i16]) {
        for out in buffer.iter_mut() {
            let sample = self.next_sample();
            *out = self.quantizer.quantize(sample);
        }
    }

    /// Switches to `waveform`, then fills `buffer`.
    pub fn fill_waveform(&mut self, waveform: Waveform, buffer: &mut [i16]) {
        self.set_waveform(waveform);
        self.fill(buffer);
    }
}

impl<const SAMPLE_RATE: u32, Q: Quantizer> Signal for Oscillator<SAMPLE_RATE, Q> {
    /// Next unquantized sample; advances the phase like [`Oscillator::fill`].
    fn next_sample(&mut self) -> f64 {
        let sample = match self.waveform {
            Waveform::Sine => Sine.sample(&self.phase, self.bandlimit),
            Waveform::Square => Square.sample(&self.phase, self.bandlimit),
            Waveform::Sawtooth => Sawtooth.sample(&self.phase, self.bandlimit),
            Waveform::Triangle => self.triangle.sample(&self.phase, self.bandlimit),
        };
        self.phase.advance();
        sample
    }
}

impl<const SAMPLE_RATE: u32, Q: Quantizer> AudioSignal<SAMPLE_RATE>
    for Oscillator<SAMPLE_RATE, Q>
{
}
