//! Phase accumulator shared by every waveform.

use crate::error::{Error, Result};
use std::f64::consts::TAU;

/// Radians advanced per sample for a tone of `frequency` Hz.
pub fn phase_step(frequency: f64, sample_rate: u32) -> f64 {
    TAU * frequency / sample_rate as f64
}

/// Adds `step` to `phase` and wraps the result into `[0, 2π)`.
///
/// Expects `0 <= phase < 2π` and `0 <= step < 2π`; with a larger step the
/// subtraction loop runs more than once and no longer means "one sample".
pub fn advance(phase: f64, step: f64) -> f64 {
    let mut next = phase + step;
    while next >= TAU {
        next -= TAU;
    }
    next
}

/// Running oscillator phase in radians plus its fixed per-sample increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseAccumulator {
    phase: f64,
    step: f64,
}

impl PhaseAccumulator {
    /// Starts at phase 0 with the increment for `frequency` at `sample_rate`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSampleRate`] when `sample_rate` is 0, and
    /// [`Error::UnsupportedFrequency`] when the resulting step is not in `(0, 2π)`,
    /// i.e. unless `0 < frequency < sample_rate`.
    pub fn new(frequency: f64, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        Self::with_step(phase_step(frequency, sample_rate)).map_err(|_| {
            Error::UnsupportedFrequency {
                frequency,
                sample_rate,
            }
        })
    }

    /// Starts at phase 0 with an explicit increment in radians.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPhaseStep`] unless `step` is finite and in `(0, 2π)`;
    /// anything else would leave the wrap unbounded or the phase negative.
    pub fn with_step(step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0 && step < TAU) {
            return Err(Error::InvalidPhaseStep(step));
        }
        Ok(Self { phase: 0.0, step })
    }

    /// Current phase in `[0, 2π)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Per-sample increment in radians.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Phase as a fraction of one period, in `[0, 1)`.
    pub fn normalized(&self) -> f64 {
        self.phase / TAU
    }

    /// Fraction of a period advanced per sample.
    pub fn normalized_step(&self) -> f64 {
        self.step / TAU
    }

    /// Moves forward one sample, wrapping into `[0, 2π)`.
    pub fn advance(&mut self) {
        self.phase = advance(self.phase, self.step);
    }

    /// Returns to phase 0, keeping the step.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn test_phase_step() {
        let step = phase_step(440.0, 44100);
        assert!((step - TAU * 440.0 / 44100.0).abs() < 1e-15);
        assert!((phase_step(11025.0, 44100) - TAU / 4.0).abs() < 1e-15);
    }

    #[test]
    fn test_advance_wraps() {
        let next = advance(TAU - 0.1, 0.3);
        assert!((next - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_advance_exact_boundary_wraps_to_zero() {
        assert_eq!(advance(TAU / 2.0, TAU / 2.0), 0.0);
    }

    #[test]
    fn test_accumulated_phase_matches_modulo() {
        for &(phase0, step) in &[(0.0, 0.0627), (1.0, 0.5), (3.0, 2.9), (6.0, 0.001)] {
            let mut phase = phase0;
            let n = 10_000;
            for _ in 0..n {
                phase = advance(phase, step);
                assert!((0.0..TAU).contains(&phase));
            }
            let expected = (phase0 + n as f64 * step).rem_euclid(TAU);
            assert!(
                circular_distance(phase, expected) < 1e-9 * n as f64,
                "phase {} vs expected {}",
                phase,
                expected
            );
        }
    }

    #[test]
    fn test_accumulator_normalized() {
        let mut acc = PhaseAccumulator::new(11025.0, 44100).unwrap();
        assert_eq!(acc.normalized(), 0.0);
        assert!((acc.normalized_step() - 0.25).abs() < 1e-15);
        acc.advance();
        assert!((acc.normalized() - 0.25).abs() < 1e-12);
        acc.advance();
        acc.advance();
        acc.advance();
        assert!(acc.normalized() < 1e-9 || acc.normalized() > 1.0 - 1e-9);
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        assert!(matches!(
            PhaseAccumulator::new(440.0, 0),
            Err(Error::InvalidSampleRate(0))
        ));
    }

    #[test]
    fn test_rejects_frequency_above_sample_rate() {
        for &frequency in &[50000.0, 88200.0, 1e9] {
            assert!(matches!(
                PhaseAccumulator::new(frequency, 44100),
                Err(Error::UnsupportedFrequency {
                    sample_rate: 44100,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_rejects_non_positive_frequency() {
        for &frequency in &[0.0, -440.0, f64::NAN, f64::INFINITY] {
            assert!(PhaseAccumulator::new(frequency, 44100).is_err());
        }
    }

    #[test]
    fn test_rejects_out_of_range_step() {
        for &step in &[-1.0, 0.0, TAU, 7.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                PhaseAccumulator::with_step(step),
                Err(Error::InvalidPhaseStep(_))
            ));
        }
    }

    #[test]
    fn test_accepts_step_just_below_full_turn() {
        let mut acc = PhaseAccumulator::with_step(TAU - 1e-6).unwrap();
        for _ in 0..1000 {
            acc.advance();
            assert!((0.0..TAU).contains(&acc.phase()));
        }
    }

    #[test]
    fn test_reset() {
        let mut acc = PhaseAccumulator::new(440.0, 44100).unwrap();
        for _ in 0..100 {
            acc.advance();
        }
        acc.reset();
        assert_eq!(acc.phase(), 0.0);
        assert_eq!(acc.step(), phase_step(440.0, 44100));
    }
}
