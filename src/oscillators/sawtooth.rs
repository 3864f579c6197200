//! Sawtooth wave generator.

use super::{BlepKernel, PhaseAccumulator, Waveshape};
use std::f64::consts::PI;

/// Rising sawtooth from -1 to +1 with a single drop at the wrap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sawtooth;

impl Waveshape for Sawtooth {
    fn sample(&mut self, phase: &PhaseAccumulator, bandlimit: Option<BlepKernel>) -> f64 {
        let mut sample = phase.phase() / PI - 1.0;
        if let Some(kernel) = bandlimit {
            sample -= kernel.correction(phase.normalized(), phase.normalized_step());
        }
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_ramp() {
        let mut acc = PhaseAccumulator::new(100.0, 44100).unwrap();
        let mut prev = Sawtooth.sample(&acc, None);
        assert_eq!(prev, -1.0);
        for _ in 0..400 {
            acc.advance();
            let curr = Sawtooth.sample(&acc, None);
            assert!(curr > prev);
            prev = curr;
        }
    }

    #[test]
    fn test_linearity_away_from_wrap() {
        let mut acc = PhaseAccumulator::new(100.0, 44100).unwrap();
        for _ in 0..10 {
            acc.advance();
        }
        let s1 = Sawtooth.sample(&acc, Some(BlepKernel::Narrow));
        acc.advance();
        let s2 = Sawtooth.sample(&acc, Some(BlepKernel::Narrow));
        acc.advance();
        let s3 = Sawtooth.sample(&acc, Some(BlepKernel::Narrow));
        assert!(((s2 - s1) - (s3 - s2)).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_is_corrected() {
        let acc = PhaseAccumulator::new(440.0, 44100).unwrap();
        // Naive value -1 minus the -1 correction lands on the middle of the drop
        assert_eq!(Sawtooth.sample(&acc, Some(BlepKernel::Narrow)), 0.0);
    }

    #[test]
    fn test_sample_range() {
        for &frequency in &[55.0, 440.0, 5000.0, 20000.0] {
            let mut acc = PhaseAccumulator::new(frequency, 44100).unwrap();
            for _ in 0..4410 {
                let sample = Sawtooth.sample(&acc, Some(BlepKernel::Narrow));
                assert!((-1.0..=1.0).contains(&sample), "{} at {} Hz", sample, frequency);
                acc.advance();
            }
        }
    }
}
