//! Triangle wave generator.

use super::square::square_sample;
use super::{BlepKernel, PhaseAccumulator, Waveshape};
use std::f64::consts::PI;

/// A triangle wave derived from the band-limited square.
///
/// With bandlimiting enabled the corrected square is run through a one-pole
/// leaky integrator, `y = step * square + (1 - step) * previous`, where `step`
/// is the phase increment in radians. The output is carried between samples,
/// so this is the only generator with state of its own.
///
/// The integrator's coefficient is known to be mistuned: the result is a
/// rounded, low-amplitude triangle rather than a full-scale one, and for
/// steps above 1 radian (roughly `sample_rate / 6.28`) the feedback term goes
/// negative. It is kept as-is until the filter design is revisited.
///
/// Without bandlimiting the naive triangle `2 * (|phase/π - 1| - 0.5)` is
/// used and no state is carried.
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangle {
    previous: f64,
}

impl Triangle {
    /// A triangle with the integrator at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// The integrator's last output.
    pub fn previous(&self) -> f64 {
        self.previous
    }
}

impl Waveshape for Triangle {
    fn sample(&mut self, phase: &PhaseAccumulator, bandlimit: Option<BlepKernel>) -> f64 {
        match bandlimit {
            Some(_) => {
                let square = square_sample(phase, bandlimit);
                let step = phase.step();
                let sample = step * square + (1.0 - step) * self.previous;
                self.previous = sample;
                sample
            }
            None => {
                let ramp = phase.phase() / PI - 1.0;
                2.0 * (ramp.abs() - 0.5)
            }
        }
    }

    fn reset(&mut self) {
        self.previous = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_from_rest() {
        let acc = PhaseAccumulator::new(440.0, 44100).unwrap();
        let mut tri = Triangle::new();
        // Corrected square is 0 at the wrap, so nothing enters the integrator
        assert_eq!(tri.sample(&acc, Some(BlepKernel::Narrow)), 0.0);
        assert_eq!(tri.previous(), 0.0);
    }

    #[test]
    fn test_integrator_feedback() {
        let mut acc = PhaseAccumulator::new(440.0, 44100).unwrap();
        let mut tri = Triangle::new();
        let step = acc.step();
        tri.sample(&acc, Some(BlepKernel::Narrow));
        acc.advance();
        acc.advance();
        acc.advance();
        // Well inside the high half of the square
        let before = tri.previous();
        let sample = tri.sample(&acc, Some(BlepKernel::Narrow));
        assert!((sample - (step + (1.0 - step) * before)).abs() < 1e-15);
        assert_eq!(tri.previous(), sample);
    }

    #[test]
    fn test_rises_then_falls() {
        let mut acc = PhaseAccumulator::new(100.0, 44100).unwrap();
        let mut tri = Triangle::new();
        let samples: Vec<f64> = (0..441)
            .map(|_| {
                let s = tri.sample(&acc, Some(BlepKernel::Narrow));
                acc.advance();
                s
            })
            .collect();
        assert!(samples[100] > samples[10]);
        assert!(samples[400] < samples[230]);
    }

    #[test]
    fn test_naive_shape() {
        let mut acc = PhaseAccumulator::new(11025.0, 44100).unwrap();
        let mut tri = Triangle::new();
        let expected = [1.0, 0.0, -1.0, 0.0];
        for &e in &expected {
            assert!((tri.sample(&acc, None) - e).abs() < 1e-12);
            acc.advance();
        }
        assert_eq!(tri.previous(), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut acc = PhaseAccumulator::new(440.0, 44100).unwrap();
        let mut tri = Triangle::new();
        for _ in 0..50 {
            tri.sample(&acc, Some(BlepKernel::Narrow));
            acc.advance();
        }
        assert!(tri.previous() != 0.0);
        tri.reset();
        assert_eq!(tri.previous(), 0.0);
    }

    #[test]
    fn test_sample_range_below_unit_step() {
        let mut acc = PhaseAccumulator::new(5000.0, 44100).unwrap();
        let mut tri = Triangle::new();
        for _ in 0..44100 {
            let sample = tri.sample(&acc, Some(BlepKernel::Narrow));
            assert!((-1.0..=1.0).contains(&sample));
            acc.advance();
        }
    }
}
