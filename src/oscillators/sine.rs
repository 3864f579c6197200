//! Sine wave generator.

use super::{BlepKernel, PhaseAccumulator, Waveshape};

/// Pure sine. Continuous, so it never needs a correction.
///
/// The first sample after a reset is reported to come out slightly off zero.
/// Here `sin(0)` is exactly 0 and [`Round`](crate::Round) maps it to 0, so
/// the offset is not reproduced; dithering lands on 0 or -1. No phase offset
/// is applied to compensate until the report is confirmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sine;

impl Waveshape for Sine {
    fn sample(&mut self, phase: &PhaseAccumulator, _bandlimit: Option<BlepKernel>) -> f64 {
        phase.phase().sin()
    }
}
