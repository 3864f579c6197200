//! Square wave generator.

use super::{BlepKernel, PhaseAccumulator, Waveshape};
use std::f64::consts::PI;

/// Square wave, +1 for the first half period and -1 for the second.
///
/// Both edges are discontinuous: the rising edge sits at the wrap (`t = 0`)
/// and the falling edge half a period later, so the correction is applied
/// twice, once shifted by 0.5.
#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

/// The band-limited square value, shared with [`Triangle`](super::Triangle).
pub(crate) fn square_sample(phase: &PhaseAccumulator, bandlimit: Option<BlepKernel>) -> f64 {
    let mut sample = if phase.phase() < PI { 1.0 } else { -1.0 };
    if let Some(kernel) = bandlimit {
        let t = phase.normalized();
        let dt = phase.normalized_step();
        sample += kernel.correction(t, dt);
        sample -= kernel.correction((t + 0.5) % 1.0, dt);
    }
    sample
}

impl Waveshape for Square {
    fn sample(&mut self, phase: &PhaseAccumulator, bandlimit: Option<BlepKernel>) -> f64 {
        square_sample(phase, bandlimit)
    }
}
