//! Oscillator implementations.
//!
//! Leaves first: the phase accumulator, the polyBLEP correction, the four
//! waveform generators, and the [`Oscillator`] facade that drives them.

mod blep;
mod oscillator;
mod phase;
mod sawtooth;
mod sine;
mod square;
mod traits;
mod triangle;

pub use blep::{BlepKernel, polyblep_narrow};
pub use oscillator::{Oscillator, Waveform, validate_frequency};
pub use phase::{PhaseAccumulator, advance, phase_step};
pub use sawtooth::Sawtooth;
pub use sine::Sine;
pub use square::Square;
pub use traits::Waveshape;
pub use triangle::Triangle;
