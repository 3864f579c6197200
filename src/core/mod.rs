//! Core signal processing traits.
//!
//! - `Signal` for anything that produces floating-point samples
//! - `AudioSignal` for signals whose sample rate is fixed at the type level

mod audio;
mod signal;

pub use audio::AudioSignal;
pub use signal::Signal;
