//! psynth - band-limited oscillators rendered to 16-bit PCM
//!
//! The crate synthesizes sine, square, sawtooth and triangle waves one sample
//! at a time, suppresses aliasing at discontinuities with polyBLEP
//! correction, and quantizes the result to signed 16-bit integers by
//! rounding or dithering. The optional `wav` feature (on by default) packages
//! sample blocks into a mono PCM WAV container.
//!
//! ```
//! use psynth::{Oscillator, Waveform};
//!
//! let mut osc = Oscillator::<44100>::new(Waveform::Triangle, 220.0)?;
//! let mut block = vec![0i16; 1024];
//! osc.fill(&mut block);
//! # Ok::<(), psynth::Error>(())
//! ```

pub mod core;
pub mod error;
pub mod oscillators;
pub mod quantize;
#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use crate::core::{AudioSignal, Signal};
pub use error::{Error, Result};
pub use oscillators::{BlepKernel, Oscillator, PhaseAccumulator, Waveform, Waveshape};
pub use quantize::{Dither, Quantizer, Round, quantize_round};
#[cfg(feature = "wav")]
pub use wav::{BufferedWriter, WavFormat, WavWriter};
