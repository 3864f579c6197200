//! Mono 16-bit PCM WAV output.
//!
//! [`WavWriter`] appends sample blocks through a [`BufferedWriter`] and
//! patches the RIFF header in place once all samples are known.

mod buffer;
mod header;
mod writer;

pub use buffer::{BufferedWriter, DEFAULT_CAPACITY};
pub use header::{HEADER_LEN, WavFormat};
pub use writer::WavWriter;
