//! Streaming mono WAV writer.

use super::buffer::BufferedWriter;
use super::header::{HEADER_LEN, WavFormat};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

/// Writes 16-bit mono PCM samples into a RIFF/WAVE container.
///
/// The header size fields depend on how many samples follow, so `new`
/// reserves the header region with zeros and [`finalize`](Self::finalize)
/// seeks back to overwrite it. Finalizing consumes the writer, so the header
/// is written exactly once and only after the last sample.
///
/// Dropping a writer without finalizing leaves a file with a zeroed header.
///
/// # Examples
///
/// ```
/// use psynth::WavWriter;
/// use std::io::Cursor;
///
/// let mut writer = WavWriter::new(Cursor::new(Vec::<u8>::new()), 44100).unwrap();
/// writer.append_samples(&[0, 1000, -1000]).unwrap();
/// writer.append_silence(2).unwrap();
/// let bytes = writer.finalize().unwrap().into_inner();
/// assert_eq!(bytes.len(), 44 + 5 * 2);
/// ```
#[derive(Debug)]
pub struct WavWriter<W: Write + Seek> {
    out: BufferedWriter<W>,
    format: WavFormat,
    data_len: u64,
}

impl WavWriter<File> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: impl AsRef<Path>, sample_rate: u32) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        log::debug!("writing wav to {}", path.as_ref().display());
        Self::new(file, sample_rate)
    }
}

impl<W: Write + Seek> WavWriter<W> {
    /// Starts a mono stream at `sample_rate`, reserving the header region.
    pub fn new(inner: W, sample_rate: u32) -> Result<Self> {
        Self::with_buffer(BufferedWriter::new(inner), sample_rate)
    }

    /// Like [`new`](Self::new) with a caller-configured output buffer.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSampleRate`] when `sample_rate` is 0 or its byte rate
    /// does not fit the header; nothing is written in that case.
    pub fn with_buffer(mut out: BufferedWriter<W>, sample_rate: u32) -> Result<Self> {
        let format = WavFormat::mono(sample_rate);
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        format.byte_rate()?;
        out.write_direct(&[0u8; HEADER_LEN])?;
        Ok(Self {
            out,
            format,
            data_len: 0,
        })
    }

    /// The format written into the header.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Number of samples appended so far, silence included.
    pub fn samples_written(&self) -> u64 {
        self.data_len / self.format.block_align() as u64
    }

    /// Appends samples as little-endian 16-bit PCM.
    ///
    /// Blocks too large for the output buffer are written directly.
    pub fn append_samples(&mut self, samples: &[i16]) -> Result<()> {
        let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        match self.out.write(&bytes) {
            Err(Error::WriteExceedsCapacity { .. }) => self.out.write_direct(&bytes)?,
            other => other?,
        }
        self.data_len += bytes.len() as u64;
        Ok(())
    }

    /// Appends `count` zero samples.
    pub fn append_silence(&mut self, count: usize) -> Result<()> {
        const CHUNK: usize = 4096;
        let zeros = [0i16; CHUNK];
        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(CHUNK);
            self.append_samples(&zeros[..n])?;
            remaining -= n;
        }
        Ok(())
    }

    /// Flushes all samples, writes the header and returns the inner writer.
    ///
    /// The inner writer is left positioned at the end of the data.
    pub fn finalize(mut self) -> Result<W> {
        let header = self.format.header(self.data_len)?;
        self.out.flush()?;
        let inner = self.out.get_mut();
        inner.seek(SeekFrom::Start(0))?;
        inner.write_all(&header)?;
        inner.seek(SeekFrom::End(0))?;
        inner.flush()?;
        log::debug!(
            "finalized wav: {} samples, {} data bytes",
            self.samples_written(),
            self.data_len
        );
        self.out.into_inner()
    }
}
