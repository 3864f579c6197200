//! RIFF/WAVE header layout.

use crate::error::{Error, Result};

/// Size of the canonical header: RIFF + WAVE + 24-byte `fmt ` + 8-byte `data` preamble.
pub const HEADER_LEN: usize = 44;

const PCM: u16 = 1;
const FMT_CHUNK_LEN: u32 = 16;
const BYTES_PER_SAMPLE: u16 = 2;

/// Format description written into the `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub channels: u16,
    pub sample_rate: u32,
}

impl WavFormat {
    /// One channel at `sample_rate` Hz.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
        }
    }

    /// Bytes per frame: one 16-bit sample for each channel.
    pub fn block_align(&self) -> u16 {
        self.channels * BYTES_PER_SAMPLE
    }

    /// Bytes per second of audio.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSampleRate`] if the rate is so high that the byte rate
    /// no longer fits the header's 32-bit field.
    pub fn byte_rate(&self) -> Result<u32> {
        self.sample_rate
            .checked_mul(self.block_align() as u32)
            .ok_or(Error::InvalidSampleRate(self.sample_rate))
    }

    /// Always 16.
    pub fn bits_per_sample(&self) -> u16 {
        BYTES_PER_SAMPLE * 8
    }

    /// Serializes the full header for a `data` chunk of `data_len` bytes.
    ///
    /// # Errors
    ///
    /// [`Error::DataTooLarge`] if the RIFF size would overflow 32 bits, and
    /// [`Error::InvalidSampleRate`] if the byte rate would.
    pub fn header(&self, data_len: u64) -> Result<[u8; HEADER_LEN]> {
        let byte_rate = self.byte_rate()?;
        let data_len32 = u32::try_from(data_len)
            .ok()
            .filter(|len| len.checked_add(HEADER_LEN as u32 - 8).is_some())
            .ok_or(Error::DataTooLarge(data_len))?;
        let riff_len = data_len32 + (HEADER_LEN as u32 - 8);

        let mut header = [0u8; HEADER_LEN];
        header[0..4].copy_from_slice(b"RIFF");
        header[4..8].copy_from_slice(&riff_len.to_le_bytes());
        header[8..12].copy_from_slice(b"WAVE");
        header[12..16].copy_from_slice(b"fmt ");
        header[16..20].copy_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
        header[20..22].copy_from_slice(&PCM.to_le_bytes());
        header[22..24].copy_from_slice(&self.channels.to_le_bytes());
        header[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
        header[32..34].copy_from_slice(&self.block_align().to_le_bytes());
        header[34..36].copy_from_slice(&self.bits_per_sample().to_le_bytes());
        header[36..40].copy_from_slice(b"data");
        header[40..44].copy_from_slice(&data_len32.to_le_bytes());
        Ok(header)
    }
}
