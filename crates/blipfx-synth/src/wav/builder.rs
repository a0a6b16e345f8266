//! WAV writer builder.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use crate::error::SynthResult;

use super::format::WavFormat;
use super::result::WavResult;
use super::writer::{samples_to_pcm16, write_wav, write_wav_to_vec};

/// WAV writer for a fixed format.
#[derive(Debug, Clone, Copy)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a mono 16-bit writer.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// The format this writer produces.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Writes samples to a byte vector.
    pub fn write_mono(&self, samples: &[f64]) -> SynthResult<Vec<u8>> {
        let pcm = samples_to_pcm16(samples);
        Ok(write_wav_to_vec(&self.format, &pcm)?)
    }

    /// Streams samples to a seekable writer, returning the sample count.
    pub fn write_to<W, I>(&self, writer: &mut W, samples: I) -> SynthResult<usize>
    where
        W: Write + Seek,
        I: IntoIterator<Item = f64>,
    {
        Ok(write_wav(writer, &self.format, samples)?)
    }

    /// Streams samples to a new file at `path`, returning the sample count.
    pub fn write_file<I>(&self, path: impl AsRef<Path>, samples: I) -> SynthResult<usize>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut out = BufWriter::new(File::create(path)?);
        let count = self.write_to(&mut out, samples)?;
        out.flush()?;
        Ok(count)
    }

    /// BLAKE3 hash of the PCM data these samples encode to.
    pub fn pcm_hash_mono(&self, samples: &[f64]) -> String {
        blake3::hash(&samples_to_pcm16(samples)).to_hex().to_string()
    }

    /// Encodes samples into a [`WavResult`].
    pub fn finish(&self, samples: &[f64]) -> SynthResult<WavResult> {
        WavResult::from_mono(samples, self.format.sample_rate)
    }
}
