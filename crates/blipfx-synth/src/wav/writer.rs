//! Core WAV writing and PCM conversion.

use std::io::{self, Seek, SeekFrom, Write};

use super::format::{WavFormat, HEADER_LEN};

/// Scale applied to a `[-1, 1]` sample before truncation to 16 bits.
pub const FULL_SCALE: f64 = 32000.0;

/// Byte offset of the RIFF chunk size field.
const RIFF_SIZE_OFFSET: u64 = 4;

/// Byte offset of the data chunk size field.
const DATA_SIZE_OFFSET: u64 = 40;

/// Converts one sample to a 16-bit PCM value.
///
/// The sample is clipped to `[-1, 1]`, scaled by [`FULL_SCALE`] and
/// truncated toward zero.
#[inline]
pub fn sample_to_pcm16(sample: f64) -> i16 {
    let clipped = if sample.is_nan() {
        0.0
    } else {
        sample.clamp(-1.0, 1.0)
    };
    (clipped * FULL_SCALE) as i16
}

/// Converts samples to little-endian 16-bit PCM bytes.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample_to_pcm16(sample).to_le_bytes());
    }
    pcm
}

fn write_header<W: Write>(writer: &mut W, format: &WavFormat, data_size: u32) -> io::Result<()> {
    // RIFF size excludes the 8-byte "RIFF" + size prefix.
    let riff_size = data_size.saturating_add(HEADER_LEN as u32 - 8);

    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    Ok(())
}

/// Streams `samples` into `writer` as a complete WAV file.
///
/// The header is written first with zero sizes and patched once the last
/// sample is out; the writer is left positioned at the end of the data.
/// Returns the number of samples written.
pub fn write_wav<W, I>(writer: &mut W, format: &WavFormat, samples: I) -> io::Result<usize>
where
    W: Write + Seek,
    I: IntoIterator<Item = f64>,
{
    let start = writer.stream_position()?;
    write_header(writer, format, 0)?;

    let mut count = 0usize;
    for sample in samples {
        writer.write_all(&sample_to_pcm16(sample).to_le_bytes())?;
        count += 1;
    }

    let data_size = u32::try_from(count * format.block_align() as usize)
        .ok()
        .filter(|size| size.checked_add(HEADER_LEN as u32).is_some())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "WAV data exceeds 4 GiB"))?;
    let riff_size = data_size + (HEADER_LEN as u32 - 8);

    let end = writer.stream_position()?;
    writer.seek(SeekFrom::Start(start + RIFF_SIZE_OFFSET))?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.seek(SeekFrom::Start(start + DATA_SIZE_OFFSET))?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.seek(SeekFrom::Start(end))?;

    Ok(count)
}

/// Writes a WAV file for already-encoded PCM bytes into a new buffer.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let data_size = u32::try_from(pcm_data.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "WAV data exceeds 4 GiB"))?;
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_header(&mut buffer, format, data_size)?;
    buffer.extend_from_slice(pcm_data);
    Ok(buffer)
}
