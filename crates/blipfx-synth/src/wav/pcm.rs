//! PCM data extraction and hashing utilities.

use crate::error::{SynthError, SynthResult};

/// Extracts the data chunk from a WAV file buffer.
///
/// Returns `None` if the buffer is not a RIFF/WAVE file or has no complete
/// data chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 12 {
        return None;
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start.checked_add(chunk_size)?;
            return wav_data.get(data_start..data_end);
        }

        pos = pos.checked_add(8 + chunk_size)?;
        // Chunks are word aligned.
        if chunk_size % 2 == 1 {
            pos += 1;
        }
    }

    None
}

/// BLAKE3 hash of a WAV file's PCM data.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

/// Number of 16-bit mono samples in a WAV file.
pub fn read_sample_count(wav_data: &[u8]) -> SynthResult<usize> {
    let pcm = extract_pcm_data(wav_data)
        .ok_or_else(|| SynthError::invalid_wav("missing RIFF header or data chunk"))?;
    Ok(pcm.len() / 2)
}
