//! 16-bit mono WAV encoding.
//!
//! The writer emits a fixed 44-byte header with no timestamps or extra
//! chunks, so identical samples always produce identical files. The header
//! sizes are backpatched once the sample count is known, which lets a
//! caller stream samples straight from the engine.

mod builder;
mod format;
mod pcm;
mod result;
mod writer;


pub use builder::WavWriter;
pub use format::{WavFormat, HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data, read_sample_count};
pub use result::WavResult;
pub use writer::{sample_to_pcm16, samples_to_pcm16, write_wav, write_wav_to_vec, FULL_SCALE};
