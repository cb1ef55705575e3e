//! Audio Engine Module
//!
//! Everything on the container side of the pipeline:
//! - Decoded sample buffers
//! - WAV encoding and decoding
//! - File I/O operations

pub mod buffer;
pub mod io;
pub mod wav;

pub use buffer::AudioSamples;
pub use io::{export_audio, import_audio, output_file_name};
pub use wav::{decode_wav, encode_wav_pcm16, float_to_pcm16, pcm16_to_float, EncodedAudioFile};
