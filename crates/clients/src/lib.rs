mod consts;
mod env;
mod gemini;
mod speech;

pub use consts::{DEFAULT_GEMINI_API_URL, DEFAULT_SPEECH_API_URL, PROBE_PROMPT};
pub use env::{GeminiEnv, SpeechEnv};
pub use gemini::GeminiClient;
pub use speech::{extract_audio_from_video, SpeechClient};
