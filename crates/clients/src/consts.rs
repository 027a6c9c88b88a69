pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// A local vosk-server style recognizer by default; override with
/// SPEECH_API_URL to point at any service speaking the same contract.
pub const DEFAULT_SPEECH_API_URL: &str = "http://127.0.0.1:2700";

/// Canned prompt used by the API-status probe.
pub const PROBE_PROMPT: &str = "Hello";
