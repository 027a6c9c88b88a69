use charchat_common::EnvVars;

use crate::consts::{DEFAULT_GEMINI_API_URL, DEFAULT_SPEECH_API_URL};

pub struct GeminiEnv {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
}

impl EnvVars for GeminiEnv {
    fn load() -> Self {
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .expect("GEMINI_API_KEY is not set"),
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
        }
    }

    fn get_env_var(&self, key: &str) -> String {
        match key {
            "GEMINI_API_KEY" => self.gemini_api_key.clone(),
            "GEMINI_API_URL" => self.gemini_api_url.clone(),
            _ => panic!("{} is not set", key),
        }
    }
}

pub struct SpeechEnv {
    pub speech_api_url: String,
}

impl EnvVars for SpeechEnv {
    fn load() -> Self {
        Self {
            speech_api_url: std::env::var("SPEECH_API_URL")
                .unwrap_or_else(|_| DEFAULT_SPEECH_API_URL.to_string()),
        }
    }

    fn get_env_var(&self, key: &str) -> String {
        match key {
            "SPEECH_API_URL" => self.speech_api_url.clone(),
            _ => panic!("{} is not set", key),
        }
    }
}
