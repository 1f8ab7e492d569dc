use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_command() -> String {
    "espeak-ng".to_string()
}

fn default_voice() -> String {
    // Code words are German city names regardless of UI language.
    "de".to_string()
}

fn default_rate_wpm() -> u32 {
    // Slightly below the usual 175 wpm for clarity.
    160
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// External TTS program, invoked as `<command> -v <voice> -s <rate> -- <text>`.
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_rate_wpm")]
    pub rate_wpm: u32,
}

impl SpeechConfig {
    pub fn new() -> Self {
        let enabled = env::var("TAFEL_SPEECH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_enabled);

        let rate_wpm = env::var("TAFEL_SPEECH_RATE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_rate_wpm);

        Self {
            enabled,
            command: env::var("TAFEL_SPEECH_CMD").unwrap_or_else(|_| default_command()),
            voice: env::var("TAFEL_SPEECH_VOICE").unwrap_or_else(|_| default_voice()),
            rate_wpm,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            command: default_command(),
            voice: default_voice(),
            rate_wpm: default_rate_wpm(),
        }
    }
}
