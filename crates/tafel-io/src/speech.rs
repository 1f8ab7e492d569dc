use async_trait::async_trait;
use tafel_config::speech::SpeechConfig;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;

/// Opaque pronunciation capability: fire-and-forget, best-effort. A new
/// call preempts any utterance still playing.
#[async_trait]
pub trait Pronounce: Send + Sync {
    async fn pronounce(&self, text: &str);
}

/// Speaks through an external TTS program (espeak-ng by default),
/// invoked as `<command> -v <voice> -s <rate> -- <text>`. Cancel-then-speak:
/// the previous child is killed before a new one is spawned. A missing
/// engine logs a warning and no-ops.
pub struct Speaker {
    command: String,
    voice: String,
    rate_wpm: u32,
    enabled: bool,
    current: Mutex<Option<Child>>,
}

impl Speaker {
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            command: config.command.clone(),
            voice: config.voice.clone(),
            rate_wpm: config.rate_wpm,
            enabled: config.enabled,
            current: Mutex::new(None),
        }
    }

    pub fn disabled() -> Self {
        Self::new(&SpeechConfig {
            enabled: false,
            ..SpeechConfig::default()
        })
    }
}

#[async_trait]
impl Pronounce for Speaker {
    async fn pronounce(&self, text: &str) {
        if !self.enabled || text.is_empty() {
            return;
        }

        let mut current = self.current.lock().await;
        if let Some(mut child) = current.take() {
            // preempt the in-flight utterance
            let _ = child.start_kill();
        }

        let spawned = Command::new(&self.command)
            .arg("-v")
            .arg(&self.voice)
            .arg("-s")
            .arg(self.rate_wpm.to_string())
            .arg("--")
            .arg(text)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .kill_on_drop(true)
            .spawn();

        match spawned {
            Ok(child) => *current = Some(child),
            Err(e) => {
                tracing::warn!(command = %self.command, error = %e, "speech engine unavailable");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_speaker_is_a_no_op() {
        let speaker = Speaker::disabled();
        speaker.pronounce("Berlin").await;
        assert!(speaker.current.lock().await.is_none());
    }

    #[tokio::test]
    async fn missing_engine_degrades_silently() {
        let speaker = Speaker::new(&SpeechConfig {
            command: "definitely-not-a-tts-engine".to_string(),
            ..SpeechConfig::default()
        });
        speaker.pronounce("Berlin").await;
        assert!(speaker.current.lock().await.is_none());
    }
}
