//! NarrationService - Speaks text through the host speech capability.
//!
//! A missing synthesizer is not an error: every call logs a warning and
//! returns without speaking. Synthesizer failures are logged and swallowed
//! the same way, so narration can never break the calling flow.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::speech::{preview_text, select_voice, SpeechOptions, Utterance};
use crate::ports::SpeechSynthesizer;

/// Characters of text included in log lines.
const LOG_PREVIEW_CHARS: usize = 60;

/// Defaults applied when a call leaves options unset.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationDefaults {
    pub rate: f32,
    pub pitch: f32,
    pub preferred_voice: Option<String>,
}

impl Default for NarrationDefaults {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            preferred_voice: None,
        }
    }
}

/// What happened to a narration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationStatus {
    /// Utterance handed to the synthesizer.
    Queued,
    /// Blank text; nothing to say.
    SkippedEmpty,
    /// No speech capability on this host.
    Unavailable,
    /// The synthesizer rejected the utterance.
    Failed,
}

/// Speaks text with voice selection and graceful degradation.
pub struct NarrationService {
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    defaults: NarrationDefaults,
}

impl NarrationService {
    pub fn new(synthesizer: Option<Arc<dyn SpeechSynthesizer>>, defaults: NarrationDefaults) -> Self {
        if synthesizer.is_none() {
            warn!("speech synthesis is not available; narration is disabled");
        }
        Self {
            synthesizer,
            defaults,
        }
    }

    pub fn is_available(&self) -> bool {
        self.synthesizer.is_some()
    }

    /// Speaks `text` using the requested or best available voice.
    pub async fn speak(&self, text: &str, options: SpeechOptions) -> NarrationStatus {
        let Some(synthesizer) = &self.synthesizer else {
            warn!(
                text = %preview_text(text, LOG_PREVIEW_CHARS),
                "speech synthesis not available; skipping narration"
            );
            return NarrationStatus::Unavailable;
        };

        if text.trim().is_empty() {
            return NarrationStatus::SkippedEmpty;
        }

        let voices = match synthesizer.voices().await {
            Ok(voices) => voices,
            Err(err) => {
                warn!(error = %err, "failed to list voices; using host default");
                Vec::new()
            }
        };
        let requested = options
            .voice
            .as_deref()
            .or(self.defaults.preferred_voice.as_deref());
        let voice = select_voice(&voices, requested).cloned();

        let utterance = Utterance::new(
            text,
            voice,
            options.rate.unwrap_or(self.defaults.rate),
            options.pitch.unwrap_or(self.defaults.pitch),
        );

        debug!(
            voice = utterance.voice.as_ref().map(|v| v.name.as_str()).unwrap_or("host default"),
            rate = utterance.rate,
            pitch = utterance.pitch,
            text = %preview_text(text, LOG_PREVIEW_CHARS),
            "speaking"
        );

        match synthesizer.speak(utterance).await {
            Ok(()) => NarrationStatus::Queued,
            Err(err) => {
                warn!(error = %err, "speech synthesis failed");
                NarrationStatus::Failed
            }
        }
    }

    /// Cancels the current utterance and everything queued.
    pub async fn cancel(&self) {
        let Some(synthesizer) = &self.synthesizer else {
            return;
        };
        if let Err(err) = synthesizer.cancel_all().await {
            warn!(error = %err, "failed to cancel speech");
        }
    }
}
