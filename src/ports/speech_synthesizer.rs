//! Speech Synthesizer Port - Interface for the host text-to-speech capability.
//!
//! Hosts without speech support simply provide no implementation; the
//! narration service degrades to a logged no-op in that case.

use async_trait::async_trait;

use crate::domain::speech::{Utterance, Voice};

/// Port for speaking text aloud.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Lists voices installed on the host.
    async fn voices(&self) -> Result<Vec<Voice>, SpeechError>;

    /// Queues an utterance. Returns once the host has accepted it.
    async fn speak(&self, utterance: Utterance) -> Result<(), SpeechError>;

    /// Cancels the current utterance and everything pending.
    async fn cancel_all(&self) -> Result<(), SpeechError>;
}

/// Speech synthesis errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    /// The host rejected or could not render the utterance.
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),

    /// The host capability disappeared after startup.
    #[error("speech synthesis unavailable")]
    Unavailable,
}
