//! In-memory speech synthesizer.
//!
//! Records utterances instead of producing audio. Used by tests and by
//! headless hosts that want narration calls to be observable.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::speech::{Utterance, Voice};
use crate::ports::{SpeechError, SpeechSynthesizer};

#[derive(Debug, Default)]
struct SynthesizerState {
    pending: Vec<Utterance>,
    spoken: Vec<Utterance>,
    cancel_count: usize,
    fail_next: Option<SpeechError>,
}

/// Speech synthesizer that keeps utterances in memory.
#[derive(Debug, Clone)]
pub struct InMemorySpeechSynthesizer {
    voices: Vec<Voice>,
    state: Arc<Mutex<SynthesizerState>>,
}

impl Default for InMemorySpeechSynthesizer {
    fn default() -> Self {
        Self::new(vec![
            Voice::new("Default", "en-US").as_default(),
            Voice::new("Aria (Natural)", "en-US"),
        ])
    }
}

impl InMemorySpeechSynthesizer {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            state: Arc::new(Mutex::new(SynthesizerState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, SynthesizerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Makes the next `speak` call fail with the given error.
    pub fn fail_next(&self, error: SpeechError) {
        self.state().fail_next = Some(error);
    }

    /// Moves every queued utterance to the spoken list, as if playback finished.
    pub fn finish_pending(&self) {
        let mut state = self.state();
        let pending = std::mem::take(&mut state.pending);
        state.spoken.extend(pending);
    }

    pub fn pending(&self) -> Vec<Utterance> {
        self.state().pending.clone()
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.state().spoken.clone()
    }

    pub fn cancel_count(&self) -> usize {
        self.state().cancel_count
    }
}

#[async_trait]
impl SpeechSynthesizer for InMemorySpeechSynthesizer {
    async fn voices(&self) -> Result<Vec<Voice>, SpeechError> {
        Ok(self.voices.clone())
    }

    async fn speak(&self, utterance: Utterance) -> Result<(), SpeechError> {
        let mut state = self.state();
        if let Some(error) = state.fail_next.take() {
            return Err(error);
        }
        state.pending.push(utterance);
        Ok(())
    }

    async fn cancel_all(&self) -> Result<(), SpeechError> {
        let mut state = self.state();
        state.pending.clear();
        state.cancel_count += 1;
        Ok(())
    }
}
