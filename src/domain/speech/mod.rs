//! Speech Module - Pure helpers for narration.
//!
//! Voice selection and text previews carry no I/O. The host speech
//! capability is reached through the `SpeechSynthesizer` port.

mod preview;
mod voice;

pub use preview::{preview_text, ELLIPSIS};
pub use voice::{
    select_voice, SpeechOptions, Utterance, Voice, PITCH_RANGE, PREFERRED_VOICE_MARKERS,
    RATE_RANGE,
};
