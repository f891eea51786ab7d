//! Installed voices and utterances handed to a speech synthesizer.

use serde::{Deserialize, Serialize};

/// Voice-name markers that indicate a higher quality voice.
pub const PREFERRED_VOICE_MARKERS: &[&str] = &["Natural", "Premium"];

/// Allowed speech rate range.
pub const RATE_RANGE: (f32, f32) = (0.1, 10.0);

/// Allowed pitch range.
pub const PITCH_RANGE: (f32, f32) = (0.0, 2.0);

/// A voice installed on the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    /// BCP-47 language tag, e.g. `en-US`.
    pub lang: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default: false,
        }
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    pub fn is_english(&self) -> bool {
        let lang = self.lang.to_ascii_lowercase();
        lang == "en" || lang.starts_with("en-") || lang.starts_with("en_")
    }
}

/// Caller-facing speech options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeechOptions {
    /// Case-insensitive substring of the wanted voice name.
    pub voice: Option<String>,
    pub rate: Option<f32>,
    pub pitch: Option<f32>,
}

impl SpeechOptions {
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = Some(pitch);
        self
    }
}

/// A fully resolved request to speak text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<Voice>,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    /// Creates an utterance, clamping rate and pitch to supported ranges.
    pub fn new(text: impl Into<String>, voice: Option<Voice>, rate: f32, pitch: f32) -> Self {
        Self {
            text: text.into(),
            voice,
            rate: clamp_or(rate, RATE_RANGE, 1.0),
            pitch: clamp_or(pitch, PITCH_RANGE, 1.0),
        }
    }
}

fn clamp_or(value: f32, (min, max): (f32, f32), fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// Picks the voice to use for an utterance.
///
/// An explicit request matches the first voice whose name contains it
/// (case-insensitive). Otherwise the first voice tagged "Natural", then
/// "Premium", then any English voice, then the host default, then the
/// first installed voice.
pub fn select_voice<'a>(voices: &'a [Voice], requested: Option<&str>) -> Option<&'a Voice> {
    if let Some(wanted) = requested.map(str::trim).filter(|w| !w.is_empty()) {
        let wanted = wanted.to_lowercase();
        if let Some(voice) = voices.iter().find(|v| v.name.to_lowercase().contains(&wanted)) {
            return Some(voice);
        }
    }

    PREFERRED_VOICE_MARKERS
        .iter()
        .find_map(|marker| voices.iter().find(|v| v.name.contains(marker)))
        .or_else(|| voices.iter().find(|v| v.is_english()))
        .or_else(|| voices.iter().find(|v| v.is_default))
        .or_else(|| voices.first())
}
