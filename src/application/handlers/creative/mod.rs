//! Creative suggestion handlers.

mod suggestion_service;

pub use suggestion_service::{
    parse_string_list, CreativeSuggestionService, SceneContext, SuggestionOutcome,
    AI_DISABLED_REASON, DEFAULT_AUDIO_CUES, DEFAULT_FOLEY_CUES, DEFAULT_MOOD_TAGS,
    MAX_SUGGESTIONS,
};
