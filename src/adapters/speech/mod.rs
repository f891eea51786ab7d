//! Speech Synthesizer Adapters.
//!
//! - `InMemorySpeechSynthesizer` - Records utterances without producing audio

mod in_memory_synthesizer;

pub use in_memory_synthesizer::InMemorySpeechSynthesizer;
