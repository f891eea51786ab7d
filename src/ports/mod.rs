//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Generative text provider (suggestions, mood tags)
//! - `SpeechSynthesizer` - Host text-to-speech capability

mod ai_provider;
mod speech_synthesizer;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use speech_synthesizer::{SpeechError, SpeechSynthesizer};
