//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generative AI providers (Gemini, mock)
//! - `speech` - Speech synthesizers

pub mod ai;
pub mod speech;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider, MockError};
pub use speech::InMemorySpeechSynthesizer;
