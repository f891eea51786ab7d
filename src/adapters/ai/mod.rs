//! AI Provider Adapters.
//!
//! - `GeminiProvider` - Google Gemini models over the generateContent API
//! - `MockAIProvider` - Configurable mock for testing and offline runs

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{
    GeminiConfig, GeminiProvider, GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL,
};
pub use mock_provider::{MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_CONTENT};
