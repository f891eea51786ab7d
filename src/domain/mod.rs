//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (module ids, relevance, errors, sanitizer)
//! - `synergy` - Insight store, synergy rules, suggestions and coherence scoring
//! - `speech` - Voice selection and text preview helpers for narration

pub mod foundation;
pub mod speech;
pub mod synergy;
