//! Application layer - Services over the domain and ports.
//!
//! This layer wires domain operations to the AI and speech ports and owns
//! the degradation rules when those capabilities fail or are missing.

pub mod handlers;

pub use handlers::{
    CreativeSuggestionService, CreativeWorkspace, NarrationDefaults, NarrationService,
    NarrationStatus, ProfileCoherence, ProfileSummary, SceneContext, SuggestionOutcome,
};
