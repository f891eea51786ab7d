//! Application handlers.
//!
//! Services that orchestrate domain operations over ports.

pub mod creative;
pub mod narration;
pub mod workspace;

pub use creative::{CreativeSuggestionService, SceneContext, SuggestionOutcome};
pub use narration::{NarrationDefaults, NarrationService, NarrationStatus};
pub use workspace::{CreativeWorkspace, ProfileCoherence, ProfileSummary};
