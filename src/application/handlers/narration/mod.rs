//! Narration handlers.

mod narration_service;

pub use narration_service::{NarrationDefaults, NarrationService, NarrationStatus};
