//! Synergy Module - Cross-module insight store and suggestion engine.
//!
//! Creative modules (sound, visual, casting) record free-text insights. An
//! analyzer cross-references the insights of the modules in its profile
//! using declarative keyword rules and keeps a ranked list of suggestions.
//!
//! # Components
//!
//! - `ModuleInsight` - A single observation from one module
//! - `SynergyRule` / `SynergyProfile` - Rule records and the module set they cover
//! - `SynergyAnalyzer` - Insight store with full re-analysis on every insert
//! - `SharedSynergyAnalyzer` - Thread-safe handle around one analyzer
//! - `CoherenceCalculator` - Bounded alignment score and report

mod analyzer;
mod coherence;
mod insight;
mod rules;
mod suggestion;
mod tips;

pub use analyzer::{SharedSynergyAnalyzer, SynergyAnalyzer};
pub use coherence::{
    CoherenceCalculator, CoherenceReport, COHERENCE_BASE_SCORE, HIGH_PRIORITY_BONUS,
    HIGH_RELEVANCE_BONUS, LOW_PRIORITY_PENALTY, MAX_RECOMMENDATIONS,
};
pub use insight::ModuleInsight;
pub use rules::{SynergyProfile, SynergyRule};
pub use suggestion::{rank_suggestions, CrossModuleSuggestion, Priority, SuggestionKind};
pub use tips::collaboration_tips;
