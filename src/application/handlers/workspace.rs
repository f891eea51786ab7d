//! CreativeWorkspace - One analyzer per synergy profile, addressed as a unit.
//!
//! Built once at startup and handed to whatever records insights. An
//! insight is stored in every analyzer whose profile tracks its module, so
//! a visual insight feeds both the sound+visual and casting+visual
//! analyses.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, ModuleId, Relevance};
use crate::domain::synergy::{
    collaboration_tips, rank_suggestions, CoherenceReport, CrossModuleSuggestion, ModuleInsight,
    SharedSynergyAnalyzer, SynergyProfile,
};

/// Coherence of a single profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCoherence {
    pub profile: String,
    pub report: CoherenceReport,
}

/// Serializable view of one profile's state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub profile: String,
    pub insights: Vec<ModuleInsight>,
    pub suggestions: Vec<CrossModuleSuggestion>,
    pub coherence: CoherenceReport,
}

/// The set of analyzers a creative session works against.
#[derive(Debug, Clone)]
pub struct CreativeWorkspace {
    analyzers: Vec<SharedSynergyAnalyzer>,
}

impl Default for CreativeWorkspace {
    fn default() -> Self {
        Self::new(vec![
            SynergyProfile::sound_visual(),
            SynergyProfile::casting_visual(),
        ])
    }
}

impl CreativeWorkspace {
    pub fn new(profiles: Vec<SynergyProfile>) -> Self {
        Self {
            analyzers: profiles.into_iter().map(SharedSynergyAnalyzer::new).collect(),
        }
    }

    pub fn analyzers(&self) -> &[SharedSynergyAnalyzer] {
        &self.analyzers
    }

    /// Finds the analyzer for a profile by name.
    pub fn analyzer(&self, profile: &str) -> Option<&SharedSynergyAnalyzer> {
        self.analyzers.iter().find(|a| a.profile_name() == profile)
    }

    /// Records an insight in every analyzer tracking `module`.
    ///
    /// Returns how many analyzers received it. The text is validated once,
    /// before any analyzer is touched.
    pub fn record_insight(
        &self,
        module: ModuleId,
        insight: impl Into<String>,
        relevance: Relevance,
        shared_data: Option<Value>,
    ) -> Result<usize, DomainError> {
        let mut record = ModuleInsight::new(module, insight, relevance)?;
        record.shared_data = shared_data;

        let targets: Vec<&SharedSynergyAnalyzer> =
            self.analyzers.iter().filter(|a| a.tracks(module)).collect();
        if targets.is_empty() {
            return Err(DomainError::new(
                ErrorCode::ModuleNotTracked,
                format!("no profile tracks module '{}'", module),
            )
            .with_detail("module", module.as_str()));
        }

        for analyzer in &targets {
            analyzer.record(record.clone())?;
        }
        debug!(%module, analyzers = targets.len(), "insight routed");
        Ok(targets.len())
    }

    /// Suggestions from every profile, highest priority first.
    pub fn suggestions(&self) -> Vec<CrossModuleSuggestion> {
        let all: Vec<CrossModuleSuggestion> =
            self.analyzers.iter().flat_map(|a| a.suggestions()).collect();
        rank_suggestions(&all)
    }

    pub fn coherence(&self) -> Vec<ProfileCoherence> {
        self.analyzers
            .iter()
            .map(|a| ProfileCoherence {
                profile: a.profile_name(),
                report: a.analyze_coherence(),
            })
            .collect()
    }

    pub fn collaboration_tips(&self, module: ModuleId) -> &'static [&'static str] {
        collaboration_tips(module)
    }

    pub fn summary(&self) -> Vec<ProfileSummary> {
        self.analyzers
            .iter()
            .map(|a| ProfileSummary {
                profile: a.profile_name(),
                insights: a.all_insights(),
                suggestions: a.suggestions(),
                coherence: a.analyze_coherence(),
            })
            .collect()
    }

    /// Empties every analyzer.
    pub fn clear_all(&self) {
        for analyzer in &self.analyzers {
            analyzer.clear();
        }
        debug!(analyzers = self.analyzers.len(), "workspace cleared");
    }
}
