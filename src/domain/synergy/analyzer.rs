//! Insight store and synergy analyzer.
//!
//! One analyzer instance tracks the modules of a [`SynergyProfile`], stores
//! their insights in insertion order, and rebuilds the suggestion list from
//! scratch after every insert. Suggestions depend only on store contents,
//! never on insertion order or on previous analyses.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, ModuleId, Relevance};

use super::coherence::{CoherenceCalculator, CoherenceReport};
use super::insight::ModuleInsight;
use super::rules::SynergyProfile;
use super::suggestion::{rank_suggestions, CrossModuleSuggestion};
use super::tips;

/// Stateful insight store with rule-based cross-module analysis.
#[derive(Debug, Clone)]
pub struct SynergyAnalyzer {
    profile: SynergyProfile,
    insights: BTreeMap<ModuleId, Vec<ModuleInsight>>,
    suggestions: Vec<CrossModuleSuggestion>,
}

impl SynergyAnalyzer {
    pub fn new(profile: SynergyProfile) -> Self {
        Self {
            profile,
            insights: BTreeMap::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn profile(&self) -> &SynergyProfile {
        &self.profile
    }

    /// Returns true if this analyzer accepts insights for the module.
    pub fn tracks(&self, module: ModuleId) -> bool {
        self.profile.tracks(module)
    }

    /// Records an insight and re-runs the analysis.
    ///
    /// Rejects blank text and modules outside the profile without touching
    /// stored state.
    pub fn add_insight(
        &mut self,
        module: ModuleId,
        insight: impl Into<String>,
        relevance: Relevance,
        shared_data: Option<Value>,
    ) -> Result<(), DomainError> {
        let mut record = ModuleInsight::new(module, insight, relevance)?;
        record.shared_data = shared_data;
        self.record(record)
    }

    /// Stores a pre-built insight and re-runs the analysis.
    pub fn record(&mut self, insight: ModuleInsight) -> Result<(), DomainError> {
        if !self.tracks(insight.module) {
            return Err(DomainError::new(
                ErrorCode::ModuleNotTracked,
                format!(
                    "module '{}' is not tracked by profile '{}'",
                    insight.module,
                    self.profile.name()
                ),
            )
            .with_detail("module", insight.module.as_str()));
        }

        let module = insight.module;
        self.insights.entry(module).or_default().push(insight);
        self.analyze();

        debug!(
            profile = self.profile.name(),
            %module,
            insights = self.insight_count(),
            suggestions = self.suggestions.len(),
            "insight recorded"
        );
        Ok(())
    }

    /// Rebuilds the suggestion list from the current store.
    ///
    /// Rules run per unordered pair of tracked modules, in profile order.
    pub fn analyze(&mut self) {
        let mut suggestions = Vec::new();

        for (x, y) in self.profile.module_pairs() {
            for rule in self.profile.rules().iter().filter(|r| r.covers_pair(x, y)) {
                let (a, b) = rule.modules;
                if let Some(suggestion) =
                    rule.evaluate(self.module_insights(a), self.module_insights(b))
                {
                    suggestions.push(suggestion);
                }
            }
        }

        self.suggestions = suggestions;
    }

    /// Returns suggestions sorted by descending priority; ties keep rule order.
    pub fn suggestions(&self) -> Vec<CrossModuleSuggestion> {
        rank_suggestions(&self.suggestions)
    }

    /// Returns a module's insights, empty if none were recorded.
    pub fn module_insights(&self, module: ModuleId) -> &[ModuleInsight] {
        self.insights.get(&module).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns every stored insight, grouped by module in canonical module order.
    pub fn all_insights(&self) -> Vec<ModuleInsight> {
        self.insights.values().flatten().cloned().collect()
    }

    pub fn insight_count(&self) -> usize {
        self.insights.values().map(Vec::len).sum()
    }

    /// Empties the store and the suggestion list.
    pub fn clear(&mut self) {
        self.insights.clear();
        self.suggestions.clear();
        debug!(profile = self.profile.name(), "analyzer cleared");
    }

    /// Returns the fixed collaboration tips for a module.
    pub fn collaboration_tips(&self, module: ModuleId) -> &'static [&'static str] {
        tips::collaboration_tips(module)
    }

    /// Scores how well the current insights align.
    pub fn analyze_coherence(&self) -> CoherenceReport {
        CoherenceCalculator::report(&self.all_insights(), &self.suggestions())
    }
}

/// Cloneable handle that serializes access to one analyzer across threads.
///
/// `add_insight` holds the lock for the whole append-analyze sequence.
#[derive(Debug, Clone)]
pub struct SharedSynergyAnalyzer {
    inner: Arc<Mutex<SynergyAnalyzer>>,
}

impl SharedSynergyAnalyzer {
    pub fn new(profile: SynergyProfile) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SynergyAnalyzer::new(profile))),
        }
    }

    // State is replaced wholesale per call, so a poisoned lock still holds a
    // consistent analyzer.
    fn lock(&self) -> MutexGuard<'_, SynergyAnalyzer> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn tracks(&self, module: ModuleId) -> bool {
        self.lock().tracks(module)
    }

    pub fn profile_name(&self) -> String {
        self.lock().profile().name().to_string()
    }

    pub fn add_insight(
        &self,
        module: ModuleId,
        insight: impl Into<String>,
        relevance: Relevance,
        shared_data: Option<Value>,
    ) -> Result<(), DomainError> {
        self.lock().add_insight(module, insight, relevance, shared_data)
    }

    pub fn record(&self, insight: ModuleInsight) -> Result<(), DomainError> {
        self.lock().record(insight)
    }

    pub fn suggestions(&self) -> Vec<CrossModuleSuggestion> {
        self.lock().suggestions()
    }

    pub fn module_insights(&self, module: ModuleId) -> Vec<ModuleInsight> {
        self.lock().module_insights(module).to_vec()
    }

    pub fn all_insights(&self) -> Vec<ModuleInsight> {
        self.lock().all_insights()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn collaboration_tips(&self, module: ModuleId) -> &'static [&'static str] {
        tips::collaboration_tips(module)
    }

    pub fn analyze_coherence(&self) -> CoherenceReport {
        self.lock().analyze_coherence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::synergy::suggestion::{Priority, SuggestionKind};
    use serde_json::json;

    fn sound_visual() -> SynergyAnalyzer {
        SynergyAnalyzer::new(SynergyProfile::sound_visual())
    }

    #[test]
    fn mood_and_lighting_produce_high_priority_sync() {
        let mut analyzer = sound_visual();
        analyzer
            .add_insight(ModuleId::Sound, "mood: tense atmosphere", Relevance::Medium, None)
            .unwrap();
        analyzer
            .add_insight(
                ModuleId::Visual,
                "dramatic lighting and color palette",
                Relevance::Medium,
                None,
            )
            .unwrap();

        let suggestions = analyzer.suggestions();
        assert!(suggestions
            .iter()
            .any(|s| s.kind == SuggestionKind::Sync && s.priority == Priority::High));
    }

    #[test]
    fn warm_lighting_and_serious_character_produce_one_balance() {
        let mut analyzer = SynergyAnalyzer::new(SynergyProfile::casting_visual());
        analyzer
            .add_insight(
                ModuleId::Visual,
                "the lighting feels golden and warm",
                Relevance::Medium,
                None,
            )
            .unwrap();
        analyzer
            .add_insight(
                ModuleId::Casting,
                "character is serious and professional",
                Relevance::Medium,
                None,
            )
            .unwrap();

        let suggestions = analyzer.suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Balance);
        assert_eq!(suggestions[0].priority, Priority::Medium);
        assert!(suggestions[0].involves(ModuleId::Casting));
        assert!(suggestions[0].involves(ModuleId::Visual));
    }

    #[test]
    fn single_module_produces_no_suggestions() {
        let mut analyzer = sound_visual();
        analyzer
            .add_insight(ModuleId::Sound, "mood and atmosphere", Relevance::High, None)
            .unwrap();
        assert!(analyzer.suggestions().is_empty());
    }

    #[test]
    fn untracked_module_is_rejected_without_mutation() {
        let mut analyzer = sound_visual();
        let err = analyzer
            .add_insight(ModuleId::Casting, "serious lead", Relevance::High, None)
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ModuleNotTracked);
        assert_eq!(analyzer.insight_count(), 0);
    }

    #[test]
    fn blank_insight_is_invalid_argument() {
        let mut analyzer = sound_visual();
        let err = analyzer
            .add_insight(ModuleId::Sound, "", Relevance::Medium, None)
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert!(analyzer.all_insights().is_empty());
    }

    #[test]
    fn module_insights_preserve_insertion_order_and_payload() {
        let mut analyzer = sound_visual();
        analyzer
            .add_insight(ModuleId::Sound, "first", Relevance::Low, Some(json!({ "cue": 1 })))
            .unwrap();
        analyzer
            .add_insight(ModuleId::Sound, "second", Relevance::High, None)
            .unwrap();

        let insights = analyzer.module_insights(ModuleId::Sound);
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].insight, "first");
        assert_eq!(insights[0].shared_data, Some(json!({ "cue": 1 })));
        assert_eq!(insights[1].insight, "second");
        assert!(analyzer.module_insights(ModuleId::Visual).is_empty());
    }

    #[test]
    fn all_insights_groups_by_canonical_module_order() {
        let mut analyzer = sound_visual();
        analyzer
            .add_insight(ModuleId::Visual, "v1", Relevance::Medium, None)
            .unwrap();
        analyzer
            .add_insight(ModuleId::Sound, "s1", Relevance::Medium, None)
            .unwrap();

        let texts: Vec<_> = analyzer
            .all_insights()
            .into_iter()
            .map(|i| i.insight)
            .collect();
        assert_eq!(texts, vec!["s1", "v1"]);
    }

    #[test]
    fn analyze_is_idempotent() {
        let mut analyzer = sound_visual();
        analyzer
            .add_insight(ModuleId::Sound, "loud intense mood", Relevance::Medium, None)
            .unwrap();
        analyzer
            .add_insight(ModuleId::Visual, "calm color grade", Relevance::Medium, None)
            .unwrap();

        analyzer.analyze();
        let first = serde_json::to_string(&analyzer.suggestions()).unwrap();
        analyzer.analyze();
        let second = serde_json::to_string(&analyzer.suggestions()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn clear_empties_store_and_suggestions() {
        let mut analyzer = sound_visual();
        analyzer
            .add_insight(ModuleId::Sound, "atmosphere", Relevance::High, None)
            .unwrap();
        analyzer
            .add_insight(ModuleId::Visual, "lighting", Relevance::High, None)
            .unwrap();
        assert!(!analyzer.suggestions().is_empty());

        analyzer.clear();

        assert!(analyzer.all_insights().is_empty());
        assert!(analyzer.suggestions().is_empty());
        assert_eq!(analyzer.analyze_coherence().score.value(), 50);
    }

    #[test]
    fn coherence_counts_high_relevance_and_priorities() {
        let mut analyzer = sound_visual();
        analyzer
            .add_insight(ModuleId::Sound, "mood is quiet", Relevance::High, None)
            .unwrap();
        analyzer
            .add_insight(ModuleId::Visual, "lighting during the action", Relevance::Medium, None)
            .unwrap();

        // one high (sync) and one low (contrast) suggestion: 50 + 10 + 5 - 3
        let report = analyzer.analyze_coherence();
        assert_eq!(report.score.value(), 62);
        assert_eq!(report.recommendations.len(), 2);
        assert_eq!(
            report.recommendations[0],
            "Synchronize the soundscape's mood with the lighting and color palette"
        );
    }

    #[test]
    fn collaboration_tips_do_not_depend_on_state() {
        let mut analyzer = sound_visual();
        let before = analyzer.collaboration_tips(ModuleId::Visual);
        analyzer
            .add_insight(ModuleId::Visual, "lighting", Relevance::High, None)
            .unwrap();
        assert_eq!(before, analyzer.collaboration_tips(ModuleId::Visual));
    }

    #[test]
    fn shared_handle_serializes_concurrent_adds() {
        let shared = SharedSynergyAnalyzer::new(SynergyProfile::sound_visual());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let analyzer = shared.clone();
                std::thread::spawn(move || {
                    let module = if i % 2 == 0 { ModuleId::Sound } else { ModuleId::Visual };
                    let text = if i % 2 == 0 { "atmosphere" } else { "lighting" };
                    analyzer.add_insight(module, text, Relevance::Medium, None).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.all_insights().len(), 8);
        assert_eq!(shared.suggestions().len(), 1);
        assert_eq!(shared.profile_name(), "sound-visual");
    }
}
