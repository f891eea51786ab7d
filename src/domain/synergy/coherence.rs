//! Coherence scoring across modules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::insight::ModuleInsight;
use super::suggestion::{CrossModuleSuggestion, Priority};

/// Score before any adjustments.
pub const COHERENCE_BASE_SCORE: i32 = 50;

/// Added per high-relevance insight.
pub const HIGH_RELEVANCE_BONUS: i32 = 10;

/// Added per high-priority suggestion.
pub const HIGH_PRIORITY_BONUS: i32 = 5;

/// Subtracted per low-priority suggestion.
pub const LOW_PRIORITY_PENALTY: i32 = 3;

/// High-priority suggestion count at which a weakness is reported.
pub const HIGH_PRIORITY_WEAKNESS_THRESHOLD: usize = 2;

/// Maximum number of recommendations in a report.
pub const MAX_RECOMMENDATIONS: usize = 3;

const STRENGTHS: &[&str] = &[
    "Modules are sharing insights through a common store",
    "Cross-module rules run on every new insight",
    "Suggestions are ranked so the most important alignment comes first",
];

pub const WEAKNESS_NO_SYNERGY: &str = "No cross-module synergies detected yet";
pub const WEAKNESS_HIGH_PRIORITY: &str =
    "Several high-priority alignment opportunities are still open";

/// Summary of how well the current insights align.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceReport {
    pub score: Percentage,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Calculator for coherence reports.
pub struct CoherenceCalculator;

impl CoherenceCalculator {
    /// Computes the bounded coherence score.
    ///
    /// # Edge Cases
    /// - No insights and no suggestions: 50
    /// - Result is clamped to 0..=100
    pub fn compute_score(
        insights: &[ModuleInsight],
        suggestions: &[CrossModuleSuggestion],
    ) -> Percentage {
        let high_insights = insights.iter().filter(|i| i.is_high_relevance()).count() as i32;
        let high_suggestions = count_priority(suggestions, Priority::High) as i32;
        let low_suggestions = count_priority(suggestions, Priority::Low) as i32;

        let raw = COHERENCE_BASE_SCORE
            .saturating_add(high_insights.saturating_mul(HIGH_RELEVANCE_BONUS))
            .saturating_add(high_suggestions.saturating_mul(HIGH_PRIORITY_BONUS))
            .saturating_sub(low_suggestions.saturating_mul(LOW_PRIORITY_PENALTY));

        Percentage::saturating_from(raw)
    }

    /// Builds the full report. `ranked` must already be sorted by priority.
    pub fn report(
        insights: &[ModuleInsight],
        ranked: &[CrossModuleSuggestion],
    ) -> CoherenceReport {
        let mut weaknesses = Vec::new();
        if ranked.is_empty() {
            weaknesses.push(WEAKNESS_NO_SYNERGY.to_string());
        }
        if count_priority(ranked, Priority::High) >= HIGH_PRIORITY_WEAKNESS_THRESHOLD {
            weaknesses.push(WEAKNESS_HIGH_PRIORITY.to_string());
        }

        CoherenceReport {
            score: Self::compute_score(insights, ranked),
            strengths: STRENGTHS.iter().map(|s| s.to_string()).collect(),
            weaknesses,
            recommendations: ranked
                .iter()
                .take(MAX_RECOMMENDATIONS)
                .map(|s| s.suggestion.clone())
                .collect(),
        }
    }
}

fn count_priority(suggestions: &[CrossModuleSuggestion], priority: Priority) -> usize {
    suggestions.iter().filter(|s| s.priority == priority).count()
}
