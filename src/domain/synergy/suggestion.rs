//! Cross-module suggestions produced by rule evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ModuleId;

/// How the involved modules should relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Sync,
    Contrast,
    Enhance,
    Balance,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Sync => "sync",
            SuggestionKind::Contrast => "contrast",
            SuggestionKind::Enhance => "enhance",
            SuggestionKind::Balance => "balance",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority level of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric rank used for ordering (high = 3, medium = 2, low = 1).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// A recommendation for reconciling or reinforcing two modules' outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossModuleSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Involved modules, in the order the producing rule declares them.
    pub modules: Vec<ModuleId>,
    pub suggestion: String,
    pub rationale: String,
    pub priority: Priority,
}

impl CrossModuleSuggestion {
    /// Returns true if the suggestion references the given module.
    pub fn involves(&self, module: ModuleId) -> bool {
        self.modules.contains(&module)
    }
}

/// Sorts suggestions by descending priority rank, keeping evaluation order on ties.
pub fn rank_suggestions(suggestions: &[CrossModuleSuggestion]) -> Vec<CrossModuleSuggestion> {
    let mut ranked = suggestions.to_vec();
    // sort_by_key is stable
    ranked.sort_by_key(|s| std::cmp::Reverse(s.priority.rank()));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(text: &str, priority: Priority) -> CrossModuleSuggestion {
        CrossModuleSuggestion {
            kind: SuggestionKind::Enhance,
            modules: vec![ModuleId::Sound, ModuleId::Visual],
            suggestion: text.to_string(),
            rationale: String::new(),
            priority,
        }
    }

    #[test]
    fn priority_ranks() {
        assert_eq!(Priority::High.rank(), 3);
        assert_eq!(Priority::Medium.rank(), 2);
        assert_eq!(Priority::Low.rank(), 1);
    }

    #[test]
    fn rank_suggestions_orders_high_first_and_is_stable() {
        let input = vec![
            suggestion("low-1", Priority::Low),
            suggestion("med-1", Priority::Medium),
            suggestion("high-1", Priority::High),
            suggestion("med-2", Priority::Medium),
            suggestion("high-2", Priority::High),
        ];

        let ranked: Vec<_> = rank_suggestions(&input)
            .into_iter()
            .map(|s| s.suggestion)
            .collect();

        assert_eq!(ranked, vec!["high-1", "high-2", "med-1", "med-2", "low-1"]);
    }

    #[test]
    fn serializes_kind_as_type_field() {
        let json = serde_json::to_value(suggestion("x", Priority::High)).unwrap();
        assert_eq!(json["type"], "enhance");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["modules"], serde_json::json!(["sound", "visual"]));
    }

    #[test]
    fn involves_checks_modules() {
        let s = suggestion("x", Priority::Low);
        assert!(s.involves(ModuleId::Sound));
        assert!(!s.involves(ModuleId::Casting));
    }
}
