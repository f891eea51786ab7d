//! Module insights - free-text observations attributed to one creative module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{InsightId, ModuleId, Relevance, Timestamp, ValidationError};

/// A single observation produced by an AI-assisted module.
///
/// Immutable once stored in an analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInsight {
    pub id: InsightId,
    pub module: ModuleId,
    pub insight: String,
    pub relevance: Relevance,
    /// Always true for insights recorded through the analyzer.
    pub actionable: bool,
    /// Opaque payload the producing module wants to hand to its peers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_data: Option<Value>,
    pub recorded_at: Timestamp,
}

impl ModuleInsight {
    /// Creates a new insight, rejecting blank text.
    pub fn new(
        module: ModuleId,
        insight: impl Into<String>,
        relevance: Relevance,
    ) -> Result<Self, ValidationError> {
        let insight = insight.into();
        if insight.trim().is_empty() {
            return Err(ValidationError::empty_field("insight"));
        }

        Ok(Self {
            id: InsightId::new(),
            module,
            insight,
            relevance,
            actionable: true,
            shared_data: None,
            recorded_at: Timestamp::now(),
        })
    }

    /// Attaches a shared payload.
    pub fn with_shared_data(mut self, data: Value) -> Self {
        self.shared_data = Some(data);
        self
    }

    /// Returns true if the insight text contains any of the keywords.
    ///
    /// Matching is case-sensitive substring containment.
    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.insight.contains(k))
    }

    pub fn is_high_relevance(&self) -> bool {
        self.relevance == Relevance::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_insight_is_actionable_without_payload() {
        let insight = ModuleInsight::new(ModuleId::Sound, "low drone under dialogue", Relevance::Low)
            .unwrap();

        assert_eq!(insight.module, ModuleId::Sound);
        assert_eq!(insight.relevance, Relevance::Low);
        assert!(insight.actionable);
        assert!(insight.shared_data.is_none());
    }

    #[test]
    fn blank_insight_is_rejected() {
        let err = ModuleInsight::new(ModuleId::Visual, "   ", Relevance::High).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("insight"));
    }

    #[test]
    fn mentions_any_is_case_sensitive() {
        let insight =
            ModuleInsight::new(ModuleId::Visual, "Lighting is harsh", Relevance::Medium).unwrap();

        assert!(!insight.mentions_any(&["lighting"]));
        assert!(insight.mentions_any(&["Lighting", "color"]));
        assert!(insight.mentions_any(&["harsh"]));
    }

    #[test]
    fn serializes_camel_case_with_payload() {
        let insight = ModuleInsight::new(ModuleId::Casting, "lead reads older", Relevance::High)
            .unwrap()
            .with_shared_data(json!({ "actor": "A. Smith" }));

        let value = serde_json::to_value(&insight).unwrap();
        assert_eq!(value["module"], "casting");
        assert_eq!(value["relevance"], "high");
        assert_eq!(value["sharedData"]["actor"], "A. Smith");
        assert!(value.get("recordedAt").is_some());
    }
}
