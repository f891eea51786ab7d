//! Declarative synergy rules and the profiles that group them.
//!
//! A rule pairs two keyword sets with a suggestion template. It fires when
//! any insight of its first module mentions any of `keywords_a` and any
//! insight of its second module mentions any of `keywords_b`. Adding a
//! behavior means adding a record to a profile table, not new control flow.

use crate::domain::foundation::{ModuleId, ValidationError};

use super::insight::ModuleInsight;
use super::suggestion::{CrossModuleSuggestion, Priority, SuggestionKind};

/// A single keyword-matching rule between two modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynergyRule {
    pub name: &'static str,
    pub kind: SuggestionKind,
    pub modules: (ModuleId, ModuleId),
    pub keywords_a: &'static [&'static str],
    pub keywords_b: &'static [&'static str],
    pub suggestion: &'static str,
    pub rationale: &'static str,
    pub priority: Priority,
}

impl SynergyRule {
    /// Returns true if this rule applies to the unordered pair `(x, y)`.
    pub fn covers_pair(&self, x: ModuleId, y: ModuleId) -> bool {
        let (a, b) = self.modules;
        (a == x && b == y) || (a == y && b == x)
    }

    /// Evaluates the rule against the insights of its two modules.
    pub fn evaluate(
        &self,
        insights_a: &[ModuleInsight],
        insights_b: &[ModuleInsight],
    ) -> Option<CrossModuleSuggestion> {
        let a_matches = insights_a.iter().any(|i| i.mentions_any(self.keywords_a));
        let b_matches = insights_b.iter().any(|i| i.mentions_any(self.keywords_b));

        (a_matches && b_matches).then(|| CrossModuleSuggestion {
            kind: self.kind,
            modules: vec![self.modules.0, self.modules.1],
            suggestion: self.suggestion.to_string(),
            rationale: self.rationale.to_string(),
            priority: self.priority,
        })
    }
}

const SOUND_VISUAL_RULES: &[SynergyRule] = &[
    SynergyRule {
        name: "mood-lighting-sync",
        kind: SuggestionKind::Sync,
        modules: (ModuleId::Sound, ModuleId::Visual),
        keywords_a: &["mood", "atmosphere"],
        keywords_b: &["lighting", "color"],
        suggestion: "Synchronize the soundscape's mood with the lighting and color palette",
        rationale: "Sound atmosphere and visual lighting both carry the emotional tone of the scene; aligning them reinforces it",
        priority: Priority::High,
    },
    SynergyRule {
        name: "rhythm-camera-enhance",
        kind: SuggestionKind::Enhance,
        modules: (ModuleId::Sound, ModuleId::Visual),
        keywords_a: &["rhythm", "tempo", "beat"],
        keywords_b: &["camera", "movement", "cut"],
        suggestion: "Time camera moves and cuts to the musical rhythm",
        rationale: "Picture edits that land on the beat make the score feel intentional and drive pacing",
        priority: Priority::Medium,
    },
    SynergyRule {
        name: "intensity-calm-balance",
        kind: SuggestionKind::Balance,
        modules: (ModuleId::Sound, ModuleId::Visual),
        keywords_a: &["loud", "intense", "aggressive"],
        keywords_b: &["calm", "soft", "muted"],
        suggestion: "Balance the intense audio against the calm visuals",
        rationale: "A loud mix over restrained imagery can read as a mismatch unless the tension is deliberate",
        priority: Priority::Medium,
    },
    SynergyRule {
        name: "silence-action-contrast",
        kind: SuggestionKind::Contrast,
        modules: (ModuleId::Sound, ModuleId::Visual),
        keywords_a: &["silence", "quiet"],
        keywords_b: &["action", "explosion", "chaos"],
        suggestion: "Use silence against the on-screen action for impact",
        rationale: "Dropping the sound out under heavy action is a classic contrast that heightens the moment",
        priority: Priority::Low,
    },
];

const CASTING_VISUAL_RULES: &[SynergyRule] = &[
    SynergyRule {
        name: "wardrobe-palette-enhance",
        kind: SuggestionKind::Enhance,
        modules: (ModuleId::Casting, ModuleId::Visual),
        keywords_a: &["costume", "wardrobe"],
        keywords_b: &["color", "palette"],
        suggestion: "Coordinate wardrobe choices with the scene's color palette",
        rationale: "Costume colors that sit inside the palette keep performers integrated with the frame",
        priority: Priority::High,
    },
    SynergyRule {
        name: "energy-movement-sync",
        kind: SuggestionKind::Sync,
        modules: (ModuleId::Casting, ModuleId::Visual),
        keywords_a: &["energetic", "dynamic"],
        keywords_b: &["movement", "camera"],
        suggestion: "Match camera movement to the performer's energy",
        rationale: "A dynamic performance reads stronger when the camera moves with it",
        priority: Priority::Medium,
    },
    SynergyRule {
        name: "serious-warm-balance",
        kind: SuggestionKind::Balance,
        modules: (ModuleId::Casting, ModuleId::Visual),
        keywords_a: &["serious", "professional"],
        keywords_b: &["warm", "golden"],
        suggestion: "Balance the character's serious presence with the warm lighting",
        rationale: "Warm, golden light softens a serious performance; decide whether that softening is wanted",
        priority: Priority::Medium,
    },
    SynergyRule {
        name: "friendly-cold-contrast",
        kind: SuggestionKind::Contrast,
        modules: (ModuleId::Casting, ModuleId::Visual),
        keywords_a: &["friendly", "warm"],
        keywords_b: &["cold", "dark", "shadow"],
        suggestion: "Play the friendly character against the cold visual tone",
        rationale: "A warm performer in a cold frame creates contrast that can foreshadow conflict",
        priority: Priority::Low,
    },
];

/// A named set of tracked modules and the rules evaluated across them.
#[derive(Debug, Clone)]
pub struct SynergyProfile {
    name: String,
    modules: Vec<ModuleId>,
    rules: Vec<SynergyRule>,
}

impl SynergyProfile {
    /// Creates a profile, rejecting rules that reference untracked or identical modules.
    pub fn new(
        name: impl Into<String>,
        modules: Vec<ModuleId>,
        rules: Vec<SynergyRule>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if modules.len() < 2 {
            return Err(ValidationError::invalid_format(
                "modules",
                "a profile must track at least two modules",
            ));
        }

        for rule in &rules {
            let (a, b) = rule.modules;
            if a == b {
                return Err(ValidationError::invalid_format(
                    "rules",
                    format!("rule '{}' pairs {} with itself", rule.name, a),
                ));
            }
            if !modules.contains(&a) || !modules.contains(&b) {
                return Err(ValidationError::invalid_format(
                    "rules",
                    format!("rule '{}' references a module not tracked by '{}'", rule.name, name),
                ));
            }
        }

        let mut tracked = Vec::with_capacity(modules.len());
        for module in modules {
            if !tracked.contains(&module) {
                tracked.push(module);
            }
        }

        Ok(Self {
            name,
            modules: tracked,
            rules,
        })
    }

    /// Sound design and visual design.
    pub fn sound_visual() -> Self {
        Self {
            name: "sound-visual".to_string(),
            modules: vec![ModuleId::Sound, ModuleId::Visual],
            rules: SOUND_VISUAL_RULES.to_vec(),
        }
    }

    /// Casting and visual design.
    pub fn casting_visual() -> Self {
        Self {
            name: "casting-visual".to_string(),
            modules: vec![ModuleId::Casting, ModuleId::Visual],
            rules: CASTING_VISUAL_RULES.to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modules(&self) -> &[ModuleId] {
        &self.modules
    }

    pub fn rules(&self) -> &[SynergyRule] {
        &self.rules
    }

    pub fn tracks(&self, module: ModuleId) -> bool {
        self.modules.contains(&module)
    }

    /// Unordered pairs of tracked modules, in tracking order.
    pub fn module_pairs(&self) -> Vec<(ModuleId, ModuleId)> {
        let mut pairs = Vec::new();
        for (i, &x) in self.modules.iter().enumerate() {
            for &y in &self.modules[i + 1..] {
                pairs.push((x, y));
            }
        }
        pairs
    }
}
