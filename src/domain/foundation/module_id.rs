//! ModuleId enum naming the AI-assisted creative modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The creative modules that produce insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    Sound,
    Visual,
    Casting,
}

impl ModuleId {
    /// Returns all modules in canonical order.
    pub fn all() -> &'static [ModuleId] {
        &[ModuleId::Sound, ModuleId::Visual, ModuleId::Casting]
    }

    /// Returns the wire identifier (`sound`, `visual`, `casting`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Sound => "sound",
            ModuleId::Visual => "visual",
            ModuleId::Casting => "casting",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModuleId::Sound => "Sound Design",
            ModuleId::Visual => "Visual Design",
            ModuleId::Casting => "Casting",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ModuleId::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| ValidationError::invalid_format("module", format!("unknown module '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_modules_in_canonical_order() {
        assert_eq!(
            ModuleId::all(),
            &[ModuleId::Sound, ModuleId::Visual, ModuleId::Casting]
        );
    }

    #[test]
    fn parses_known_identifiers_case_insensitively() {
        assert_eq!("sound".parse::<ModuleId>().unwrap(), ModuleId::Sound);
        assert_eq!(" Visual ".parse::<ModuleId>().unwrap(), ModuleId::Visual);
        assert_eq!("CASTING".parse::<ModuleId>().unwrap(), ModuleId::Casting);
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "lighting".parse::<ModuleId>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "module"));
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&ModuleId::Casting).unwrap(), "\"casting\"");
        let parsed: ModuleId = serde_json::from_str("\"sound\"").unwrap();
        assert_eq!(parsed, ModuleId::Sound);
    }

    #[test]
    fn display_uses_wire_identifier() {
        assert_eq!(ModuleId::Visual.to_string(), "visual");
        assert_eq!(ModuleId::Visual.display_name(), "Visual Design");
    }
}
