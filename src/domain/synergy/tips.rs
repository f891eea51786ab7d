//! Static collaboration advice per module.

use crate::domain::foundation::ModuleId;

const SOUND_TIPS: &[&str] = &[
    "Share mood and atmosphere notes with visual design before the lighting pass",
    "Flag musical tempo changes so camera moves can be cut on the beat",
    "Describe where silence is planned so picture can lean into it",
];

const VISUAL_TIPS: &[&str] = &[
    "Publish the color palette early so wardrobe and sound can align with it",
    "Note lighting temperature (warm or cold) for casting and sound to react to",
    "Call out planned camera movement so performances and score can match its energy",
];

const CASTING_TIPS: &[&str] = &[
    "Describe each performer's energy and demeanor in concrete terms",
    "Share wardrobe and costume notes with visual design for palette checks",
    "Mention when a character should read against the scene's visual tone",
];

/// Returns the fixed collaboration tips for a module.
pub fn collaboration_tips(module: ModuleId) -> &'static [&'static str] {
    match module {
        ModuleId::Sound => SOUND_TIPS,
        ModuleId::Visual => VISUAL_TIPS,
        ModuleId::Casting => CASTING_TIPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_module_has_tips() {
        for module in ModuleId::all() {
            assert_eq!(collaboration_tips(*module).len(), 3);
        }
    }

    #[test]
    fn tips_differ_per_module() {
        assert_ne!(
            collaboration_tips(ModuleId::Sound),
            collaboration_tips(ModuleId::Casting)
        );
    }
}
