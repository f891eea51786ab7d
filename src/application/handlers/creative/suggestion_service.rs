//! CreativeSuggestionService - Generative suggestions with safe fallbacks.
//!
//! Asks the AI provider for audio cues, foley cues, or mood tags for a
//! scene. Provider failures never reach the caller: each request resolves
//! to either the provider's list or a fixed default list, with the
//! sanitized failure reason attached for display.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::foundation::sanitize_ai_error;
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole};

pub const DEFAULT_AUDIO_CUES: &[&str] = &[
    "Ambient room tone",
    "Subtle underscore matching the scene mood",
    "Natural environmental sounds",
];

pub const DEFAULT_FOLEY_CUES: &[&str] = &[
    "Footsteps on the main surface",
    "Clothing movement",
    "Handling of key props",
];

pub const DEFAULT_MOOD_TAGS: &[&str] = &["neutral"];

/// Reason reported when no provider is configured.
pub const AI_DISABLED_REASON: &str = "AI suggestions are disabled";

/// Upper bound on items kept from a provider response.
pub const MAX_SUGGESTIONS: usize = 10;

const SYSTEM_PROMPT: &str = "You are an assistant for film sound and visual design. \
Respond only with a JSON array of short strings, no commentary.";

/// Scene description plus contextual parameters for a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneContext {
    pub description: String,
    #[serde(default)]
    pub mood_tags: Vec<String>,
    pub camera_movement: Option<String>,
    pub lighting: Option<String>,
}

impl SceneContext {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_mood_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mood_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_camera_movement(mut self, movement: impl Into<String>) -> Self {
        self.camera_movement = Some(movement.into());
        self
    }

    pub fn with_lighting(mut self, lighting: impl Into<String>) -> Self {
        self.lighting = Some(lighting.into());
        self
    }

    fn render(&self) -> String {
        let mut prompt = format!("Scene: {}", self.description.trim());
        if !self.mood_tags.is_empty() {
            prompt.push_str(&format!("\nMood: {}", self.mood_tags.join(", ")));
        }
        if let Some(movement) = &self.camera_movement {
            prompt.push_str(&format!("\nCamera movement: {}", movement));
        }
        if let Some(lighting) = &self.lighting {
            prompt.push_str(&format!("\nLighting: {}", lighting));
        }
        prompt
    }
}

/// Result of a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionOutcome {
    pub items: Vec<String>,
    /// Sanitized reason the defaults were used, if they were.
    pub fallback_reason: Option<String>,
}

impl SuggestionOutcome {
    fn generated(items: Vec<String>) -> Self {
        Self {
            items,
            fallback_reason: None,
        }
    }

    fn fallback(defaults: &[&str], reason: String) -> Self {
        Self {
            items: defaults.iter().map(|s| s.to_string()).collect(),
            fallback_reason: Some(reason),
        }
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Generates creative suggestions through an optional AI provider.
pub struct CreativeSuggestionService {
    provider: Option<Arc<dyn AIProvider>>,
}

impl CreativeSuggestionService {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Service that always answers with defaults.
    pub fn disabled() -> Self {
        Self { provider: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Suggests music and ambience cues for a scene.
    pub async fn suggest_audio_cues(&self, scene: &SceneContext) -> SuggestionOutcome {
        let prompt = format!(
            "{}\n\nSuggest 3 to 5 audio cues (music or ambience) for this scene.",
            scene.render()
        );
        self.request_list("audio_cues", prompt, DEFAULT_AUDIO_CUES).await
    }

    /// Suggests foley cues for a scene.
    pub async fn suggest_foley_cues(&self, scene: &SceneContext) -> SuggestionOutcome {
        let prompt = format!(
            "{}\n\nSuggest 3 to 5 foley sound effects a foley artist should record for this scene.",
            scene.render()
        );
        self.request_list("foley_cues", prompt, DEFAULT_FOLEY_CUES).await
    }

    /// Suggests one-word mood tags for a scene description.
    pub async fn suggest_mood_tags(&self, description: &str) -> SuggestionOutcome {
        let prompt = format!(
            "Scene: {}\n\nGive 3 to 5 single-word lowercase mood tags for this scene.",
            description.trim()
        );
        self.request_list("mood_tags", prompt, DEFAULT_MOOD_TAGS).await
    }

    async fn request_list(
        &self,
        kind: &'static str,
        prompt: String,
        defaults: &[&str],
    ) -> SuggestionOutcome {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => return SuggestionOutcome::fallback(defaults, AI_DISABLED_REASON.to_string()),
        };

        let request = CompletionRequest::new()
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, prompt)
            .with_temperature(0.7)
            .with_max_tokens(512)
            .expecting_json();

        let result = match provider.complete(request).await {
            Ok(response) => parse_string_list(&response.content),
            Err(err) => Err(err),
        };

        match result {
            Ok(items) => {
                debug!(kind, count = items.len(), "generated suggestions");
                SuggestionOutcome::generated(items)
            }
            Err(err) => {
                let reason = sanitize_ai_error(&err);
                warn!(kind, reason = %reason, "suggestion request failed; using defaults");
                SuggestionOutcome::fallback(defaults, reason)
            }
        }
    }
}

/// Extracts a list of strings from model output.
///
/// Accepts a JSON array (optionally inside a Markdown code fence), a JSON
/// object holding one array, or plain bullet / numbered lines.
pub fn parse_string_list(content: &str) -> Result<Vec<String>, AIError> {
    let body = strip_code_fence(content.trim());

    let items = match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(values)) => strings_from(values),
        Ok(Value::Object(map)) => map
            .into_iter()
            .find_map(|(_, v)| match v {
                Value::Array(values) => Some(strings_from(values)),
                _ => None,
            })
            .unwrap_or_default(),
        Ok(_) => Vec::new(),
        Err(_) => body.lines().filter_map(strip_list_marker).collect(),
    };

    let items: Vec<String> = items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .take(MAX_SUGGESTIONS)
        .collect();

    if items.is_empty() {
        return Err(AIError::parse("response contained no suggestions"));
    }
    Ok(items)
}

fn strings_from(values: Vec<Value>) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // drop the info string (e.g. `json`) on the opening line
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn strip_list_marker(line: &str) -> Option<String> {
    let line = line.trim();
    let line = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))
        .unwrap_or_else(|| {
            let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
            if digits > 0 {
                line[digits..]
                    .strip_prefix(". ")
                    .or_else(|| line[digits..].strip_prefix(") "))
                    .unwrap_or(line)
            } else {
                line
            }
        });
    let line = line.trim().trim_matches('"').trim();
    (!line.is_empty()).then(|| line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::foundation::REDACTION_MARKER;

    #[test]
    fn parses_plain_json_array() {
        let items = parse_string_list(r#"["rain on tin roof", "distant thunder"]"#).unwrap();
        assert_eq!(items, vec!["rain on tin roof", "distant thunder"]);
    }

    #[test]
    fn parses_fenced_json() {
        let items = parse_string_list("```json\n[\"tense\", \"cold\"]\n```").unwrap();
        assert_eq!(items, vec!["tense", "cold"]);
    }

    #[test]
    fn parses_object_wrapping_an_array() {
        let items = parse_string_list(r#"{"cues": ["door creak", 4, "glass clink"]}"#).unwrap();
        assert_eq!(items, vec!["door creak", "glass clink"]);
    }

    #[test]
    fn parses_bullets_and_numbered_lines() {
        let items = parse_string_list("- footsteps\n* keys jingling\n3. \"coat rustle\"\n\n").unwrap();
        assert_eq!(items, vec!["footsteps", "keys jingling", "coat rustle"]);
    }

    #[test]
    fn caps_item_count() {
        let many: Vec<String> = (0..20).map(|i| format!("cue {}", i)).collect();
        let items = parse_string_list(&serde_json::to_string(&many).unwrap()).unwrap();
        assert_eq!(items.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn empty_output_is_parse_error() {
        assert!(matches!(parse_string_list("[]"), Err(AIError::Parse(_))));
        assert!(matches!(parse_string_list("   "), Err(AIError::Parse(_))));
    }

    #[test]
    fn scene_context_renders_optional_fields() {
        let scene = SceneContext::new("A chase through a night market")
            .with_mood_tags(["tense", "frantic"])
            .with_camera_movement("handheld")
            .with_lighting("neon");

        let rendered = scene.render();
        assert!(rendered.starts_with("Scene: A chase through a night market"));
        assert!(rendered.contains("Mood: tense, frantic"));
        assert!(rendered.contains("Camera movement: handheld"));
        assert!(rendered.contains("Lighting: neon"));
    }

    #[tokio::test]
    async fn returns_generated_items_on_success() {
        let provider = Arc::new(MockAIProvider::new().with_response(r#"["neon hum", "crowd walla"]"#));
        let service = CreativeSuggestionService::new(provider.clone());

        let outcome = service
            .suggest_audio_cues(&SceneContext::new("night market"))
            .await;

        assert!(!outcome.used_fallback());
        assert_eq!(outcome.items, vec!["neon hum", "crowd walla"]);

        let calls = provider.get_calls();
        assert!(calls[0].json_response);
        assert!(calls[0].messages[0].content.contains("night market"));
    }

    #[tokio::test]
    async fn provider_error_falls_back_with_sanitized_reason() {
        let leaked = "key AIzaSyA-0123456789abcdefghij rejected\nstack trace";
        let provider = Arc::new(MockAIProvider::new().with_error(MockError::Unavailable {
            message: leaked.to_string(),
        }));
        let service = CreativeSuggestionService::new(provider);

        let outcome = service
            .suggest_foley_cues(&SceneContext::new("kitchen argument"))
            .await;

        assert!(outcome.used_fallback());
        assert_eq!(outcome.items.len(), DEFAULT_FOLEY_CUES.len());
        let reason = outcome.fallback_reason.unwrap();
        assert!(!reason.contains("AIzaSyA"));
        assert!(!reason.contains("stack trace"));
        assert!(reason.contains(REDACTION_MARKER));
    }

    #[tokio::test]
    async fn unparseable_output_falls_back() {
        let provider = Arc::new(MockAIProvider::new().with_response("{\"note\": \"no list here\"}"));
        let service = CreativeSuggestionService::new(provider);

        let outcome = service.suggest_mood_tags("empty hallway").await;

        assert!(outcome.used_fallback());
        assert_eq!(outcome.items, vec!["neutral"]);
    }

    #[tokio::test]
    async fn disabled_service_uses_defaults() {
        let service = CreativeSuggestionService::disabled();
        assert!(!service.is_enabled());

        let outcome = service.suggest_mood_tags("anything").await;

        assert_eq!(outcome.fallback_reason.as_deref(), Some(AI_DISABLED_REASON));
        assert_eq!(outcome.items, vec!["neutral"]);
    }
}
