//! Demo session: records sample insights and prints the analysis as JSON.

use std::error::Error;
use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use scene_synergy::adapters::{GeminiConfig, GeminiProvider, InMemorySpeechSynthesizer};
use scene_synergy::application::{
    CreativeSuggestionService, CreativeWorkspace, NarrationDefaults, NarrationService,
    SceneContext,
};
use scene_synergy::config::AppConfig;
use scene_synergy::domain::foundation::{ModuleId, Relevance};
use scene_synergy::domain::speech::SpeechOptions;
use scene_synergy::ports::{AIProvider, SpeechSynthesizer};

const SAMPLE_SCENE: &str =
    "A detective confronts a friendly informant in a dim warehouse at night";

const SAMPLE_INSIGHTS: &[(ModuleId, &str, Relevance)] = &[
    (ModuleId::Sound, "Tense atmosphere with low drones", Relevance::High),
    (ModuleId::Sound, "Slow rhythm under the dialogue", Relevance::Medium),
    (ModuleId::Visual, "Single-source lighting, cold and blue", Relevance::High),
    (ModuleId::Visual, "Slow camera movement toward the informant", Relevance::Medium),
    (ModuleId::Casting, "Informant played warm and friendly", Relevance::Medium),
];

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scene_synergy=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> AppConfig {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "failed to load configuration; using defaults");
            return AppConfig::default();
        }
    };
    if let Err(err) = config.validate() {
        warn!(error = %err, "invalid configuration; using defaults");
        return AppConfig::default();
    }
    config
}

fn suggestion_service(config: &AppConfig) -> CreativeSuggestionService {
    let Some(key) = config
        .ai
        .gemini_api_key
        .as_deref()
        .filter(|_| config.ai_suggestions_enabled())
    else {
        return CreativeSuggestionService::disabled();
    };

    let gemini = GeminiConfig::new(key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout())
        .with_max_retries(config.ai.max_retries);
    match GeminiProvider::new(gemini) {
        Ok(provider) => CreativeSuggestionService::new(Arc::new(provider) as Arc<dyn AIProvider>),
        Err(err) => {
            warn!(error = %err, "failed to build Gemini client; AI suggestions disabled");
            CreativeSuggestionService::disabled()
        }
    }
}

fn narration_service(config: &AppConfig) -> NarrationService {
    let synthesizer = config.speech.enabled.then(|| {
        Arc::new(InMemorySpeechSynthesizer::default()) as Arc<dyn SpeechSynthesizer>
    });
    NarrationService::new(
        synthesizer,
        NarrationDefaults {
            rate: config.speech.default_rate,
            pitch: config.speech.default_pitch,
            preferred_voice: config.speech.preferred_voice.clone(),
        },
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let config = load_config();

    let workspace = CreativeWorkspace::default();
    for (module, text, relevance) in SAMPLE_INSIGHTS {
        workspace.record_insight(*module, *text, *relevance, None)?;
    }
    info!(
        suggestions = workspace.suggestions().len(),
        "sample session recorded"
    );

    let suggestions = suggestion_service(&config);
    let scene = SceneContext::new(SAMPLE_SCENE)
        .with_mood_tags(["tense", "noir"])
        .with_lighting("cold blue key light");
    let audio_cues = suggestions.suggest_audio_cues(&scene).await;
    let mood_tags = suggestions.suggest_mood_tags(SAMPLE_SCENE).await;
    if config.features.verbose_errors {
        for (kind, outcome) in [("audio cues", &audio_cues), ("mood tags", &mood_tags)] {
            if let Some(reason) = &outcome.fallback_reason {
                info!(kind, reason = %reason, "using default suggestions");
            }
        }
    }

    let narration = narration_service(&config);
    if let Some(top) = workspace.suggestions().first() {
        narration.speak(&top.suggestion, SpeechOptions::default()).await;
    }

    let report = json!({
        "profiles": workspace.summary(),
        "suggestions": workspace.suggestions(),
        "audioCues": audio_cues,
        "moodTags": mood_tags,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
