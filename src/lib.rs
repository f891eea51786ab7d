//! Scene Synergy - Cross-module creative insight analysis
//!
//! Sound, visual, and casting modules record free-text insights about a
//! scene. Analyzers cross-reference them with keyword rules to produce
//! prioritized alignment suggestions and a coherence report. Generative
//! cue suggestions and speech narration sit behind ports and degrade to
//! defaults or no-ops when their capabilities are unavailable.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
