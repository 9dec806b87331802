//! Static per-engine registries.
//!
//! Each engine gets one module holding its complete static record: byte
//! signatures, performance model, compatibility profile, gap checklist,
//! and recommendation text. Adding an engine means adding a module and a
//! variant here; no other component changes.
//!
//! `Engine::ALL` fixes registration order. The detector relies on this
//! slice (not on any map iteration order) to break confidence ties, so
//! the order here is part of the report format.

pub mod cryengine;
pub mod godot;
pub mod idtech;
pub mod mt_framework;
pub mod re_engine;
pub mod redengine4;
pub mod source;
pub mod unity;
pub mod unreal;

use crate::error::{AnalyzerError, Result};
use crate::types::{CompatibilityProfile, EngineSignature, PerformanceModel};
use serde::{Serialize, Serializer};
use std::fmt;

/// Confidence threshold shared by all current engines. Per-engine values
/// are supported; every signature record carries its own copy.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Known game engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Engine {
    /// Epic's Unreal Engine (UE4/UE5).
    UnrealEngine,
    /// Unity, both Mono and IL2CPP builds.
    Unity,
    /// Capcom's RE Engine.
    ReEngine,
    /// CD Projekt's REDengine 4.
    Redengine4,
    /// Capcom's MT Framework.
    MtFramework,
    /// Crytek's CryEngine.
    CryEngine,
    /// id Software's id Tech family.
    IdTech,
    /// Valve's Source engine.
    Source,
    /// The Godot engine.
    Godot,
}

impl Engine {
    /// Every registered engine, in registration order.
    pub const ALL: &'static [Engine] = &[
        Engine::UnrealEngine,
        Engine::Unity,
        Engine::ReEngine,
        Engine::Redengine4,
        Engine::MtFramework,
        Engine::CryEngine,
        Engine::IdTech,
        Engine::Source,
        Engine::Godot,
    ];

    /// Stable identifier used as the JSON map key.
    pub fn key(self) -> &'static str {
        match self {
            Engine::UnrealEngine => "unreal_engine",
            Engine::Unity => "unity",
            Engine::ReEngine => "re_engine",
            Engine::Redengine4 => "redengine4",
            Engine::MtFramework => "mt_framework",
            Engine::CryEngine => "cryengine",
            Engine::IdTech => "id_tech",
            Engine::Source => "source",
            Engine::Godot => "godot",
        }
    }

    /// Human-readable engine name.
    pub fn name(self) -> &'static str {
        match self {
            Engine::UnrealEngine => "Unreal Engine",
            Engine::Unity => "Unity",
            Engine::ReEngine => "RE Engine",
            Engine::Redengine4 => "REDengine 4",
            Engine::MtFramework => "MT Framework",
            Engine::CryEngine => "CryEngine",
            Engine::IdTech => "id Tech",
            Engine::Source => "Source",
            Engine::Godot => "Godot",
        }
    }

    /// Signature record: byte patterns, extensions, threshold.
    pub fn signature(self) -> &'static EngineSignature {
        match self {
            Engine::UnrealEngine => &unreal::SIGNATURE,
            Engine::Unity => &unity::SIGNATURE,
            Engine::ReEngine => &re_engine::SIGNATURE,
            Engine::Redengine4 => &redengine4::SIGNATURE,
            Engine::MtFramework => &mt_framework::SIGNATURE,
            Engine::CryEngine => &cryengine::SIGNATURE,
            Engine::IdTech => &idtech::SIGNATURE,
            Engine::Source => &source::SIGNATURE,
            Engine::Godot => &godot::SIGNATURE,
        }
    }

    /// Performance model, if one has been calibrated for this engine.
    pub fn performance(self) -> Option<&'static PerformanceModel> {
        match self {
            Engine::UnrealEngine => Some(&unreal::PERFORMANCE),
            Engine::Unity => Some(&unity::PERFORMANCE),
            Engine::ReEngine => Some(&re_engine::PERFORMANCE),
            Engine::Redengine4 => Some(&redengine4::PERFORMANCE),
            Engine::MtFramework => Some(&mt_framework::PERFORMANCE),
            Engine::CryEngine => Some(&cryengine::PERFORMANCE),
            Engine::IdTech => Some(&idtech::PERFORMANCE),
            Engine::Source => Some(&source::PERFORMANCE),
            // No calibrated model yet; the predictor skips it.
            Engine::Godot => None,
        }
    }

    /// Compatibility profile: base score, tiers, and the single
    /// engine-specific risk or advantage.
    pub fn compatibility(self) -> &'static CompatibilityProfile {
        match self {
            Engine::UnrealEngine => &unreal::COMPATIBILITY,
            Engine::Unity => &unity::COMPATIBILITY,
            Engine::ReEngine => &re_engine::COMPATIBILITY,
            Engine::Redengine4 => &redengine4::COMPATIBILITY,
            Engine::MtFramework => &mt_framework::COMPATIBILITY,
            Engine::CryEngine => &cryengine::COMPATIBILITY,
            Engine::IdTech => &idtech::COMPATIBILITY,
            Engine::Source => &source::COMPATIBILITY,
            Engine::Godot => &godot::COMPATIBILITY,
        }
    }

    /// Missing VR-integration checklist.
    pub fn gaps(self) -> &'static [&'static str] {
        match self {
            Engine::UnrealEngine => unreal::GAPS,
            Engine::Unity => unity::GAPS,
            Engine::ReEngine => re_engine::GAPS,
            Engine::Redengine4 => redengine4::GAPS,
            Engine::MtFramework => mt_framework::GAPS,
            Engine::CryEngine => cryengine::GAPS,
            Engine::IdTech => idtech::GAPS,
            Engine::Source => source::GAPS,
            Engine::Godot => godot::GAPS,
        }
    }

    /// Ordered engine-specific recommendation triple.
    pub fn recommendations(self) -> &'static [&'static str; 3] {
        match self {
            Engine::UnrealEngine => &unreal::RECOMMENDATIONS,
            Engine::Unity => &unity::RECOMMENDATIONS,
            Engine::ReEngine => &re_engine::RECOMMENDATIONS,
            Engine::Redengine4 => &redengine4::RECOMMENDATIONS,
            Engine::MtFramework => &mt_framework::RECOMMENDATIONS,
            Engine::CryEngine => &cryengine::RECOMMENDATIONS,
            Engine::IdTech => &idtech::RECOMMENDATIONS,
            Engine::Source => &source::RECOMMENDATIONS,
            Engine::Godot => &godot::RECOMMENDATIONS,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Engine {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Validate every static registry entry.
///
/// Malformed registry data is a programming error; callers run this once
/// at startup and abort on failure rather than degrading per analysis.
pub fn validate_registries() -> Result<()> {
    for &engine in Engine::ALL {
        let sig = engine.signature();
        if sig.patterns.is_empty() {
            return Err(invalid(engine, "empty pattern list"));
        }
        if sig.patterns.iter().any(|p| p.is_empty()) {
            return Err(invalid(engine, "empty byte pattern"));
        }
        if !(sig.threshold > 0.0 && sig.threshold <= 1.0) {
            return Err(invalid(engine, "threshold outside (0, 1]"));
        }
        if let Some(model) = engine.performance() {
            if model.base_fps == 0 {
                return Err(invalid(engine, "zero base performance"));
            }
            if model.vr_comfort_score > 100 {
                return Err(invalid(engine, "comfort score above 100"));
            }
        }
        let profile = engine.compatibility();
        if profile.base_score > 100 {
            return Err(invalid(engine, "base compatibility score above 100"));
        }
        if engine.gaps().is_empty() {
            return Err(invalid(engine, "empty gap checklist"));
        }
    }
    Ok(())
}

fn invalid(engine: Engine, message: &str) -> AnalyzerError {
    AnalyzerError::InvalidRegistry {
        engine: engine.key().to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_is_stable() {
        assert_eq!(Engine::ALL[0], Engine::UnrealEngine);
        assert_eq!(Engine::ALL.len(), 9);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Engine::ALL.iter().map(|e| e.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Engine::ALL.len());
    }

    #[test]
    fn test_registries_validate() {
        validate_registries().unwrap();
    }

    #[test]
    fn test_all_thresholds_currently_default() {
        for &engine in Engine::ALL {
            assert_eq!(engine.signature().threshold, DEFAULT_THRESHOLD);
        }
    }

    #[test]
    fn test_engine_serializes_as_key() {
        let json = serde_json::to_string(&Engine::Redengine4).unwrap();
        assert_eq!(json, "\"redengine4\"");
    }
}
