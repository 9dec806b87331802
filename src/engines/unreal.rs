//! Unreal Engine support.
//!
//! Epic's engine family (UE4/UE5). The best-understood conversion target:
//! injection through the UObject layer is well established and the engine
//! ships a native stereo rendering path that conversions can reuse.

use super::DEFAULT_THRESHOLD;
use crate::types::{
    CompatibilityProfile, Difficulty, EngineNote, EngineSignature, PerformanceModel,
};

/// Diagnostic byte patterns for Unreal Engine executables.
pub const PATTERNS: &[&[u8]] = &[
    b"UnrealEngine",
    b"UE4Game",
    b"UE5Game",
    b"UnrealPak",
    b"ShaderCompileWorker",
];

/// File extensions typically carrying Unreal binaries.
pub const EXTENSIONS: &[&str] = &["exe", "dll", "pak"];

/// Signature registry entry.
pub const SIGNATURE: EngineSignature = EngineSignature {
    patterns: PATTERNS,
    extensions: EXTENSIONS,
    threshold: DEFAULT_THRESHOLD,
};

/// Performance model.
pub const PERFORMANCE: PerformanceModel = PerformanceModel {
    base_fps: 90,
    optimization_factors: &[
        "native stereo rendering path",
        "scalable LOD and resolution controls",
        "mature plugin injection surface",
    ],
    vr_comfort_score: 85,
};

/// Compatibility profile: well-documented, widely adapted.
pub const COMPATIBILITY: CompatibilityProfile = CompatibilityProfile {
    base_score: 90,
    difficulty: Difficulty::Low,
    estimated_effort: Difficulty::Low,
    note: EngineNote::Advantage(
        "Proven UObject injection path and a large VR modding ecosystem",
    ),
};

/// Missing VR-integration work items.
pub const GAPS: &[&str] = &[
    "Stereo render target hook",
    "Head-tracked camera override",
    "Motion controller input bindings",
    "World-space HUD reprojection",
];

/// Ordered recommendation triple.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Inject through the established UObject hooking path rather than raw code patching",
    "Enable the engine's native stereo rendering before attempting a custom renderer",
    "Map existing gamepad bindings onto motion controllers as a first pass",
];
