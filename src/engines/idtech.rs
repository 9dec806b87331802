//! id Tech support.
//!
//! id Software's engine family (DOOM 2016+, Wolfenstein). A lean forward
//! renderer already tuned for very high frame rates, which is most of the
//! battle for VR.

use super::DEFAULT_THRESHOLD;
use crate::types::{
    CompatibilityProfile, Difficulty, EngineNote, EngineSignature, PerformanceModel,
};

/// Diagnostic byte patterns for id Tech executables.
pub const PATTERNS: &[&[u8]] = &[b"idTech", b"idRenderSystem", b"idlib", b"MegaTexture"];

/// File extensions typically carrying id Tech binaries.
pub const EXTENSIONS: &[&str] = &["exe", "dll"];

/// Signature registry entry.
pub const SIGNATURE: EngineSignature = EngineSignature {
    patterns: PATTERNS,
    extensions: EXTENSIONS,
    threshold: DEFAULT_THRESHOLD,
};

/// Performance model.
pub const PERFORMANCE: PerformanceModel = PerformanceModel {
    base_fps: 95,
    optimization_factors: &[
        "forward renderer headroom",
        "megatexture residency tuning",
        "fixed frame-time pipeline",
    ],
    vr_comfort_score: 85,
};

/// Compatibility profile.
pub const COMPATIBILITY: CompatibilityProfile = CompatibilityProfile {
    base_score: 80,
    difficulty: Difficulty::Medium,
    estimated_effort: Difficulty::Medium,
    note: EngineNote::Advantage("Lean forward renderer already tuned for very high frame rates"),
};

/// Missing VR-integration work items.
pub const GAPS: &[&str] = &[
    "Stereo view matrix injection",
    "Megatexture residency for dual views",
    "Weapon viewmodel depth adjustment",
    "Snap-turn and vignette comfort options",
];

/// Ordered recommendation triple.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Inject stereo view matrices at the render system boundary, not per material",
    "Double the megatexture residency budget before profiling anything else",
    "Keep the engine's fixed frame-time pipeline; do not decouple the simulation rate",
];
