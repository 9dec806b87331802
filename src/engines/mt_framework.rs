//! MT Framework support.
//!
//! Capcom's previous-generation engine (Monster Hunter World, Devil May
//! Cry 4). Console-oriented renderer, obfuscated symbol tables, and
//! third-person cameras throughout; the hardest registered target.

use super::DEFAULT_THRESHOLD;
use crate::types::{
    CompatibilityProfile, Difficulty, EngineNote, EngineSignature, PerformanceModel,
};

/// Diagnostic byte patterns for MT Framework executables.
pub const PATTERNS: &[&[u8]] = &[
    b"MT FRAMEWORK",
    b"MtFramework",
    b"rRenderTarget",
    b"nativePC",
];

/// File extensions typically carrying MT Framework binaries.
pub const EXTENSIONS: &[&str] = &["exe", "dll"];

/// Signature registry entry.
pub const SIGNATURE: EngineSignature = EngineSignature {
    patterns: PATTERNS,
    extensions: EXTENSIONS,
    threshold: DEFAULT_THRESHOLD,
};

/// Performance model. Raw throughput is good; comfort suffers from the
/// animation-driven third-person camera.
pub const PERFORMANCE: PerformanceModel = PerformanceModel {
    base_fps: 70,
    optimization_factors: &[
        "render target pool reuse",
        "fixed-function post chain bypass",
        "animation LOD reduction",
    ],
    vr_comfort_score: 70,
};

/// Compatibility profile: heavily obfuscated, console-oriented.
pub const COMPATIBILITY: CompatibilityProfile = CompatibilityProfile {
    base_score: 60,
    difficulty: Difficulty::High,
    estimated_effort: Difficulty::High,
    note: EngineNote::Risk("Console-oriented renderer with obfuscated symbol tables resists hooking"),
};

/// Missing VR-integration work items.
pub const GAPS: &[&str] = &[
    "Third-person to first-person camera conversion",
    "Render target duplication for stereo",
    "Animation-driven camera cut removal",
    "Motion-controller melee mapping",
];

/// Ordered recommendation triple.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Budget for a full third-person to first-person camera conversion",
    "Hook the render target allocator early; the engine recycles targets aggressively",
    "Strip animation-driven camera cuts; they are instant comfort failures in VR",
];
