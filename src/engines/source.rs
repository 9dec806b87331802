//! Source engine support.
//!
//! Valve's engine (Half-Life 2, Portal, Team Fortress 2). Several titles
//! shipped native VR modes, so much of the required plumbing already
//! exists in the engine itself.

use super::DEFAULT_THRESHOLD;
use crate::types::{
    CompatibilityProfile, Difficulty, EngineNote, EngineSignature, PerformanceModel,
};

/// Diagnostic byte patterns for Source executables.
pub const PATTERNS: &[&[u8]] = &[
    b"Source Engine",
    b"vphysics",
    b"materialsystem",
    b"tier0.dll",
];

/// File extensions typically carrying Source binaries.
pub const EXTENSIONS: &[&str] = &["exe", "dll", "vpk"];

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
        "existing VR console variables",
        "low base render cost",
        "material system quality tiers",
    ],
    vr_comfort_score: 85,
};

/// Compatibility profile.
pub const COMPATIBILITY: CompatibilityProfile = CompatibilityProfile {
    base_score: 80,
    difficulty: Difficulty::Low,
    estimated_effort: Difficulty::Medium,
    note: EngineNote::Advantage(
        "Native VR mode shipped in several titles; much of the plumbing already exists",
    ),
};

/// Missing VR-integration work items.
pub const GAPS: &[&str] = &[
    "Re-enable dormant VR console variables",
    "HUD element repositioning to world space",
    "Viewmodel hand alignment",
    "Ladder and vehicle comfort handling",
];

/// Ordered recommendation triple.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Audit the dormant VR console variables before writing any new hook",
    "Reposition HUD elements into world space; the stock overlay sits too close",
    "Handle ladders and vehicles explicitly, both bypass the normal move code",
];
