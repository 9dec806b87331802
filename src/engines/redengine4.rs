//! REDengine 4 support.
//!
//! CD Projekt Red's engine (Cyberpunk 2077). Open-world streaming and a
//! ray-traced pipeline make this the heaviest render workload in the
//! registry; everything downstream of a working stereo path is tractable.

use super::DEFAULT_THRESHOLD;
use crate::types::{
    CompatibilityProfile, Difficulty, EngineNote, EngineSignature, PerformanceModel,
};

/// Diagnostic byte patterns for REDengine 4 executables.
pub const PATTERNS: &[&[u8]] = &[b"REDengine", b"RED4ext", b"redscript", b"CP77"];

/// File extensions typically carrying REDengine binaries.
pub const EXTENSIONS: &[&str] = &["exe", "dll", "archive"];

/// Signature registry entry.
pub const SIGNATURE: EngineSignature = EngineSignature {
    patterns: PATTERNS,
    extensions: EXTENSIONS,
    threshold: DEFAULT_THRESHOLD,
};

/// Performance model.
pub const PERFORMANCE: PerformanceModel = PerformanceModel {
    base_fps: 65,
    optimization_factors: &[
        "aggressive open-world LOD",
        "ray tracing fallback paths",
        "streaming budget tuning",
    ],
    vr_comfort_score: 65,
};

/// Compatibility profile.
pub const COMPATIBILITY: CompatibilityProfile = CompatibilityProfile {
    base_score: 70,
    difficulty: Difficulty::Medium,
    estimated_effort: Difficulty::High,
    note: EngineNote::Risk(
        "Ray-traced pipeline needs a dedicated stereo path before anything else works",
    ),
};

/// Missing VR-integration work items.
pub const GAPS: &[&str] = &[
    "Stereo projection for the ray-traced pipeline",
    "Open-world streaming budget for dual views",
    "Vehicle camera comfort mode",
    "Crowd density scaling",
];

/// Ordered recommendation triple.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Disable ray tracing and validate the raster fallback in stereo first",
    "Halve the streaming budget per eye before touching LOD bias",
    "Ship a vehicle comfort mode; cockpit motion is the dominant sickness report",
];
