//! Unity support.
//!
//! Unity ships a managed runtime (Mono or IL2CPP) alongside the native
//! player. Scene objects and cameras are reachable through the managed
//! layer, so a conversion rarely needs native disassembly.

use super::DEFAULT_THRESHOLD;
use crate::types::{
    CompatibilityProfile, Difficulty, EngineNote, EngineSignature, PerformanceModel,
};

/// Diagnostic byte patterns for Unity executables.
pub const PATTERNS: &[&[u8]] = &[
    b"UnityPlayer",
    b"UnityEngine",
    b"il2cpp_init",
    b"MonoBehaviour",
];

/// File extensions typically carrying Unity binaries.
pub const EXTENSIONS: &[&str] = &["exe", "dll"];

/// Signature registry entry.
pub const SIGNATURE: EngineSignature = EngineSignature {
    patterns: PATTERNS,
    extensions: EXTENSIONS,
    threshold: DEFAULT_THRESHOLD,
};

/// Performance model.
pub const PERFORMANCE: PerformanceModel = PerformanceModel {
    base_fps: 85,
    optimization_factors: &[
        "managed runtime hooks",
        "built-in XR plugin framework",
        "configurable render pipeline",
    ],
    vr_comfort_score: 80,
};

/// Compatibility profile.
pub const COMPATIBILITY: CompatibilityProfile = CompatibilityProfile {
    base_score: 85,
    difficulty: Difficulty::Low,
    estimated_effort: Difficulty::Low,
    note: EngineNote::Advantage("Managed runtime exposes scene objects without disassembly"),
};

/// Missing VR-integration work items.
pub const GAPS: &[&str] = &[
    "XR plugin bootstrap",
    "Camera rig replacement",
    "Input system rebinding",
    "Canvas UI world-space conversion",
];

/// Ordered recommendation triple.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Attach to the managed runtime and enumerate scene cameras before any native work",
    "Bootstrap the built-in XR plugin framework instead of driving the compositor manually",
    "Convert screen-space canvases to world space early; they break immersion first",
];
