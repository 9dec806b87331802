//! Godot support.
//!
//! Open-source engine with fully inspectable renderer internals. A
//! performance model has not been calibrated yet, so the predictor skips
//! Godot detections; detection and compatibility assessment still apply.

use super::DEFAULT_THRESHOLD;
use crate::types::{CompatibilityProfile, Difficulty, EngineNote, EngineSignature};

/// Diagnostic byte patterns for Godot executables.
pub const PATTERNS: &[&[u8]] = &[b"Godot Engine", b"GDScript", b"res://", b"ProjectSettings"];

/// File extensions typically carrying Godot binaries.
pub const EXTENSIONS: &[&str] = &["exe", "pck"];

/// Signature registry entry.
pub const SIGNATURE: EngineSignature = EngineSignature {
    patterns: PATTERNS,
    extensions: EXTENSIONS,
    threshold: DEFAULT_THRESHOLD,
};

/// Compatibility profile.
pub const COMPATIBILITY: CompatibilityProfile = CompatibilityProfile {
    base_score: 78,
    difficulty: Difficulty::Medium,
    estimated_effort: Difficulty::Medium,
    note: EngineNote::Advantage("Open-source renderer internals are fully inspectable"),
};

/// Missing VR-integration work items.
pub const GAPS: &[&str] = &[
    "XR interface activation in the exported project",
    "Viewport-per-eye configuration",
    "Input map extension for tracked controllers",
];

/// Ordered recommendation triple.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Prefer patching the exported project over binary hooks; the engine is open source",
    "Activate the built-in XR interface and verify viewport-per-eye output",
    "Extend the input map for tracked controllers rather than emulating a gamepad",
];
