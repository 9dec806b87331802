//! RE Engine support.
//!
//! Capcom's in-house engine (Resident Evil 7+, Monster Hunter Rise,
//! Devil May Cry 5). First-person oriented with strong frame pacing, but
//! the `via.*` object graph is proprietary and undocumented outside
//! existing adapter work.

use super::DEFAULT_THRESHOLD;
use crate::types::{
    CompatibilityProfile, Difficulty, EngineNote, EngineSignature, PerformanceModel,
};

/// Diagnostic byte patterns for RE Engine executables.
pub const PATTERNS: &[&[u8]] = &[b"RE ENGINE", b"via.render", b"via.motion", b"REEngine"];

/// File extensions typically carrying RE Engine binaries.
pub const EXTENSIONS: &[&str] = &["exe", "dll"];

/// Signature registry entry.
pub const SIGNATURE: EngineSignature = EngineSignature {
    patterns: PATTERNS,
    extensions: EXTENSIONS,
    threshold: DEFAULT_THRESHOLD,
};

/// Performance model. Comfort is high: the renderer is already tuned for
/// close-quarters first-person play.
pub const PERFORMANCE: PerformanceModel = PerformanceModel {
    base_fps: 75,
    optimization_factors: &[
        "shadow pass quality scaling",
        "checkerboard rendering fallback",
        "photogrammetry texture streaming",
    ],
    vr_comfort_score: 90,
};

/// Compatibility profile.
pub const COMPATIBILITY: CompatibilityProfile = CompatibilityProfile {
    base_score: 75,
    difficulty: Difficulty::Medium,
    estimated_effort: Difficulty::Medium,
    note: EngineNote::Risk("Proprietary via.* object graph is undocumented outside adapter work"),
};

/// Missing VR-integration work items.
pub const GAPS: &[&str] = &[
    "via.render stereo output hook",
    "Comfort vignette for horror sequences",
    "First-person body mesh culling",
    "Photogrammetry texture memory budget",
];

/// Ordered recommendation triple.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Reuse the existing adapter hooks for camera and projection matrices",
    "Implement comfort vignetting before tackling full motion controls",
    "Keep shadow quality low; the engine's shadow passes dominate VR frame time",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_patterns_exactly_meet_threshold() {
        assert_eq!(PATTERNS.len(), 4);
        assert!((PATTERNS.len() as f64 * 0.2 - SIGNATURE.threshold).abs() < 1e-9);
    }
}
