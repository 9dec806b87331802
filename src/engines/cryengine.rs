//! CryEngine support.
//!
//! Crytek's engine (Crysis, Hunt: Showdown). The legacy renderer
//! entangles post-processing with the main pass, which makes splitting
//! the frame into two views more invasive than on newer engines.

use super::DEFAULT_THRESHOLD;
use crate::types::{
    CompatibilityProfile, Difficulty, EngineNote, EngineSignature, PerformanceModel,
};

/// Diagnostic byte patterns for CryEngine executables.
pub const PATTERNS: &[&[u8]] = &[b"CryEngine", b"CrySystem", b"CryRenderD3D", b"cryasset"];

/// File extensions typically carrying CryEngine binaries.
pub const EXTENSIONS: &[&str] = &["exe", "dll", "pak"];

/// Signature registry entry.
pub const SIGNATURE: EngineSignature = EngineSignature {
    patterns: PATTERNS,
    extensions: EXTENSIONS,
    threshold: DEFAULT_THRESHOLD,
};

/// Performance model.
pub const PERFORMANCE: PerformanceModel = PerformanceModel {
    base_fps: 70,
    optimization_factors: &[
        "vegetation density scaling",
        "post-processing chain pruning",
        "terrain tessellation limits",
    ],
    vr_comfort_score: 70,
};

/// Compatibility profile.
pub const COMPATIBILITY: CompatibilityProfile = CompatibilityProfile {
    base_score: 65,
    difficulty: Difficulty::High,
    estimated_effort: Difficulty::High,
    note: EngineNote::Risk(
        "Legacy renderer entangles post-processing with the main pass, complicating stereo splits",
    ),
};

/// Missing VR-integration work items.
pub const GAPS: &[&str] = &[
    "Stereo split of the combined render pass",
    "Post-processing chain per-eye duplication",
    "Vegetation LOD rebalance for near-field viewing",
    "Weapon model depth correction",
];

/// Ordered recommendation triple.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Prune the post-processing chain to the minimum before splitting the frame",
    "Validate stereo on a flat test level; terrain tessellation hides projection bugs",
    "Cap vegetation density early, it is the cheapest large frame-time win",
];
