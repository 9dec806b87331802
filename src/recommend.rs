//! Recommendation generation.
//!
//! Emits ordered textual recommendations. Ordering is load-bearing:
//! downstream consumers read the list positionally, so engine-specific
//! items always precede the general items and the fallback list is fixed.

use crate::types::{CompatibilityAssessment, DetectionResult};

/// Fixed fallback when no engine is detected.
pub const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Start with generic DirectX/OpenGL hooking to capture the render pipeline",
    "Disassemble the executable to identify rendering and camera code paths",
    "Search for known middleware strings to narrow down the engine family",
];

/// General caution items appended when difficulty is high or very high.
pub const GENERAL_CAUTION_RECOMMENDATIONS: [&str; 3] = [
    "Budget significant reverse-engineering time before committing to the conversion",
    "Prototype head tracking on a single scene before wiring full motion controls",
    "Engage the game's modding community early; existing tooling may already cover parts of the work",
];

/// Build the ordered recommendation list for one analysis.
///
/// No detection: the fixed three-item fallback. Otherwise the primary
/// engine's triple, then the general caution items iff the assessed
/// difficulty is high or very high.
pub fn recommend(
    detection: &DetectionResult,
    assessment: &CompatibilityAssessment,
) -> Vec<String> {
    let Some(primary) = detection.primary() else {
        return FALLBACK_RECOMMENDATIONS
            .iter()
            .map(|s| (*s).to_string())
            .collect();
    };

    let mut out: Vec<String> = primary
        .engine
        .recommendations()
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    if assessment.difficulty.is_severe() {
        out.extend(
            GENERAL_CAUTION_RECOMMENDATIONS
                .iter()
                .map(|s| (*s).to_string()),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility;
    use crate::engines::Engine;
    use crate::types::EngineDetection;
    use pretty_assertions::assert_eq;

    fn detected(engine: Engine, confidence: f64) -> DetectionResult {
        DetectionResult::new(vec![EngineDetection {
            engine,
            confidence,
            matched_patterns: Vec::new(),
            detected: true,
        }])
    }

    #[test]
    fn test_fallback_on_no_detection() {
        let detection = DetectionResult::default();
        let assessment = compatibility::assess(&detection, 0);
        let recs = recommend(&detection, &assessment);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0], FALLBACK_RECOMMENDATIONS[0]);
        assert_eq!(recs[2], FALLBACK_RECOMMENDATIONS[2]);
    }

    #[test]
    fn test_low_difficulty_engine_triple_only() {
        let detection = detected(Engine::UnrealEngine, 1.0);
        let assessment = compatibility::assess(&detection, 50 * 1024 * 1024);
        let recs = recommend(&detection, &assessment);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0], Engine::UnrealEngine.recommendations()[0]);
    }

    #[test]
    fn test_high_difficulty_appends_general_items_last() {
        let detection = detected(Engine::MtFramework, 1.0);
        let assessment = compatibility::assess(&detection, 50 * 1024 * 1024);
        let recs = recommend(&detection, &assessment);
        assert_eq!(recs.len(), 6);
        // Engine-specific items first, general caution items last.
        assert_eq!(recs[0], Engine::MtFramework.recommendations()[0]);
        assert_eq!(recs[3], GENERAL_CAUTION_RECOMMENDATIONS[0]);
        assert_eq!(recs[5], GENERAL_CAUTION_RECOMMENDATIONS[2]);
    }
}
