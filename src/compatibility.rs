//! VR compatibility assessment.
//!
//! Combines the primary detected engine, its confidence, and the
//! executable's size into an overall score, difficulty and effort tiers,
//! and ordered risk/advantage lists. Pure function over the detection
//! result and the static compatibility profiles; file-read failures never
//! reach this stage.

use crate::types::{CompatibilityAssessment, DetectionResult, Difficulty, EngineNote};

/// Files above this size carry a complexity risk.
pub const LARGE_EXECUTABLE_BYTES: u64 = 100 * 1024 * 1024;

/// Files below this size carry a simplicity advantage.
pub const SMALL_EXECUTABLE_BYTES: u64 = 10 * 1024 * 1024;

/// Risk recorded when no engine clears its detection threshold.
pub const UNKNOWN_ENGINE_RISK: &str = "Unknown engine requires extensive reverse engineering";

/// Risk recorded for executables above [`LARGE_EXECUTABLE_BYTES`].
pub const LARGE_EXECUTABLE_RISK: &str = "Large executable suggests complex architecture";

/// Advantage recorded for executables below [`SMALL_EXECUTABLE_BYTES`].
pub const SMALL_EXECUTABLE_ADVANTAGE: &str = "Small executable suggests simple architecture";

/// Assess overall VR-conversion compatibility.
///
/// Policy, in order: unknown-engine early return; primary-engine base
/// profile scaled by confidence; exactly one engine-specific note; then
/// the size signal. The two size checks are independent; their thresholds
/// do not overlap, so at most one fires.
pub fn assess(detection: &DetectionResult, file_size: u64) -> CompatibilityAssessment {
    let Some(primary) = detection.primary() else {
        return CompatibilityAssessment {
            overall_score: 0,
            difficulty: Difficulty::High,
            estimated_effort: Difficulty::VeryHigh,
            risks: vec![UNKNOWN_ENGINE_RISK.to_string()],
            advantages: Vec::new(),
        };
    };

    let profile = primary.engine.compatibility();
    let mut risks = Vec::new();
    let mut advantages = Vec::new();

    match profile.note {
        EngineNote::Risk(note) => risks.push(note.to_string()),
        EngineNote::Advantage(note) => advantages.push(note.to_string()),
    }

    if file_size > LARGE_EXECUTABLE_BYTES {
        risks.push(LARGE_EXECUTABLE_RISK.to_string());
    }
    if file_size < SMALL_EXECUTABLE_BYTES {
        advantages.push(SMALL_EXECUTABLE_ADVANTAGE.to_string());
    }

    CompatibilityAssessment {
        overall_score: (f64::from(profile.base_score) * primary.confidence) as u32,
        difficulty: profile.difficulty,
        estimated_effort: profile.estimated_effort,
        risks,
        advantages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::Engine;
    use crate::types::EngineDetection;
    use pretty_assertions::assert_eq;

    const MIB: u64 = 1024 * 1024;

    fn detected(engine: Engine, confidence: f64) -> DetectionResult {
        DetectionResult::new(vec![EngineDetection {
            engine,
            confidence,
            matched_patterns: Vec::new(),
            detected: true,
        }])
    }

    #[test]
    fn test_unknown_engine_branch() {
        let assessment = assess(&DetectionResult::default(), 50 * MIB);
        assert_eq!(assessment.overall_score, 0);
        assert_eq!(assessment.difficulty, Difficulty::High);
        assert_eq!(assessment.estimated_effort, Difficulty::VeryHigh);
        assert_eq!(assessment.risks, vec![UNKNOWN_ENGINE_RISK.to_string()]);
        assert!(assessment.advantages.is_empty());
    }

    #[test]
    fn test_undetected_entries_fall_through_to_unknown() {
        // Partial matches exist but detected=false gates primary selection.
        let detection = DetectionResult::new(vec![EngineDetection {
            engine: Engine::ReEngine,
            confidence: 0.4,
            matched_patterns: vec!["RE ENGINE".to_string(), "via.render".to_string()],
            detected: false,
        }]);
        let assessment = assess(&detection, 50 * MIB);
        assert_eq!(assessment.overall_score, 0);
        assert_eq!(assessment.risks, vec![UNKNOWN_ENGINE_RISK.to_string()]);
    }

    #[test]
    fn test_score_scales_with_confidence() {
        // Unreal base 90 at 0.8 -> 72.
        let assessment = assess(&detected(Engine::UnrealEngine, 0.8), 50 * MIB);
        assert_eq!(assessment.overall_score, 72);
        assert_eq!(assessment.difficulty, Difficulty::Low);
        // Unreal's note is an advantage, and the mid-size file adds nothing.
        assert_eq!(assessment.advantages.len(), 1);
        assert!(assessment.risks.is_empty());
    }

    #[test]
    fn test_engine_risk_note() {
        // MT Framework base 60 at 1.0, high difficulty, risk note.
        let assessment = assess(&detected(Engine::MtFramework, 1.0), 50 * MIB);
        assert_eq!(assessment.overall_score, 60);
        assert_eq!(assessment.difficulty, Difficulty::High);
        assert_eq!(assessment.risks.len(), 1);
        assert!(assessment.advantages.is_empty());
    }

    #[test]
    fn test_large_file_boundary() {
        // Exactly 100 MiB + 1 byte must carry the large-executable risk.
        let assessment = assess(&detected(Engine::UnrealEngine, 1.0), 100 * MIB + 1);
        assert!(assessment
            .risks
            .contains(&LARGE_EXECUTABLE_RISK.to_string()));
        // Exactly 100 MiB must not.
        let assessment = assess(&detected(Engine::UnrealEngine, 1.0), 100 * MIB);
        assert!(!assessment
            .risks
            .contains(&LARGE_EXECUTABLE_RISK.to_string()));
    }

    #[test]
    fn test_small_file_boundary() {
        // Exactly 10 MiB - 1 byte must carry the small-executable advantage.
        let assessment = assess(&detected(Engine::UnrealEngine, 1.0), 10 * MIB - 1);
        assert!(assessment
            .advantages
            .contains(&SMALL_EXECUTABLE_ADVANTAGE.to_string()));
        // Exactly 10 MiB must not.
        let assessment = assess(&detected(Engine::UnrealEngine, 1.0), 10 * MIB);
        assert!(!assessment
            .advantages
            .contains(&SMALL_EXECUTABLE_ADVANTAGE.to_string()));
    }

    #[test]
    fn test_mid_size_triggers_neither() {
        let assessment = assess(&detected(Engine::UnrealEngine, 1.0), 50 * MIB);
        assert!(!assessment.risks.contains(&LARGE_EXECUTABLE_RISK.to_string()));
        assert!(!assessment
            .advantages
            .contains(&SMALL_EXECUTABLE_ADVANTAGE.to_string()));
    }

    #[test]
    fn test_note_precedes_size_signal() {
        // Order is append order: engine note first, size signal second.
        let assessment = assess(&detected(Engine::MtFramework, 1.0), 200 * MIB);
        assert_eq!(assessment.risks.len(), 2);
        assert_eq!(assessment.risks[1], LARGE_EXECUTABLE_RISK);
    }
}
