//! Missing VR-integration analysis.
//!
//! A static checklist lookup: every detected engine contributes its
//! per-engine list of missing work items, in detection order. No scoring.

use crate::types::{DetectionResult, GapAnalysis};

/// Collect the missing-integration checklist for every detected engine.
pub fn gaps(detection: &DetectionResult) -> GapAnalysis {
    let mut entries = Vec::new();
    for e in detection.entries() {
        if e.detected {
            entries.push((e.engine, e.engine.gaps().to_vec()));
        }
    }
    GapAnalysis::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::Engine;
    use crate::types::EngineDetection;

    #[test]
    fn test_only_detected_engines_contribute() {
        let detection = DetectionResult::new(vec![
            EngineDetection {
                engine: Engine::Unity,
                confidence: 0.8,
                matched_patterns: Vec::new(),
                detected: true,
            },
            EngineDetection {
                engine: Engine::CryEngine,
                confidence: 0.4,
                matched_patterns: Vec::new(),
                detected: false,
            },
        ]);
        let analysis = gaps(&detection);
        assert_eq!(analysis.entries().len(), 1);
        assert_eq!(analysis.entries()[0].0, Engine::Unity);
        assert_eq!(analysis.entries()[0].1, Engine::Unity.gaps());
    }

    #[test]
    fn test_no_detection_no_gaps() {
        assert!(gaps(&DetectionResult::default()).is_empty());
    }
}
