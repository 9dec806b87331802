//! VR performance prediction.
//!
//! Maps detected engines onto the static per-engine performance models.
//! Prediction is a pure scaling: the model's base frame rate is scaled by
//! detection confidence and truncated. Detected engines without a
//! calibrated model are skipped, not errors.

use crate::types::{DetectionResult, EnginePrediction, PerformancePrediction};

/// Predict frame rate and comfort for every detected engine with a model.
///
/// Produces no entries when nothing is detected.
pub fn predict(detection: &DetectionResult) -> PerformancePrediction {
    let mut entries = Vec::new();

    for e in detection.entries() {
        if !e.detected {
            continue;
        }
        let Some(model) = e.engine.performance() else {
            tracing::debug!(engine = e.engine.key(), "no performance model, skipping");
            continue;
        };
        entries.push(EnginePrediction {
            engine: e.engine,
            predicted_fps: (f64::from(model.base_fps) * e.confidence) as u32,
            vr_comfort_score: model.vr_comfort_score,
            optimization_factors: model.optimization_factors.to_vec(),
            confidence: e.confidence,
        });
    }

    PerformancePrediction::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::Engine;
    use crate::types::EngineDetection;

    fn detection(engine: Engine, confidence: f64, detected: bool) -> EngineDetection {
        EngineDetection {
            engine,
            confidence,
            matched_patterns: Vec::new(),
            detected,
        }
    }

    #[test]
    fn test_fps_is_floor_of_scaled_base() {
        // RE Engine base 75 at confidence 0.8 -> 60.0 -> 60.
        let result = DetectionResult::new(vec![detection(Engine::ReEngine, 0.8, true)]);
        let prediction = predict(&result);
        let entry = &prediction.entries()[0];
        assert_eq!(entry.predicted_fps, 60);
        assert_eq!(entry.vr_comfort_score, 90);
        assert_eq!(entry.confidence, 0.8);
    }

    #[test]
    fn test_truncation_not_rounding() {
        // id Tech base 95 at 0.9 -> 85.5 -> 85.
        let result = DetectionResult::new(vec![detection(Engine::IdTech, 0.9, true)]);
        let prediction = predict(&result);
        assert_eq!(prediction.entries()[0].predicted_fps, 85);
    }

    #[test]
    fn test_undetected_engines_excluded() {
        let result = DetectionResult::new(vec![detection(Engine::Unity, 0.4, false)]);
        assert!(predict(&result).is_empty());
    }

    #[test]
    fn test_engine_without_model_skipped() {
        // Godot has no calibrated model.
        let result = DetectionResult::new(vec![
            detection(Engine::Godot, 1.0, true),
            detection(Engine::Unity, 0.8, true),
        ]);
        let prediction = predict(&result);
        assert_eq!(prediction.entries().len(), 1);
        assert_eq!(prediction.entries()[0].engine, Engine::Unity);
    }

    #[test]
    fn test_empty_detection_empty_prediction() {
        assert!(predict(&DetectionResult::default()).is_empty());
    }
}
