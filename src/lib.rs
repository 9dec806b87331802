//! VR Feasibility Analyzer - Engine Detection and Conversion Scoring
//!
//! This library inspects a game executable's raw bytes, infers which game
//! engine produced it, and derives a VR-conversion feasibility report:
//! predicted performance, a compatibility score, missing integration work,
//! and textual recommendations.
//!
//! # Features
//!
//! - **Signature Detection**: literal byte-pattern search against a static
//!   per-engine signature registry, with bounded confidence scoring
//! - **Performance Prediction**: per-engine frame-rate and comfort models
//!   scaled by detection confidence
//! - **Compatibility Assessment**: overall score, difficulty and effort
//!   tiers, and ordered risk/advantage lists
//! - **Gap Analysis & Recommendations**: static expert-system checklists
//!   and ordered conversion advice
//!
//! Detection is restricted to literal byte-pattern search: there is no
//! disassembly, no control-flow analysis, and no symbol resolution. The
//! "AI" is a fixed expert-system table, not a trained model.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vr_feasibility::{analyze_file, AnalysisOutcome};
//!
//! let outcome = analyze_file("path/to/game.exe");
//! match outcome {
//!     AnalysisOutcome::Report(report) => {
//!         if let Some(primary) = report.engine_detection.primary() {
//!             println!("Engine: {}", primary.engine);
//!             println!("Score:  {}", report.compatibility_assessment.overall_score);
//!         }
//!     }
//!     AnalysisOutcome::Failed(err) => eprintln!("Failed: {}", err.error),
//! }
//! ```
//!
//! # Pipeline
//!
//! Control flow is strictly linear: bytes flow into the detector, and the
//! predictor, assessor, gap analyzer, and recommendation engine each
//! consume the detection result independently before the report assembler
//! folds everything together. Every stage is a pure function over its
//! inputs plus the static registries, so concurrent analyses need no
//! locking.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod compatibility;
pub mod detector;
pub mod engines;
pub mod error;
pub mod gaps;
pub mod performance;
pub mod recommend;
pub mod report;
pub mod types;

pub use engines::{validate_registries, Engine, DEFAULT_THRESHOLD};
pub use error::{AnalyzerError, Result};
pub use report::{analyze_bytes, analyze_file, sample_report};
pub use types::{
    AnalysisOutcome, AnalysisReport, CompatibilityAssessment, DetectionResult, DetectorOptions,
    Difficulty, EngineDetection, ErrorReport, GapAnalysis, PerformancePrediction, SampleReport,
};

/// Get version information for this library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the list of registered engines, in registration order.
pub fn supported_engines() -> Vec<Engine> {
    Engine::ALL.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_supported_engines() {
        let engines = supported_engines();
        assert!(!engines.is_empty());
        assert!(engines.contains(&Engine::UnrealEngine));
        assert!(engines.contains(&Engine::MtFramework));
    }

    #[test]
    fn test_end_to_end_partial_match_gates_on_detected() {
        // Two of RE Engine's four patterns and nothing else: confidence
        // 0.4, below the 0.8 threshold, so the assessment must take the
        // unknown-engine branch even though partial matches exist.
        let mut content = vec![0u8; 128];
        content.extend_from_slice(b"RE ENGINE....via.render");

        let report = analyze_bytes(&content, "partial.exe");
        let entry = &report.engine_detection.entries()[0];
        assert!((entry.confidence - 0.4).abs() < 1e-9);
        assert!(!entry.detected);
        assert_eq!(report.compatibility_assessment.overall_score, 0);
        assert_eq!(
            report.compatibility_assessment.difficulty,
            Difficulty::High
        );
        assert_eq!(report.recommendations.len(), 3);
        assert!(report.performance_prediction.is_empty());
        assert!(report.missing_functions.is_empty());
    }
}
