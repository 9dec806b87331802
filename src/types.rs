//! Core types for the VR feasibility analyzer.
//!
//! This module defines the data model shared by every pipeline stage:
//! static registry records, the detection result, the derived prediction
//! and assessment aggregates, and the final report.
//!
//! Per-engine collections are `Vec`-backed and serialize to JSON maps in
//! insertion order. Detection order (confidence descending, registration
//! order on ties) is an invariant of the report format, so none of these
//! types may round-trip through a hash map.

use crate::engines::Engine;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse categorical estimate of VR-conversion difficulty or effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Trivial conversions.
    VeryLow,
    /// Well-supported engines with existing tooling.
    Low,
    /// Workable with moderate reverse engineering.
    Medium,
    /// Heavily obfuscated or console-oriented targets.
    High,
    /// Extensive reverse engineering required.
    VeryHigh,
    /// No engine detected.
    Unknown,
}

impl Difficulty {
    /// Returns the snake_case identifier used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::VeryLow => "very_low",
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
            Difficulty::VeryHigh => "very_high",
            Difficulty::Unknown => "unknown",
        }
    }

    /// Whether this tier warrants the general-caution recommendation set.
    pub fn is_severe(&self) -> bool {
        matches!(self, Difficulty::High | Difficulty::VeryHigh)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static signature record for one engine.
///
/// Patterns are literal byte sequences considered diagnostic of the
/// engine's executables. Extensions are informational only and are never
/// enforced against scanned content.
#[derive(Debug, Clone, Copy)]
pub struct EngineSignature {
    /// Literal byte patterns searched for in the executable.
    pub patterns: &'static [&'static [u8]],
    /// File extensions typically carrying this engine's binaries.
    pub extensions: &'static [&'static str],
    /// Confidence required before the engine counts as detected.
    pub threshold: f64,
}

/// Static performance model for one engine.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceModel {
    /// Expected frame rate at full confidence, frames per second.
    pub base_fps: u32,
    /// Named optimization levers the engine is known to respond to.
    pub optimization_factors: &'static [&'static str],
    /// VR comfort score, 0-100.
    pub vr_comfort_score: u8,
}

/// The dominant technical obstacle or asset for an engine, recorded in
/// the compatibility assessment as exactly one risk or one advantage.
#[derive(Debug, Clone, Copy)]
pub enum EngineNote {
    /// Appended to the assessment's risk list.
    Risk(&'static str),
    /// Appended to the assessment's advantage list.
    Advantage(&'static str),
}

/// Static compatibility profile for one engine.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityProfile {
    /// Base compatibility score at full confidence, 0-100.
    pub base_score: u8,
    /// Difficulty tier for a conversion targeting this engine.
    pub difficulty: Difficulty,
    /// Effort tier for a conversion targeting this engine.
    pub estimated_effort: Difficulty,
    /// The single engine-specific risk or advantage.
    pub note: EngineNote,
}

/// Per-engine detection entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineDetection {
    /// The engine this entry scores.
    pub engine: Engine,
    /// Accumulated confidence, clamped to [0, 1].
    pub confidence: f64,
    /// Decoded representations of the patterns that matched, in
    /// registration order.
    pub matched_patterns: Vec<String>,
    /// True iff confidence >= this engine's own threshold.
    pub detected: bool,
}

/// Ordered detection result: confidence descending, registration order
/// breaking ties. Serializes to a JSON map keyed by engine identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionResult {
    entries: Vec<EngineDetection>,
}

impl DetectionResult {
    /// Wraps an already-ordered list of detection entries.
    pub fn new(entries: Vec<EngineDetection>) -> Self {
        Self { entries }
    }

    /// All entries, in report order.
    pub fn entries(&self) -> &[EngineDetection] {
        &self.entries
    }

    /// The primary engine: first entry with `detected = true`.
    pub fn primary(&self) -> Option<&EngineDetection> {
        self.entries.iter().find(|e| e.detected)
    }

    /// True when no engine produced a nonzero confidence.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of engines with nonzero confidence.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for DetectionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            confidence: f64,
            matched_patterns: &'a [String],
            detected: bool,
        }

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for e in &self.entries {
            map.serialize_entry(
                e.engine.key(),
                &Entry {
                    confidence: e.confidence,
                    matched_patterns: &e.matched_patterns,
                    detected: e.detected,
                },
            )?;
        }
        map.end()
    }
}

/// Per-engine performance prediction entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EnginePrediction {
    /// The engine this prediction covers.
    pub engine: Engine,
    /// floor(base_fps x confidence).
    pub predicted_fps: u32,
    /// Copied from the engine's performance model.
    pub vr_comfort_score: u8,
    /// Copied from the engine's performance model.
    pub optimization_factors: Vec<&'static str>,
    /// Detection confidence the prediction was scaled by.
    pub confidence: f64,
}

/// Ordered performance prediction, one entry per detected engine with a
/// performance model. Serializes to a JSON map keyed by engine identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformancePrediction {
    entries: Vec<EnginePrediction>,
}

impl PerformancePrediction {
    /// Wraps an already-ordered list of prediction entries.
    pub fn new(entries: Vec<EnginePrediction>) -> Self {
        Self { entries }
    }

    /// All entries, in detection order.
    pub fn entries(&self) -> &[EnginePrediction] {
        &self.entries
    }

    /// True when no detected engine had a performance model.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PerformancePrediction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            predicted_fps: u32,
            vr_comfort_score: u8,
            optimization_factors: &'a [&'static str],
            confidence: f64,
        }

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for e in &self.entries {
            map.serialize_entry(
                e.engine.key(),
                &Entry {
                    predicted_fps: e.predicted_fps,
                    vr_comfort_score: e.vr_comfort_score,
                    optimization_factors: &e.optimization_factors,
                    confidence: e.confidence,
                },
            )?;
        }
        map.end()
    }
}

/// Overall VR-conversion compatibility assessment.
///
/// Single object, not per-engine: it reflects the primary detected engine
/// (or the unknown-engine fallback). Risk and advantage lists are
/// append-only and keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityAssessment {
    /// 0-100, scaled by the primary engine's confidence.
    pub overall_score: u32,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Effort tier.
    pub estimated_effort: Difficulty,
    /// Obstacles, in the order the policy appended them.
    pub risks: Vec<String>,
    /// Assets, in the order the policy appended them.
    pub advantages: Vec<String>,
}

/// Ordered engine -> missing-work checklist map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GapAnalysis {
    entries: Vec<(Engine, Vec<&'static str>)>,
}

impl GapAnalysis {
    /// Wraps an already-ordered list of per-engine checklists.
    pub fn new(entries: Vec<(Engine, Vec<&'static str>)>) -> Self {
        Self { entries }
    }

    /// All entries, in detection order.
    pub fn entries(&self) -> &[(Engine, Vec<&'static str>)] {
        &self.entries
    }

    /// True when no engine was detected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for GapAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (engine, items) in &self.entries {
            map.serialize_entry(engine.key(), items)?;
        }
        map.end()
    }
}

/// The root aggregate: one fully-derived report per analyzed executable.
///
/// Immutable once constructed; written once to the persistence sink and
/// never updated in place.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Path of the analyzed executable, as given.
    pub executable_path: String,
    /// Byte length of the executable.
    pub file_size: u64,
    /// Hex SHA-256 digest of the full byte content.
    pub file_hash: String,
    /// ISO-8601 generation timestamp (UTC).
    pub analysis_timestamp: String,
    /// Per-engine detection map.
    pub engine_detection: DetectionResult,
    /// Per-engine performance prediction map.
    pub performance_prediction: PerformancePrediction,
    /// Overall compatibility assessment.
    pub compatibility_assessment: CompatibilityAssessment,
    /// Per-engine missing-integration checklists.
    pub missing_functions: GapAnalysis,
    /// Ordered textual recommendations.
    pub recommendations: Vec<String>,
}

/// Degraded report produced when the executable cannot be read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Description of the failure.
    pub error: String,
    /// Path of the executable that failed to analyze.
    pub executable_path: String,
    /// ISO-8601 generation timestamp (UTC).
    pub analysis_timestamp: String,
}

/// Outcome of analyzing one executable. Both arms serialize to a flat
/// JSON object; the failed arm carries only the error triple.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// Full report.
    Report(Box<AnalysisReport>),
    /// Degraded error report.
    Failed(ErrorReport),
}

impl AnalysisOutcome {
    /// The full report, if analysis succeeded.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Report(r) => Some(r),
            AnalysisOutcome::Failed(_) => None,
        }
    }

    /// True when this outcome is a degraded error report.
    pub fn is_failed(&self) -> bool {
        matches!(self, AnalysisOutcome::Failed(_))
    }
}

/// Self-describing report listing the registered engine and
/// performance-model identifiers, produced when no executable is given.
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    /// Identifiers of every registered engine signature.
    pub engines: Vec<&'static str>,
    /// Identifiers of every engine carrying a performance model.
    pub performance_models: Vec<&'static str>,
    /// ISO-8601 generation timestamp (UTC).
    pub analysis_timestamp: String,
}

/// Tunable detector constants.
///
/// The flat per-pattern increment is a heuristic inherited from the
/// original expert-system table; it is kept configurable rather than
/// hard-coded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorOptions {
    /// Confidence contributed by each distinct matched pattern.
    pub match_increment: f64,
}

impl DetectorOptions {
    /// Default increment: 0.2 per matched pattern.
    pub const DEFAULT_MATCH_INCREMENT: f64 = 0.2;

    /// Create options with the default increment.
    pub fn new() -> Self {
        Self {
            match_increment: Self::DEFAULT_MATCH_INCREMENT,
        }
    }

    /// Override the per-pattern confidence increment.
    pub fn with_match_increment(increment: f64) -> Self {
        Self {
            match_increment: increment,
        }
    }
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_str() {
        assert_eq!(Difficulty::VeryHigh.as_str(), "very_high");
        assert_eq!(Difficulty::Low.to_string(), "low");
    }

    #[test]
    fn test_difficulty_severity() {
        assert!(Difficulty::High.is_severe());
        assert!(Difficulty::VeryHigh.is_severe());
        assert!(!Difficulty::Medium.is_severe());
        assert!(!Difficulty::Unknown.is_severe());
    }

    #[test]
    fn test_detection_result_primary_skips_undetected() {
        let result = DetectionResult::new(vec![
            EngineDetection {
                engine: Engine::Unity,
                confidence: 0.6,
                matched_patterns: vec!["UnityPlayer".to_string()],
                detected: false,
            },
            EngineDetection {
                engine: Engine::UnrealEngine,
                confidence: 0.4,
                matched_patterns: vec!["UE4Game".to_string()],
                detected: false,
            },
        ]);
        assert!(result.primary().is_none());
    }

    #[test]
    fn test_detection_result_serializes_in_order() {
        let result = DetectionResult::new(vec![
            EngineDetection {
                engine: Engine::Unity,
                confidence: 0.8,
                matched_patterns: vec![],
                detected: true,
            },
            EngineDetection {
                engine: Engine::UnrealEngine,
                confidence: 0.4,
                matched_patterns: vec![],
                detected: false,
            },
        ]);
        let json = serde_json::to_string(&result).unwrap();
        let unity = json.find("unity").unwrap();
        let unreal = json.find("unreal_engine").unwrap();
        assert!(unity < unreal);
    }

    #[test]
    fn test_outcome_untagged_error_shape() {
        let outcome = AnalysisOutcome::Failed(ErrorReport {
            error: "No such file".to_string(),
            executable_path: "missing.exe".to_string(),
            analysis_timestamp: "2026-01-01T00:00:00+00:00".to_string(),
        });
        let value: serde_json::Value = serde_json::to_value(&outcome).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("error"));
        assert!(obj.contains_key("executable_path"));
        assert!(obj.contains_key("analysis_timestamp"));
    }

    #[test]
    fn test_detector_options_default() {
        let opts = DetectorOptions::default();
        assert_eq!(opts.match_increment, 0.2);
        let custom = DetectorOptions::with_match_increment(0.25);
        assert_eq!(custom.match_increment, 0.25);
    }
}
