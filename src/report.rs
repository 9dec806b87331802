//! Report assembly.
//!
//! The only stage that touches the filesystem. Reads the executable in
//! one scoped call, computes the content digest, runs the pipeline
//! stages, and folds everything into one immutable report. Per-file
//! failures are converted into degraded error reports here and never
//! propagate further; a batch run over many executables cannot be
//! terminated by one bad file.

use crate::engines::Engine;
use crate::types::{AnalysisOutcome, AnalysisReport, ErrorReport, SampleReport};
use crate::{compatibility, detector, gaps, performance, recommend};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Analyze one executable on disk.
///
/// The file handle is scoped to the single read and released on every
/// exit path. Any read failure (missing file, permissions, ...) yields
/// `AnalysisOutcome::Failed` carrying the error text, path, and
/// timestamp; this function does not return `Err`.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> AnalysisOutcome {
    let path = path.as_ref();
    let executable_path = path.display().to_string();

    match std::fs::read(path) {
        Ok(content) => {
            tracing::debug!(path = %executable_path, bytes = content.len(), "read executable");
            AnalysisOutcome::Report(Box::new(analyze_bytes(&content, &executable_path)))
        }
        Err(e) => {
            tracing::warn!(path = %executable_path, error = %e, "analysis failed");
            AnalysisOutcome::Failed(ErrorReport {
                error: e.to_string(),
                executable_path,
                analysis_timestamp: Utc::now().to_rfc3339(),
            })
        }
    }
}

/// Analyze raw executable content already held in memory.
///
/// Pure over the content and the static registries; repeated calls with
/// identical bytes produce identical detection, prediction, and
/// assessment sections (only the timestamp differs).
pub fn analyze_bytes(content: &[u8], executable_path: &str) -> AnalysisReport {
    let file_hash = hex::encode(Sha256::digest(content));

    let detection = detector::detect(content);
    let prediction = performance::predict(&detection);
    let assessment = compatibility::assess(&detection, content.len() as u64);
    let missing = gaps::gaps(&detection);
    let recommendations = recommend::recommend(&detection, &assessment);

    tracing::info!(
        path = executable_path,
        engines = detection.len(),
        primary = detection.primary().map(|e| e.engine.key()).unwrap_or("none"),
        score = assessment.overall_score,
        "analysis complete"
    );

    AnalysisReport {
        executable_path: executable_path.to_string(),
        file_size: content.len() as u64,
        file_hash,
        analysis_timestamp: Utc::now().to_rfc3339(),
        engine_detection: detection,
        performance_prediction: prediction,
        compatibility_assessment: assessment,
        missing_functions: missing,
        recommendations,
    }
}

/// Build the self-describing sample report: registered engine identifiers
/// plus the subset carrying a performance model.
pub fn sample_report() -> SampleReport {
    SampleReport {
        engines: Engine::ALL.iter().map(|e| e.key()).collect(),
        performance_models: Engine::ALL
            .iter()
            .filter(|e| e.performance().is_some())
            .map(|e| e.key())
            .collect(),
        analysis_timestamp: Utc::now().to_rfc3339(),
    }
}
