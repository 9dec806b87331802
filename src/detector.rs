//! Byte-pattern engine detection.
//!
//! The detector scans raw executable content for each registered engine's
//! literal byte signatures. Every matched pattern contributes a fixed
//! confidence increment; each pattern is tested once, so repeated
//! occurrences of the same pattern never double-count. There is no
//! disassembly and no format parsing, only literal containment.

use crate::engines::Engine;
use crate::types::{DetectionResult, DetectorOptions, EngineDetection};
use memchr::memmem;

/// Detect engines in raw content with default options.
///
/// Result ordering: confidence descending; equal confidences keep
/// registration order (`Engine::ALL`). Engines with zero confidence are
/// omitted, so an empty or unrecognized buffer yields an empty result.
pub fn detect(content: &[u8]) -> DetectionResult {
    detect_with_options(content, &DetectorOptions::new())
}

/// Detect engines with a custom per-pattern confidence increment.
pub fn detect_with_options(content: &[u8], options: &DetectorOptions) -> DetectionResult {
    if content.is_empty() {
        return DetectionResult::default();
    }

    let mut entries = Vec::new();

    for &engine in Engine::ALL {
        let sig = engine.signature();
        let mut confidence = 0.0_f64;
        let mut matched_patterns = Vec::new();

        for &pattern in sig.patterns {
            if memmem::find(content, pattern).is_some() {
                confidence += options.match_increment;
                matched_patterns.push(String::from_utf8_lossy(pattern).into_owned());
            }
        }

        if confidence > 0.0 {
            let confidence = confidence.clamp(0.0, 1.0);
            let detected = confidence >= sig.threshold;
            tracing::debug!(
                engine = engine.key(),
                confidence,
                detected,
                matches = matched_patterns.len(),
                "signature scan"
            );
            entries.push(EngineDetection {
                engine,
                confidence,
                matched_patterns,
                detected,
            });
        }
    }

    // Stable sort: equal confidences preserve the registration order the
    // entries were pushed in. Do not replace with an unstable sort.
    entries.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    DetectionResult::new(entries)
}
