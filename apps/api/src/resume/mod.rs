// Resume analysis subsystem.
// Implements: document text extraction, vocabulary scan, section presence,
// resume scoring, and per-company matching (plain set intersection — the
// curriculum-aware relaxation lives in `placement`, not here).

pub mod analyzer;
pub mod extract;
pub mod handlers;
pub mod matcher;

/// Rounds percent-style outputs to 2 decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
