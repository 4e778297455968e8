use std::sync::Arc;

use crate::config::Config;
use crate::models::company::Company;
use crate::models::curriculum::CurriculumTable;
use crate::resume::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The company directory and curriculum table are loaded once at startup and
/// treated as immutable for the life of the process, so requests share them
/// without coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub companies: Arc<Vec<Company>>,
    pub curriculum: Arc<CurriculumTable>,
    /// Pluggable resume text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
