//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::placement::skills::normalize_skills;
use crate::resume::analyzer::{
    analyze_resume, compute_resume_score, ResumeScore, SectionPresence, KNOWN_SKILLS,
};
use crate::resume::matcher::{match_resume_to_company, ResumeMatch};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    /// When set, the response also carries a resume score against this
    /// company's required skills.
    pub target_company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyMatchEntry {
    pub company: String,
    #[serde(flatten)]
    pub matched: ResumeMatch,
}

#[derive(Debug, Serialize)]
pub struct ResumeAnalysisResponse {
    pub found_skills: Vec<String>,
    pub sections: SectionPresence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_score: Option<ResumeScore>,
    pub matches: Vec<CompanyMatchEntry>,
}

/// POST /api/v1/resume/analyze
///
/// Accepts a multipart upload (`file` field), extracts and normalizes the
/// document text, and reports detected skills, section presence, and a match
/// against every company in the directory.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeQuery>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let mut data: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?,
            );
            break;
        }
    }
    let data =
        data.ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;

    let raw_text = state.extractor.extract(&data)?;
    let analysis = analyze_resume(&raw_text, KNOWN_SKILLS);

    let resume_score = match &params.target_company {
        Some(name) => {
            let company = state
                .companies
                .iter()
                .find(|company| company.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| AppError::NotFound(format!("Company '{name}' not found")))?;
            Some(compute_resume_score(
                &analysis,
                &normalize_skills(&company.skills),
            ))
        }
        None => None,
    };

    let matches = state
        .companies
        .iter()
        .map(|company| CompanyMatchEntry {
            company: company.name.clone(),
            matched: match_resume_to_company(&analysis, &company.skills),
        })
        .collect();

    let mut found_skills: Vec<String> = analysis.found_skills.iter().cloned().collect();
    found_skills.sort_unstable();

    Ok(Json(ResumeAnalysisResponse {
        found_skills,
        sections: analysis.sections,
        resume_score,
        matches,
    }))
}
