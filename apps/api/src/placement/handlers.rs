//! Axum route handlers for the Placement API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::company::Company;
use crate::models::student::Student;
use crate::placement::ranking::{rank_companies, RankedEvaluation};
use crate::placement::skills::parse_skill_list;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// Academic-year label as selected in the UI, e.g. "3rd Year".
    pub year: String,
    pub cgpa: f64,
    /// Free-text comma-separated skills, exactly as the student typed them.
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience_months: u32,
    #[serde(default)]
    pub projects: u32,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    /// Total number of companies in the directory, eligible or not.
    pub considered: usize,
    /// Eligible companies only, sorted by fit score descending.
    pub results: Vec<RankedEvaluation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/placement/evaluate
///
/// Assembles a Student from raw input, evaluates every company in the
/// directory, and returns the eligible results ranked by fit score.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    if request.year.trim().is_empty() {
        return Err(AppError::Validation("year cannot be empty".to_string()));
    }

    let student = Student {
        year: request.year,
        cgpa: request.cgpa,
        skills: parse_skill_list(&request.skills),
        experience_months: request.experience_months,
        projects: request.projects,
    };

    let results = rank_companies(&student, &state.companies, &state.curriculum);

    Ok(Json(EvaluateResponse {
        considered: state.companies.len(),
        results,
    }))
}

/// GET /api/v1/companies
pub async fn handle_list_companies(State(state): State<AppState>) -> Json<Vec<Company>> {
    Json(state.companies.as_ref().clone())
}

/// GET /api/v1/companies/:name
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Company>, AppError> {
    state
        .companies
        .iter()
        .find(|company| company.name.eq_ignore_ascii_case(&name))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Company '{name}' not found")))
}
