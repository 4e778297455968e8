//! Company evaluation — deterministic, explainable placement scoring.
//!
//! A pure function of (student, company, curriculum): eligibility gate, skill
//! matching, curriculum-aware relaxation of missing skills, and a weighted
//! 60/20/20 fit score with human-readable reasons.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::company::Company;
use crate::models::curriculum::CurriculumTable;
use crate::models::student::Student;
use crate::placement::curriculum::skills_taught_up_to_year;
use crate::placement::skills::normalize_skills;

/// Maximum contribution of skill overlap to the fit score.
const SKILL_WEIGHT: f64 = 60.0;
/// Each project is worth 10 points, capped at 20.
const POINTS_PER_PROJECT: u32 = 10;
const PROJECT_CAP: u32 = 20;
/// One point per month of experience, capped at 20.
const EXPERIENCE_CAP: u32 = 20;

/// Fit tier thresholds. Inclusive lower bounds: a boundary score belongs to
/// the higher band.
const STRONG_FIT: f64 = 70.0;
const MODERATE_FIT: f64 = 40.0;

/// Outcome of evaluating one student against one company.
///
/// `eligible == false` implies `fit_score == 0` and an empty `missing_skills`
/// list: no skill analysis happens once the CGPA gate fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub eligible: bool,
    pub fit_score: f64,
    pub missing_skills: Vec<String>,
    pub reasons: Vec<String>,
}

/// Evaluates a student against one company's requirements.
///
/// Missing skills taught by the student's current year count against them in
/// the explanation; skills taught in later years are excused. The partition
/// never touches the numeric score — relaxation softens the narrative only.
pub fn evaluate_company(
    student: &Student,
    company: &Company,
    curriculum: &CurriculumTable,
) -> EvaluationResult {
    // Hard cutoff, not a penalty. Nothing else runs when the gate fails.
    if student.cgpa < company.min_cgpa {
        return EvaluationResult {
            eligible: false,
            fit_score: 0.0,
            missing_skills: Vec::new(),
            reasons: vec![format!(
                "CGPA {} is below required {}",
                student.cgpa, company.min_cgpa
            )],
        };
    }

    let student_skills = normalize_skills(&student.skills);
    let company_skills = normalize_skills(&company.skills);

    let matched: HashSet<&str> = company_skills
        .intersection(&student_skills)
        .map(String::as_str)
        .collect();
    let missing: HashSet<&str> = company_skills
        .difference(&student_skills)
        .map(String::as_str)
        .collect();

    let taught = skills_taught_up_to_year(&student.year, curriculum);
    let mut penalizable: Vec<&str> = missing
        .iter()
        .copied()
        .filter(|skill| taught.contains(*skill))
        .collect();
    penalizable.sort_unstable();
    let excused_count = missing.len() - penalizable.len();

    let skill_score = if company_skills.is_empty() {
        0.0
    } else {
        matched.len() as f64 / company_skills.len() as f64 * SKILL_WEIGHT
    };
    let project_score = student
        .projects
        .saturating_mul(POINTS_PER_PROJECT)
        .min(PROJECT_CAP) as f64;
    let experience_score = student.experience_months.min(EXPERIENCE_CAP) as f64;

    // The terms cannot exceed their caps individually; the outer min guards
    // against float rounding nudging the sum above 100.
    let fit_score = round2((skill_score + project_score + experience_score).min(100.0));

    let mut reasons = Vec::new();
    if !penalizable.is_empty() {
        reasons.push(format!(
            "Missing core skills currently taught: {}",
            penalizable.join(", ")
        ));
    }
    if excused_count > 0 {
        reasons.push(
            "Some required skills are taught in later years and are not penalized yet."
                .to_string(),
        );
    }
    reasons.push(fit_tier_message(fit_score).to_string());

    let mut missing_skills: Vec<String> = missing.into_iter().map(str::to_string).collect();
    missing_skills.sort_unstable();

    EvaluationResult {
        eligible: true,
        fit_score,
        missing_skills,
        reasons,
    }
}

/// Exactly one closing message per evaluation, chosen by the fit tier.
fn fit_tier_message(fit_score: f64) -> &'static str {
    if fit_score >= STRONG_FIT {
        "Strong overall fit for this company."
    } else if fit_score >= MODERATE_FIT {
        "Moderate fit. Improvement recommended."
    } else {
        "Low fit. Significant preparation required."
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
