//! Resume analysis — known-skills scan and section presence over extracted
//! text, plus a coverage score against a target skill set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::resume::extract::normalize_text;
use crate::resume::round2;

/// Vocabulary scanned for in resume text. Mirrors the campus curriculum.
pub const KNOWN_SKILLS: &[&str] = &[
    "c",
    "python",
    "java",
    "sql",
    "dbms",
    "data structures",
    "algorithms",
    "html",
    "css",
    "javascript",
];

/// Section headers every resume is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub education: bool,
    pub skills: bool,
    pub projects: bool,
    pub experience: bool,
}

impl SectionPresence {
    pub const TOTAL: usize = 4;

    pub fn detect(text: &str) -> Self {
        Self {
            education: text.contains("education"),
            skills: text.contains("skills"),
            projects: text.contains("projects"),
            experience: text.contains("experience"),
        }
    }

    pub fn present_count(&self) -> usize {
        [self.education, self.skills, self.projects, self.experience]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

/// Everything extracted from one uploaded resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub text: String,
    pub found_skills: HashSet<String>,
    pub sections: SectionPresence,
}

/// Normalizes raw extracted text and scans it for vocabulary skills and
/// section headers.
pub fn analyze_resume(raw_text: &str, known_skills: &[&str]) -> ResumeAnalysis {
    let text = normalize_text(raw_text);
    let found_skills = extract_skills(&text, known_skills);
    let sections = SectionPresence::detect(&text);
    ResumeAnalysis {
        text,
        found_skills,
        sections,
    }
}

/// Substring scan of normalized text against a skill vocabulary. Multi-word
/// skills ("data structures") match as phrases.
pub fn extract_skills(resume_text: &str, known_skills: &[&str]) -> HashSet<String> {
    known_skills
        .iter()
        .filter(|skill| resume_text.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}

/// Resume strength against one target skill set: half the weight on skill
/// coverage, half on section coverage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeScore {
    pub score: f64,
    pub explanation: Vec<String>,
}

pub fn compute_resume_score(
    analysis: &ResumeAnalysis,
    required_skills: &HashSet<String>,
) -> ResumeScore {
    let covered = analysis
        .found_skills
        .intersection(required_skills)
        .count();
    let skill_score = covered as f64 / required_skills.len().max(1) as f64 * 50.0;
    let section_score =
        analysis.sections.present_count() as f64 / SectionPresence::TOTAL as f64 * 50.0;

    let mut explanation = Vec::new();
    if skill_score < 25.0 {
        explanation.push("Low skill match with target role.".to_string());
    }
    if !analysis.sections.projects {
        explanation.push("Projects section missing or weak.".to_string());
    }

    ResumeScore {
        score: round2(skill_score + section_score),
        explanation,
    }
}
