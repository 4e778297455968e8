//! Resume-to-company matching — plain set intersection over detected skills.
//! Deliberately curriculum-blind; the placement engine owns relaxation.

use serde::{Deserialize, Serialize};

use crate::placement::skills::normalize_skills;
use crate::resume::analyzer::ResumeAnalysis;
use crate::resume::round2;

/// How one resume lines up against one company's required skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeMatch {
    pub match_percent: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

pub fn match_resume_to_company(analysis: &ResumeAnalysis, company_skills: &[String]) -> ResumeMatch {
    let required = normalize_skills(company_skills);

    let mut matched: Vec<String> = required
        .intersection(&analysis.found_skills)
        .cloned()
        .collect();
    matched.sort_unstable();

    let mut missing: Vec<String> = required
        .difference(&analysis.found_skills)
        .cloned()
        .collect();
    missing.sort_unstable();

    let match_percent = round2(matched.len() as f64 / required.len().max(1) as f64 * 100.0);

    ResumeMatch {
        match_percent,
        matched_skills: matched,
        missing_skills: missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::analyzer::{analyze_resume, KNOWN_SKILLS};

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_match_is_one_hundred_percent() {
        let analysis = analyze_resume("Skills: Python and SQL", KNOWN_SKILLS);
        let m = match_resume_to_company(&analysis, &skills(&["Python", "SQL"]));
        assert_eq!(m.match_percent, 100.0);
        assert_eq!(m.matched_skills, vec!["python", "sql"]);
        assert!(m.missing_skills.is_empty());
    }

    #[test]
    fn test_partial_match_lists_missing_sorted() {
        let analysis = analyze_resume("Skills: java", KNOWN_SKILLS);
        let m = match_resume_to_company(&analysis, &skills(&["java", "sql", "dbms"]));
        assert_eq!(m.match_percent, 33.33);
        assert_eq!(m.matched_skills, vec!["java"]);
        assert_eq!(m.missing_skills, vec!["dbms", "sql"]);
    }

    #[test]
    fn test_empty_required_set_matches_zero_percent() {
        let analysis = analyze_resume("Skills: java", KNOWN_SKILLS);
        let m = match_resume_to_company(&analysis, &[]);
        assert_eq!(m.match_percent, 0.0);
        assert!(m.matched_skills.is_empty());
        assert!(m.missing_skills.is_empty());
    }

    #[test]
    fn test_company_skill_case_is_normalized() {
        let analysis = analyze_resume("Skills: python", KNOWN_SKILLS);
        let m = match_resume_to_company(&analysis, &skills(&["  PYTHON "]));
        assert_eq!(m.match_percent, 100.0);
    }
}
