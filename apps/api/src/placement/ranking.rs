//! Batch aggregation — evaluate a student against the whole directory and
//! rank the eligible companies.
//!
//! Individual evaluations are independent and commutative; only this sort
//! imposes an order.

use serde::{Deserialize, Serialize};

use crate::models::company::Company;
use crate::models::curriculum::CurriculumTable;
use crate::models::student::Student;
use crate::placement::engine::{evaluate_company, EvaluationResult};

/// One company's evaluation, labeled for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEvaluation {
    pub company: String,
    #[serde(flatten)]
    pub evaluation: EvaluationResult,
}

/// Evaluates every company, keeps the eligible results, and sorts them by fit
/// score descending. Ties break on company name so the order is deterministic.
pub fn rank_companies(
    student: &Student,
    companies: &[Company],
    curriculum: &CurriculumTable,
) -> Vec<RankedEvaluation> {
    let mut ranked: Vec<RankedEvaluation> = companies
        .iter()
        .map(|company| RankedEvaluation {
            company: company.name.clone(),
            evaluation: evaluate_company(student, company, curriculum),
        })
        .filter(|entry| entry.evaluation.eligible)
        .collect();

    ranked.sort_by(|a, b| {
        b.evaluation
            .fit_score
            .partial_cmp(&a.evaluation.fit_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.company.cmp(&b.company))
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(cgpa: f64, skills: &[&str]) -> Student {
        Student {
            year: "3rd Year".to_string(),
            cgpa,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_months: 0,
            projects: 0,
        }
    }

    fn company(name: &str, min_cgpa: f64, skills: &[&str]) -> Company {
        Company {
            name: name.to_string(),
            min_cgpa,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_ineligible_companies_are_filtered_out() {
        let companies = vec![
            company("Reachable", 7.0, &["java"]),
            company("Out of Reach", 9.5, &["java"]),
        ];
        let ranked = rank_companies(
            &student(8.0, &["java"]),
            &companies,
            &CurriculumTable::new(),
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].company, "Reachable");
    }

    #[test]
    fn test_results_sorted_by_fit_score_descending() {
        let companies = vec![
            company("Half", 6.0, &["java", "rust"]),
            company("Full", 6.0, &["java"]),
            company("None", 6.0, &["rust", "go"]),
        ];
        let ranked = rank_companies(
            &student(8.0, &["java"]),
            &companies,
            &CurriculumTable::new(),
        );
        let order: Vec<&str> = ranked.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(order, vec!["Full", "Half", "None"]);
    }

    #[test]
    fn test_ties_break_on_company_name() {
        let companies = vec![
            company("Zeta", 6.0, &["java"]),
            company("Alpha", 6.0, &["java"]),
        ];
        let ranked = rank_companies(
            &student(8.0, &["java"]),
            &companies,
            &CurriculumTable::new(),
        );
        assert_eq!(ranked[0].company, "Alpha");
        assert_eq!(ranked[1].company, "Zeta");
    }

    #[test]
    fn test_empty_directory_ranks_nothing() {
        let ranked = rank_companies(&student(8.0, &["java"]), &[], &CurriculumTable::new());
        assert!(ranked.is_empty());
    }
}
