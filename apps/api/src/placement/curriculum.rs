//! Curriculum resolver — which skills has a student been taught by now?

use std::collections::HashSet;

use crate::models::curriculum::CurriculumTable;
use crate::models::student::AcademicYear;
use crate::placement::skills::normalize_skills;

/// Unions every subject's skills across the curriculum prefix up to and
/// including `year`, normalized. Unknown year labels yield an empty set, so
/// relaxation simply never applies to them.
pub fn skills_taught_up_to_year(year: &str, curriculum: &CurriculumTable) -> HashSet<String> {
    let Some(year) = AcademicYear::from_label(year) else {
        return HashSet::new();
    };

    let mut taught = Vec::new();
    for label in year.labels_through() {
        for subject in curriculum.subjects_for(label) {
            taught.extend(subject.skills.iter().map(String::as_str));
        }
    }

    normalize_skills(taught)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::curriculum::Subject;

    fn subject(name: &str, skills: &[&str]) -> Subject {
        Subject {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn campus_curriculum() -> CurriculumTable {
        let mut table = CurriculumTable::new();
        table.insert_year(
            "1st Year",
            vec![subject("Programming Fundamentals", &["C", "Python"])],
        );
        table.insert_year(
            "2nd Year",
            vec![
                subject("Data Structures", &["Data Structures"]),
                subject("Object Oriented Programming", &["Java"]),
            ],
        );
        table.insert_year("3rd Year", vec![subject("Database Systems", &["SQL", "DBMS"])]);
        table.insert_year("4th Year", vec![subject("System Design", &["System Design"])]);
        table
    }

    #[test]
    fn test_first_year_sees_only_first_year_skills() {
        let taught = skills_taught_up_to_year("1st Year", &campus_curriculum());
        assert!(taught.contains("c"));
        assert!(taught.contains("python"));
        assert!(!taught.contains("java"));
        assert_eq!(taught.len(), 2);
    }

    #[test]
    fn test_later_year_unions_the_prefix() {
        let taught = skills_taught_up_to_year("3rd Year", &campus_curriculum());
        assert!(taught.contains("python"));
        assert!(taught.contains("java"));
        assert!(taught.contains("sql"));
        assert!(taught.contains("dbms"));
        assert!(!taught.contains("system design"));
    }

    #[test]
    fn test_unknown_year_yields_empty_set() {
        assert!(skills_taught_up_to_year("Select", &campus_curriculum()).is_empty());
        assert!(skills_taught_up_to_year("", &campus_curriculum()).is_empty());
    }

    #[test]
    fn test_taught_skills_are_normalized() {
        let mut table = CurriculumTable::new();
        table.insert_year("1st Year", vec![subject("Messy", &["  Python ", "", "PYTHON"])]);
        let taught = skills_taught_up_to_year("1st Year", &table);
        assert_eq!(taught.len(), 1);
        assert!(taught.contains("python"));
    }

    #[test]
    fn test_years_missing_from_table_are_skipped() {
        let mut table = CurriculumTable::new();
        table.insert_year("2nd Year", vec![subject("Data Structures", &["Data Structures"])]);
        let taught = skills_taught_up_to_year("4th Year", &table);
        assert_eq!(taught.len(), 1);
        assert!(taught.contains("data structures"));
    }
}
