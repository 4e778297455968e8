//! Skill-set normalization shared by the engine, the resolver, and the handlers.

use std::collections::HashSet;

/// Lowercases, trims, and dedupes a raw skill list. Empty tokens never enter
/// the set.
pub fn normalize_skills<I, S>(skills: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .filter_map(|skill| {
            let skill = skill.as_ref().trim().to_lowercase();
            if skill.is_empty() {
                None
            } else {
                Some(skill)
            }
        })
        .collect()
}

/// Splits free-text comma-separated input ("Java, SQL, ") into raw tokens.
/// Normalization happens later, inside the engine.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        let set = normalize_skills(["  Java ", "SQL"]);
        assert!(set.contains("java"));
        assert!(set.contains("sql"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_normalize_drops_empty_tokens() {
        let set = normalize_skills(["", "   ", "python"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("python"));
    }

    #[test]
    fn test_normalize_dedupes_case_variants() {
        let set = normalize_skills(["Java", "java", "JAVA"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_skill_list_splits_on_commas() {
        assert_eq!(
            parse_skill_list("Java, SQL ,data structures"),
            vec!["Java", "SQL", "data structures"]
        );
    }

    #[test]
    fn test_parse_skill_list_skips_blank_segments() {
        assert_eq!(parse_skill_list("java,, ,sql,"), vec!["java", "sql"]);
        assert!(parse_skill_list("").is_empty());
    }
}
