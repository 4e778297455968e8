#![allow(dead_code)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One taught subject and the skills it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub skills: Vec<String>,
}

/// Year label → subjects taught that year. Loaded once at startup, read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurriculumTable {
    years: HashMap<String, Vec<Subject>>,
}

impl CurriculumTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_year(&mut self, label: impl Into<String>, subjects: Vec<Subject>) {
        self.years.insert(label.into(), subjects);
    }

    pub fn subjects_for(&self, label: &str) -> &[Subject] {
        self.years.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn year_count(&self) -> usize {
        self.years.len()
    }
}
