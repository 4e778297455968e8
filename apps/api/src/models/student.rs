use serde::{Deserialize, Serialize};

/// Canonical academic-year order used by the curriculum resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AcademicYear {
    #[serde(rename = "1st Year")]
    First,
    #[serde(rename = "2nd Year")]
    Second,
    #[serde(rename = "3rd Year")]
    Third,
    #[serde(rename = "4th Year")]
    Fourth,
}

impl AcademicYear {
    pub const LABELS: [&'static str; 4] = ["1st Year", "2nd Year", "3rd Year", "4th Year"];

    /// Fail-soft lookup: an unrecognized label returns `None` rather than an
    /// error, so curriculum relaxation simply never triggers for it.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "1st Year" => Some(Self::First),
            "2nd Year" => Some(Self::Second),
            "3rd Year" => Some(Self::Third),
            "4th Year" => Some(Self::Fourth),
            _ => None,
        }
    }

    /// Labels from 1st Year up to and including this year.
    pub fn labels_through(self) -> &'static [&'static str] {
        &Self::LABELS[..=self as usize]
    }
}

/// A student profile assembled by the presentation layer from raw user input.
/// Immutable during one evaluation pass; skills are normalized by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Raw academic-year label (e.g. "3rd Year"). Unknown labels are tolerated
    /// and disable curriculum relaxation.
    pub year: String,
    pub cgpa: f64,
    pub skills: Vec<String>,
    pub experience_months: u32,
    pub projects: u32,
}
