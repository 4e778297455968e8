use serde::{Deserialize, Serialize};

/// A recruiting company's published requirements.
/// Loaded from static configuration; read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub min_cgpa: f64,
    pub skills: Vec<String>,
}
