//! Startup loaders for the static company directory and curriculum table.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

use crate::models::company::Company;
use crate::models::curriculum::CurriculumTable;

/// Loads the company directory from `.json` (an array of company records) or
/// `.csv` (the legacy dataset export).
pub fn load_companies(path: &Path) -> Result<Vec<Company>> {
    let companies = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => load_companies_json(path)?,
        Some("csv") => load_companies_csv(path)?,
        _ => bail!("unsupported company directory format: {}", path.display()),
    };
    info!("Loaded {} companies from {}", companies.len(), path.display());
    Ok(companies)
}

fn load_companies_json(path: &Path) -> Result<Vec<Company>> {
    let file = File::open(path)
        .with_context(|| format!("could not open company directory {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("invalid company JSON in {}", path.display()))
}

/// Column layout of the legacy CSV export.
#[derive(Debug, Deserialize)]
struct CompanyCsvRow {
    #[serde(rename = "Company Name")]
    name: String,
    #[serde(rename = "Required CGPA")]
    min_cgpa: f64,
    #[serde(rename = "Required Skills")]
    skills: String,
}

fn load_companies_csv(path: &Path) -> Result<Vec<Company>> {
    let file = File::open(path)
        .with_context(|| format!("could not open company directory {}", path.display()))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut companies = Vec::new();
    for row in reader.deserialize::<CompanyCsvRow>() {
        let row = row.with_context(|| format!("invalid company CSV row in {}", path.display()))?;
        companies.push(Company {
            name: row.name,
            min_cgpa: row.min_cgpa,
            // Skills are comma-separated inside the cell
            skills: row
                .skills
                .split(',')
                .map(|skill| skill.trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect(),
        });
    }
    Ok(companies)
}

/// Loads the curriculum table: a JSON object keyed by academic-year label.
pub fn load_curriculum(path: &Path) -> Result<CurriculumTable> {
    let file = File::open(path)
        .with_context(|| format!("could not open curriculum table {}", path.display()))?;
    let curriculum: CurriculumTable = serde_json::from_reader(file)
        .with_context(|| format!("invalid curriculum JSON in {}", path.display()))?;
    info!(
        "Loaded curriculum for {} academic years from {}",
        curriculum.year_count(),
        path.display()
    );
    Ok(curriculum)
}
