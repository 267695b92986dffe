//! Compensation catalog — the immutable, process-wide reference dataset.
//!
//! Built once by `generator`, written to disk as JSON, loaded at service
//! startup and shared as `Arc<Catalog>`. The (career, location, experience,
//! education) key is unique; both construction paths reject duplicates.

pub mod generator;
pub mod handlers;

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::reference::{EducationLevel, ExperienceTier};

/// Number of simulated years stored on every record.
pub const TREND_YEARS: usize = 5;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate catalog key: {career} / {location} / {experience} / {education}")]
    DuplicateKey {
        career: String,
        location: String,
        experience: &'static str,
        education: &'static str,
    },

    #[error("catalog declares {declared} records but contains {actual}")]
    CountMismatch { declared: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationRecord {
    pub career: String,
    pub location: String,
    pub experience: ExperienceTier,
    pub education: EducationLevel,
    pub min: u32,
    pub avg: u32,
    pub max: u32,
    /// Forward-looking simulation starting from `min`.
    pub trend: [u32; TREND_YEARS],
    pub growth_percent: i32,
    /// Seniority rank derived from `experience` only.
    pub percentile: u8,
    pub cost_of_living: u32,
    pub after_cost: i64,
    pub salary_ratio: f64,
}

impl CompensationRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            career: self.career.clone(),
            location: self.location.clone(),
            experience: self.experience,
            education: self.education,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub career: String,
    pub location: String,
    pub experience: ExperienceTier,
    pub education: EducationLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub generated_at: DateTime<Utc>,
    /// `None` when generated from OS entropy.
    pub seed: Option<u64>,
}

/// On-disk layout of a catalog file.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    generated_at: DateTime<Utc>,
    seed: Option<u64>,
    record_count: usize,
    records: Vec<CompensationRecord>,
}

#[derive(Debug)]
pub struct Catalog {
    metadata: CatalogMetadata,
    records: Vec<CompensationRecord>,
    index: HashMap<RecordKey, usize>,
}

impl Catalog {
    /// Builds the catalog and its key index. Fails on the first duplicate key.
    pub fn from_records(
        metadata: CatalogMetadata,
        records: Vec<CompensationRecord>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.key(), i).is_some() {
                return Err(CatalogError::DuplicateKey {
                    career: record.career.clone(),
                    location: record.location.clone(),
                    experience: record.experience.label(),
                    education: record.education.label(),
                });
            }
        }
        Ok(Self {
            metadata,
            records,
            index,
        })
    }

    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    pub fn records(&self) -> &[CompensationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &RecordKey) -> Option<&CompensationRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    /// Exact-match lookup on raw profile strings. Labels outside the tier or
    /// education vocabularies simply do not match.
    pub fn find(
        &self,
        career: &str,
        location: &str,
        experience: &str,
        education: &str,
    ) -> Option<&CompensationRecord> {
        let key = RecordKey {
            career: career.to_string(),
            location: location.to_string(),
            experience: ExperienceTier::from_label(experience)?,
            education: EducationLevel::from_label(education)?,
        };
        self.get(&key)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = std::fs::read(path)?;
        let file: CatalogFile = serde_json::from_slice(&bytes)?;
        if file.record_count != file.records.len() {
            return Err(CatalogError::CountMismatch {
                declared: file.record_count,
                actual: file.records.len(),
            });
        }
        let metadata = CatalogMetadata {
            generated_at: file.generated_at,
            seed: file.seed,
        };
        let catalog = Self::from_records(metadata, file.records)?;
        info!(
            "Loaded {} catalog records from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn save(&self, path: &Path, pretty: bool) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = CatalogFile {
            generated_at: self.metadata.generated_at,
            seed: self.metadata.seed,
            record_count: self.records.len(),
            records: self.records.clone(),
        };
        let bytes = if pretty {
            serde_json::to_vec_pretty(&file)?
        } else {
            serde_json::to_vec(&file)?
        };
        std::fs::write(path, &bytes)?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}
