//! Axum route handlers exposing catalog metadata and the profile vocabulary.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::reference::{EducationLevel, ExperienceTier, Vocabulary};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub careers: Vec<String>,
    pub locations: Vec<String>,
    pub education_levels: Vec<&'static str>,
    pub experience_tiers: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub record_count: usize,
    pub generated_at: DateTime<Utc>,
    pub seed: Option<u64>,
    pub source: String,
}

/// GET /api/v1/salary/vocabulary
///
/// The exact strings a profile must use to match catalog rows, in form order.
pub async fn handle_vocabulary() -> Json<VocabularyResponse> {
    let Vocabulary { careers, locations } = Vocabulary::default();
    Json(VocabularyResponse {
        careers,
        locations,
        education_levels: EducationLevel::ALL.iter().map(|e| e.label()).collect(),
        experience_tiers: ExperienceTier::ALL.iter().map(|t| t.label()).collect(),
    })
}

/// GET /api/v1/salary/catalog
pub async fn handle_catalog_summary(State(state): State<AppState>) -> Json<CatalogSummary> {
    let metadata = state.catalog.metadata();
    Json(CatalogSummary {
        record_count: state.catalog.len(),
        generated_at: metadata.generated_at,
        seed: metadata.seed,
        source: state.config.catalog_path.display().to_string(),
    })
}
