//! Salary estimation service: a seeded compensation catalog plus an HTTP
//! estimator that matches job-seeker profiles against it.

pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod estimator;
pub mod models;
pub mod profiles;
pub mod reference;
pub mod routes;
pub mod state;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::generator::{generate_catalog, GeneratorOptions};
use crate::catalog::Catalog;
use crate::reference::Vocabulary;

/// Installs the global subscriber for binary `bin`. `RUST_LOG` wins when set.
pub fn init_tracing(bin: &str, default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{bin}={default_level},careerpath_api={default_level},tower_http={default_level}"
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Loads the catalog at `path`, or generates a fresh one in memory when the
/// file does not exist yet. A present but unreadable file is an error.
pub async fn load_or_generate_catalog(path: &Path, seed: Option<u64>) -> Result<Catalog> {
    if path.exists() {
        let owned = path.to_path_buf();
        let catalog = tokio::task::spawn_blocking(move || Catalog::load(&owned))
            .await
            .context("catalog loader panicked")?
            .with_context(|| format!("failed to load catalog from {}", path.display()))?;
        info!("Loaded {} catalog records from {}", catalog.len(), path.display());
        return Ok(catalog);
    }

    warn!(
        "Catalog file {} not found; generating in memory (seed: {seed:?})",
        path.display()
    );
    let catalog = tokio::task::spawn_blocking(move || {
        generate_catalog(&Vocabulary::default(), &GeneratorOptions { seed })
    })
    .await
    .context("catalog generator panicked")?
    .context("failed to generate catalog")?;
    info!("Generated {} catalog records", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_falls_back_to_generation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let catalog = load_or_generate_catalog(&path, Some(5)).await.unwrap();
        assert_eq!(catalog.len(), Vocabulary::default().expected_record_count());
        assert_eq!(catalog.metadata().seed, Some(5));
        assert!(!path.exists(), "fallback must not write the file");
    }

    #[tokio::test]
    async fn test_existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let generated =
            generate_catalog(&Vocabulary::default(), &GeneratorOptions { seed: Some(9) }).unwrap();
        generated.save(&path, false).unwrap();

        let loaded = load_or_generate_catalog(&path, Some(1)).await.unwrap();
        assert_eq!(loaded.metadata().seed, Some(9));
        assert_eq!(loaded.records(), generated.records());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(load_or_generate_catalog(&path, None).await.is_err());
    }
}
