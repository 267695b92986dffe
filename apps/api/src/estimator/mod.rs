//! Salary estimator — matches a profile against the catalog and derives the
//! display metrics shown next to the match.
//!
//! The caller always gets one of three distinguishable outcomes: an estimate,
//! an incomplete profile (nothing looked up), or no data for a complete
//! profile.

pub mod handlers;
pub mod insights;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, CompensationRecord};
use crate::estimator::insights::{
    career_tip, historical_trend, national_average, percent_above, percentile_bucket,
    trend_growth_percent, TrendPoint, POPULAR_ROLES,
};

/// The four profile fields the estimator keys on. Blank strings count as
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileQuery {
    pub career: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryBand {
    pub min: u32,
    pub avg: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimilarRole {
    pub career: String,
    pub avg: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryEstimate {
    pub record: CompensationRecord,
    pub band: SalaryBand,
    /// Smoothed 2020–2024 view anchored on `avg`, not the stored forward trend.
    pub historical_trend: Vec<TrendPoint>,
    pub historical_growth_percent: i32,
    pub national_average: f64,
    pub percent_above_national: f64,
    /// Query-time bucket; independent of `record.percentile`.
    pub percentile: u8,
    pub career_tip: &'static str,
    pub similar_roles: Vec<SimilarRole>,
}

#[derive(Debug, Clone)]
pub enum EstimateOutcome {
    Found(Box<SalaryEstimate>),
    IncompleteProfile { missing: Vec<&'static str> },
    NoData,
}

impl ProfileQuery {
    /// Names of required fields that are absent or blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("career", &self.career),
            ("location", &self.location),
            ("experience", &self.experience),
            ("education", &self.education),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }
}

/// Runs the estimator for one profile.
pub fn estimate(catalog: &Catalog, query: &ProfileQuery) -> EstimateOutcome {
    let missing = query.missing_fields();
    if !missing.is_empty() {
        return EstimateOutcome::IncompleteProfile { missing };
    }

    // Presence was checked above.
    let (Some(career), Some(location), Some(experience), Some(education)) = (
        query.career.as_deref(),
        query.location.as_deref(),
        query.experience.as_deref(),
        query.education.as_deref(),
    ) else {
        return EstimateOutcome::IncompleteProfile { missing };
    };

    let Some(record) = catalog.find(career, location, experience, education) else {
        debug!("No catalog entry for {career} / {location} / {experience} / {education}");
        return EstimateOutcome::NoData;
    };

    EstimateOutcome::Found(Box::new(derive_estimate(catalog, record)))
}

fn derive_estimate(catalog: &Catalog, record: &CompensationRecord) -> SalaryEstimate {
    let historical_trend = historical_trend(record.avg);
    let historical_growth_percent = trend_growth_percent(&historical_trend);
    let national_average = national_average(record.avg);
    let percent_above_national = percent_above(record.avg, national_average);

    SalaryEstimate {
        band: SalaryBand {
            min: record.min,
            avg: record.avg,
            max: record.max,
        },
        historical_trend,
        historical_growth_percent,
        national_average,
        percent_above_national,
        percentile: percentile_bucket(percent_above_national),
        career_tip: career_tip(&record.career),
        similar_roles: similar_roles(catalog, record),
        record: record.clone(),
    }
}

/// Popular roles at the same location, education and experience, excluding
/// the matched career itself.
fn similar_roles(catalog: &Catalog, record: &CompensationRecord) -> Vec<SimilarRole> {
    POPULAR_ROLES
        .iter()
        .filter(|role| **role != record.career)
        .filter_map(|role| {
            let mut key = record.key();
            key.career = role.to_string();
            catalog.get(&key).map(|r| SimilarRole {
                career: r.career.clone(),
                avg: r.avg,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::generator::{generate_catalog, GeneratorOptions};
    use crate::reference::Vocabulary;

    fn catalog() -> Catalog {
        generate_catalog(&Vocabulary::default(), &GeneratorOptions { seed: Some(11) }).unwrap()
    }

    fn query(career: &str, location: &str, experience: &str, education: &str) -> ProfileQuery {
        ProfileQuery {
            career: Some(career.to_string()),
            location: Some(location.to_string()),
            experience: Some(experience.to_string()),
            education: Some(education.to_string()),
        }
    }

    fn expect_found(outcome: EstimateOutcome) -> SalaryEstimate {
        match outcome {
            EstimateOutcome::Found(estimate) => *estimate,
            other => panic!("expected an estimate, got {other:?}"),
        }
    }

    #[test]
    fn test_match_echoes_key_fields() {
        let catalog = catalog();
        let q = query("Nurse", "Japan", "3–5 years", "Master's Degree");
        let estimate = expect_found(estimate(&catalog, &q));

        assert_eq!(estimate.record.career, "Nurse");
        assert_eq!(estimate.record.location, "Japan");
        assert_eq!(estimate.record.experience.label(), "3–5 years");
        assert_eq!(estimate.record.education.label(), "Master's Degree");
    }

    #[test]
    fn test_software_engineer_usa_scenario() {
        let catalog = catalog();
        let q = query("Software Engineer", "USA", "5–10 years", "Bachelor's Degree");
        let estimate = expect_found(estimate(&catalog, &q));

        assert_eq!(estimate.band.avg, 5566);
        assert!((estimate.percent_above_national - 8.7).abs() < 0.01);
        assert_eq!(estimate.percentile, 60);
        assert_eq!(estimate.historical_growth_percent, 21);
        assert!(estimate.career_tip.contains("Cloud"));
    }

    #[test]
    fn test_query_time_metrics_ignore_stored_ones() {
        let catalog = catalog();
        let q = query("Doctor", "UK", "10+ years", "PhD");
        let estimate = expect_found(estimate(&catalog, &q));

        // Stored percentile is a seniority rank (85–93), the query-time one a bucket.
        assert!(estimate.record.percentile >= 85);
        assert_eq!(estimate.percentile, 60);
        assert_eq!(estimate.historical_trend[3].value, estimate.record.avg);
        assert_ne!(
            estimate.historical_trend[0].value,
            estimate.record.trend[0],
            "historical view must not reuse the forward simulation"
        );
    }

    #[test]
    fn test_each_missing_field_is_incomplete() {
        let catalog = catalog();
        let full = query("Chef", "India", "1–3 years", "Diploma");

        let cases: [(&str, fn(&mut ProfileQuery)); 4] = [
            ("career", |q| q.career = None),
            ("location", |q| q.location = Some(String::new())),
            ("experience", |q| q.experience = Some("   ".to_string())),
            ("education", |q| q.education = None),
        ];

        for (field, clear) in cases {
            let mut q = full.clone();
            clear(&mut q);
            match estimate(&catalog, &q) {
                EstimateOutcome::IncompleteProfile { missing } => assert_eq!(missing, vec![field]),
                other => panic!("expected incomplete for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_profile_lists_all_fields() {
        let outcome = estimate(&catalog(), &ProfileQuery::default());
        match outcome {
            EstimateOutcome::IncompleteProfile { missing } => {
                assert_eq!(missing, vec!["career", "location", "experience", "education"])
            }
            other => panic!("expected incomplete, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_values_are_no_data() {
        let catalog = catalog();
        let cases = [
            query("Astronaut", "USA", "1–3 years", "PhD"),
            query("Chef", "Atlantis", "1–3 years", "Diploma"),
            query("Chef", "Qatar", "1–3 years", "Diploma"),
            query("Chef", "India", "1-3 years", "Diploma"),
            query("Chef", "India", "1–3 years", "High School"),
        ];
        for q in cases {
            assert!(
                matches!(estimate(&catalog, &q), EstimateOutcome::NoData),
                "expected no data for {q:?}"
            );
        }
    }

    #[test]
    fn test_similar_roles_share_location_and_level() {
        let catalog = catalog();
        let q = query("Web Developer", "Germany", "1–3 years", "Bachelor's Degree");
        let estimate = expect_found(estimate(&catalog, &q));

        let careers: Vec<_> = estimate.similar_roles.iter().map(|r| r.career.as_str()).collect();
        assert_eq!(careers, vec!["Product Manager", "Data Scientist"]);

        let pm = catalog
            .find("Product Manager", "Germany", "1–3 years", "Bachelor's Degree")
            .unwrap();
        assert_eq!(estimate.similar_roles[0].avg, pm.avg);
    }
}
