//! Catalog generator — builds one `CompensationRecord` per
//! (career × location × education × experience) combination.
//!
//! Pay is derived from the reference tables; the only non-determinism is the
//! bounded noise on junior averages, on maxima, on the forward trend and on
//! the seniority percentile. All of it comes from a seedable `StdRng`.
//!
//! Careers are generated in parallel. Each career gets its own RNG derived
//! from the base seed, so a seeded run is reproducible regardless of how
//! rayon schedules the work.

use chrono::Utc;
use rand::prelude::*;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::catalog::{Catalog, CatalogError, CatalogMetadata, CompensationRecord, TREND_YEARS};
use crate::reference::{self, EducationLevel, ExperienceTier, Vocabulary};

/// Yearly growth drawn once per record: `BASE_GROWTH + r * GROWTH_SPREAD`.
const BASE_GROWTH: f64 = 0.04;
const GROWTH_SPREAD: f64 = 0.03;
/// Width of the per-year growth perturbation, centered on zero.
const YEARLY_NOISE: f64 = 0.03;

#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// `None` draws from OS entropy and the run is not reproducible.
    pub seed: Option<u64>,
}

/// Generates the full catalog over `vocabulary`.
///
/// Locations without a cost-of-living entry are skipped with a warning, so
/// profiles naming them resolve to "no data". Careers without a base salary
/// fall back to `reference::DEFAULT_BASE_SALARY`. A vocabulary that repeats a
/// name produces duplicate keys and fails.
pub fn generate_catalog(
    vocabulary: &Vocabulary,
    options: &GeneratorOptions,
) -> Result<Catalog, CatalogError> {
    let locations: Vec<(&str, u32)> = vocabulary
        .locations
        .iter()
        .filter_map(|location| match reference::cost_of_living(location) {
            Some(col) => Some((location.as_str(), col)),
            None => {
                warn!("No cost of living for location '{location}', skipping it");
                None
            }
        })
        .collect();

    for career in &vocabulary.careers {
        if !reference::CAREER_BASE_SALARY
            .iter()
            .any(|(name, _)| *name == career.as_str())
        {
            warn!(
                "No base salary for career '{career}', using {}",
                reference::DEFAULT_BASE_SALARY
            );
        }
    }

    info!(
        "Generating catalog: {} careers x {} locations (seed: {:?})",
        vocabulary.careers.len(),
        locations.len(),
        options.seed
    );

    let records: Vec<CompensationRecord> = vocabulary
        .careers
        .par_iter()
        .enumerate()
        .map(|(idx, career)| {
            let mut rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(idx as u64)),
                None => StdRng::from_os_rng(),
            };
            generate_career(&mut rng, career, &locations)
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    let catalog = Catalog::from_records(
        CatalogMetadata {
            generated_at: Utc::now(),
            seed: options.seed,
        },
        records,
    )?;

    info!("Generated {} catalog records", catalog.len());
    Ok(catalog)
}

fn generate_career<R: Rng + ?Sized>(
    rng: &mut R,
    career: &str,
    locations: &[(&str, u32)],
) -> Vec<CompensationRecord> {
    let mut records =
        Vec::with_capacity(locations.len() * EducationLevel::ALL.len() * ExperienceTier::ALL.len());

    for &(location, cost_of_living) in locations {
        for education in EducationLevel::ALL {
            let base = adjusted_base(career, location, education);
            let tiers = TierValues::from_base(base);

            for experience in ExperienceTier::ALL {
                let band = pay_band(rng, &tiers, experience);
                let trend = simulate_trend(rng, band.min);
                let percentile = seniority_percentile(rng, experience);

                records.push(CompensationRecord {
                    career: career.to_string(),
                    location: location.to_string(),
                    experience,
                    education,
                    min: band.min,
                    avg: band.avg,
                    max: band.max,
                    trend,
                    growth_percent: percent_change(trend[0], trend[TREND_YEARS - 1]),
                    percentile,
                    cost_of_living,
                    after_cost: i64::from(band.avg) - i64::from(cost_of_living),
                    salary_ratio: round2(f64::from(band.avg) / f64::from(cost_of_living)),
                });
            }
        }
    }

    records
}

/// Base monthly pay for a career at a location and education level.
pub fn adjusted_base(career: &str, location: &str, education: EducationLevel) -> u32 {
    let raw = f64::from(reference::base_salary(career))
        * reference::location_multiplier(location)
        * education.pay_multiplier();
    raw.round() as u32
}

/// Weighted pay per experience tier for one base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierValues([u32; 6]);

impl TierValues {
    pub fn from_base(base: u32) -> Self {
        let mut values = [0; 6];
        for (slot, tier) in values.iter_mut().zip(ExperienceTier::ALL) {
            *slot = (f64::from(base) * tier.pay_weight()).round() as u32;
        }
        Self(values)
    }

    pub fn get(&self, tier: ExperienceTier) -> u32 {
        self.0[tier as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayBand {
    pub min: u32,
    pub avg: u32,
    pub max: u32,
}

/// Min/avg/max for a tier. `min` is the junior tier's value, `avg` the tier's
/// own value, `max` widens with seniority.
pub fn pay_band<R: Rng + ?Sized>(rng: &mut R, tiers: &TierValues, tier: ExperienceTier) -> PayBand {
    let own = f64::from(tiers.get(tier));
    let min = tiers.get(tier.junior().unwrap_or(tier));

    match tier {
        ExperienceTier::FreshGraduate => PayBand {
            min,
            avg: (own * 1.04 + rng.random::<f64>() * 15.0).round() as u32,
            max: (own * 1.12 + rng.random::<f64>() * 25.0).round() as u32,
        },
        ExperienceTier::TenPlus => PayBand {
            min,
            avg: own as u32,
            max: own as u32 + (own * 0.20 + rng.random::<f64>() * 80.0).round() as u32,
        },
        _ => {
            let (spread, noise) = match tier {
                ExperienceTier::UnderOneYear => (1.11, 28.0),
                ExperienceTier::OneToThree => (1.10, 32.0),
                ExperienceTier::ThreeToFive => (1.10, 40.0),
                _ => (1.13, 55.0),
            };
            PayBand {
                min,
                avg: own as u32,
                max: (own * spread + rng.random::<f64>() * noise).round() as u32,
            }
        }
    }
}

/// Five compounding years from `start`, one growth rate per record plus
/// per-year noise.
pub fn simulate_trend<R: Rng + ?Sized>(rng: &mut R, start: u32) -> [u32; TREND_YEARS] {
    let growth = BASE_GROWTH + rng.random::<f64>() * GROWTH_SPREAD;
    let mut value = start;
    let mut trend = [0; TREND_YEARS];
    for slot in trend.iter_mut() {
        let yearly = 1.0 + growth + (rng.random::<f64>() - 0.5) * YEARLY_NOISE;
        value = (f64::from(value) * yearly).round() as u32;
        *slot = value;
    }
    trend
}

pub fn seniority_percentile<R: Rng + ?Sized>(rng: &mut R, tier: ExperienceTier) -> u8 {
    let (floor, jitter) = tier.percentile_band();
    floor + (rng.random::<f64>() * jitter).round() as u8
}

/// Rounded percentage change from `from` to `to`.
pub fn percent_change(from: u32, to: u32) -> i32 {
    if from == 0 {
        return 0;
    }
    ((f64::from(to) - f64::from(from)) / f64::from(from) * 100.0).round() as i32
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
