//! Display metrics recomputed at query time from a matched record's `avg`.
//!
//! These deliberately do NOT reuse the record's stored `trend`, `growth_percent`
//! or `percentile`. The stored trend is a forward simulation from `min`; the
//! view here is a smoothed look back over the last five calendar years.

use serde::{Deserialize, Serialize};

use crate::catalog::generator::percent_change;

/// First calendar year of the historical view.
pub const HISTORY_START_YEAR: i32 = 2020;

/// Year-over-year multipliers applied to `avg`, oldest first.
const HISTORY_MULTIPLIERS: [f64; 5] = [0.85, 0.90, 0.95, 1.00, 1.03];

/// The synthetic national average is this fraction of the matched `avg`.
pub const NATIONAL_AVERAGE_FACTOR: f64 = 0.92;

/// Roles shown as "other popular roles" next to an estimate.
pub const POPULAR_ROLES: &[&str] = &["Product Manager", "Web Developer", "Data Scientist"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub value: u32,
}

pub fn historical_trend(avg: u32) -> Vec<TrendPoint> {
    HISTORY_MULTIPLIERS
        .iter()
        .enumerate()
        .map(|(i, m)| TrendPoint {
            year: HISTORY_START_YEAR + i as i32,
            value: (f64::from(avg) * m).round() as u32,
        })
        .collect()
}

/// Growth from the first to the last point of a trend, rounded to a percent.
pub fn trend_growth_percent(trend: &[TrendPoint]) -> i32 {
    match (trend.first(), trend.last()) {
        (Some(first), Some(last)) => percent_change(first.value, last.value),
        _ => 0,
    }
}

pub fn national_average(avg: u32) -> f64 {
    f64::from(avg) * NATIONAL_AVERAGE_FACTOR
}

/// Percentage by which `avg` sits above (or below) the national average.
pub fn percent_above(avg: u32, national_avg: f64) -> f64 {
    (f64::from(avg) - national_avg) / national_avg * 100.0
}

/// Coarse percentile bucket for a percentage difference from the national
/// average.
pub fn percentile_bucket(percent_diff: f64) -> u8 {
    match percent_diff {
        d if d >= 30.0 => 90,
        d if d >= 20.0 => 80,
        d if d >= 10.0 => 70,
        d if d >= 0.0 => 60,
        d if d > -10.0 => 40,
        d if d > -20.0 => 30,
        _ => 20,
    }
}

const GENERIC_TIP: &str = "Keep skills current and build a strong professional network.";

const CAREER_TIPS: &[(&str, &str)] = &[
    (
        "UI/UX Designer",
        "Upskill in prototyping tools (Figma/Sketch) or a front-end framework (React) to boost your value.",
    ),
    (
        "Software Engineer",
        "Cloud (AWS/Azure) and system design skills increase demand and salary.",
    ),
];

pub fn career_tip(career: &str) -> &'static str {
    CAREER_TIPS
        .iter()
        .find(|(name, _)| *name == career)
        .map(|(_, tip)| *tip)
        .unwrap_or(GENERIC_TIP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_trend_years_and_values() {
        let trend = historical_trend(1000);
        let years: Vec<_> = trend.iter().map(|p| p.year).collect();
        let values: Vec<_> = trend.iter().map(|p| p.value).collect();
        assert_eq!(years, vec![2020, 2021, 2022, 2023, 2024]);
        assert_eq!(values, vec![850, 900, 950, 1000, 1030]);
    }

    #[test]
    fn test_historical_growth_uses_rounded_points() {
        // 5566 → 4731 (0.85) and 5733 (1.03)
        let trend = historical_trend(5566);
        assert_eq!(trend[0].value, 4731);
        assert_eq!(trend[4].value, 5733);
        assert_eq!(trend_growth_percent(&trend), 21);
        assert_eq!(trend_growth_percent(&[]), 0);
    }

    #[test]
    fn test_percent_above_national_average_is_constant() {
        for avg in [500, 5566, 12_000] {
            let diff = percent_above(avg, national_average(avg));
            assert!((diff - 8.6956).abs() < 0.001, "diff {diff}");
            assert_eq!(percentile_bucket(diff), 60);
        }
    }

    #[test]
    fn test_percentile_bucket_thresholds() {
        assert_eq!(percentile_bucket(45.0), 90);
        assert_eq!(percentile_bucket(30.0), 90);
        assert_eq!(percentile_bucket(29.9), 80);
        assert_eq!(percentile_bucket(20.0), 80);
        assert_eq!(percentile_bucket(10.0), 70);
        assert_eq!(percentile_bucket(0.0), 60);
        assert_eq!(percentile_bucket(-0.1), 40);
        assert_eq!(percentile_bucket(-10.0), 30);
        assert_eq!(percentile_bucket(-19.9), 30);
        assert_eq!(percentile_bucket(-20.0), 20);
        assert_eq!(percentile_bucket(-75.0), 20);
    }

    #[test]
    fn test_career_tips() {
        assert!(career_tip("Software Engineer").contains("system design"));
        assert!(career_tip("UI/UX Designer").contains("Figma"));
        assert_eq!(career_tip("Chef"), GENERIC_TIP);
        assert_eq!(career_tip("software engineer"), GENERIC_TIP);
    }
}
