//! Ordered experience tiers and education levels.
//!
//! Labels are the exact strings stored on profiles and in the catalog file.
//! Matching is case- and punctuation-sensitive: the tier labels use an
//! en-dash (`1–3 years`), and `1-3 years` with an ASCII hyphen is NOT a tier.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceTier {
    #[serde(rename = "0 years (Fresh Graduate)")]
    FreshGraduate,
    #[serde(rename = "Less than 1 year")]
    UnderOneYear,
    #[serde(rename = "1–3 years")]
    OneToThree,
    #[serde(rename = "3–5 years")]
    ThreeToFive,
    #[serde(rename = "5–10 years")]
    FiveToTen,
    #[serde(rename = "10+ years")]
    TenPlus,
}

impl ExperienceTier {
    /// Junior to senior.
    pub const ALL: [ExperienceTier; 6] = [
        ExperienceTier::FreshGraduate,
        ExperienceTier::UnderOneYear,
        ExperienceTier::OneToThree,
        ExperienceTier::ThreeToFive,
        ExperienceTier::FiveToTen,
        ExperienceTier::TenPlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceTier::FreshGraduate => "0 years (Fresh Graduate)",
            ExperienceTier::UnderOneYear => "Less than 1 year",
            ExperienceTier::OneToThree => "1–3 years",
            ExperienceTier::ThreeToFive => "3–5 years",
            ExperienceTier::FiveToTen => "5–10 years",
            ExperienceTier::TenPlus => "10+ years",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Fraction of the location/education-adjusted base pay this tier earns.
    pub fn pay_weight(self) -> f64 {
        match self {
            ExperienceTier::FreshGraduate => 0.70,
            ExperienceTier::UnderOneYear => 0.80,
            ExperienceTier::OneToThree => 0.92,
            ExperienceTier::ThreeToFive => 1.02,
            ExperienceTier::FiveToTen => 1.15,
            ExperienceTier::TenPlus => 1.30,
        }
    }

    /// Floor of the seniority percentile and the width of its upward jitter.
    pub fn percentile_band(self) -> (u8, f64) {
        match self {
            ExperienceTier::FreshGraduate => (25, 10.0),
            ExperienceTier::UnderOneYear => (30, 10.0),
            ExperienceTier::OneToThree => (40, 10.0),
            ExperienceTier::ThreeToFive => (55, 10.0),
            ExperienceTier::FiveToTen => (70, 10.0),
            ExperienceTier::TenPlus => (85, 8.0),
        }
    }

    /// The next tier down, `None` for fresh graduates.
    pub fn junior(self) -> Option<Self> {
        let idx = Self::ALL.iter().position(|t| *t == self)?;
        idx.checked_sub(1).map(|i| Self::ALL[i])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "Diploma")]
    Diploma,
    #[serde(rename = "Associate Degree")]
    AssociateDegree,
    #[serde(rename = "Bachelor's Degree")]
    BachelorsDegree,
    #[serde(rename = "Master's Degree")]
    MastersDegree,
    #[serde(rename = "PhD")]
    Phd,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::Diploma,
        EducationLevel::AssociateDegree,
        EducationLevel::BachelorsDegree,
        EducationLevel::MastersDegree,
        EducationLevel::Phd,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Diploma => "Diploma",
            EducationLevel::AssociateDegree => "Associate Degree",
            EducationLevel::BachelorsDegree => "Bachelor's Degree",
            EducationLevel::MastersDegree => "Master's Degree",
            EducationLevel::Phd => "PhD",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.label() == label)
    }

    pub fn pay_multiplier(self) -> f64 {
        match self {
            EducationLevel::Diploma => 0.88,
            EducationLevel::AssociateDegree => 0.95,
            EducationLevel::BachelorsDegree => 1.0,
            EducationLevel::MastersDegree => 1.17,
            EducationLevel::Phd => 1.27,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_labels_round_trip() {
        for tier in ExperienceTier::ALL {
            assert_eq!(ExperienceTier::from_label(tier.label()), Some(tier));
        }
        for level in EducationLevel::ALL {
            assert_eq!(EducationLevel::from_label(level.label()), Some(level));
        }
    }

    #[test]
    fn test_hyphenated_tier_label_is_rejected() {
        assert_eq!(ExperienceTier::from_label("1-3 years"), None);
        assert_eq!(ExperienceTier::from_label("5-10 years"), None);
        assert_eq!(
            ExperienceTier::from_label("1–3 years"),
            Some(ExperienceTier::OneToThree)
        );
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(EducationLevel::from_label("phd"), None);
        assert_eq!(EducationLevel::from_label("High School"), None);
    }

    #[test]
    fn test_pay_weights_increase_with_seniority() {
        let weights: Vec<f64> = ExperienceTier::ALL.iter().map(|t| t.pay_weight()).collect();
        assert!(weights.windows(2).all(|w| w[0] < w[1]), "weights: {weights:?}");
    }

    #[test]
    fn test_junior_tier_chain() {
        assert_eq!(ExperienceTier::FreshGraduate.junior(), None);
        assert_eq!(
            ExperienceTier::TenPlus.junior(),
            Some(ExperienceTier::FiveToTen)
        );
        assert_eq!(
            ExperienceTier::UnderOneYear.junior(),
            Some(ExperienceTier::FreshGraduate)
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ExperienceTier::FiveToTen).unwrap();
        assert_eq!(json, "\"5–10 years\"");
        let level: EducationLevel = serde_json::from_str("\"Bachelor's Degree\"").unwrap();
        assert_eq!(level, EducationLevel::BachelorsDegree);
    }
}
