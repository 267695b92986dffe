//! Reference tables shared by the catalog generator, the estimator and the
//! profile form vocabulary. Defined once; every other module reads from here.

pub mod levels;

use serde::Serialize;

pub use levels::{EducationLevel, ExperienceTier};

/// Base monthly pay used for careers missing from `CAREER_BASE_SALARY`.
pub const DEFAULT_BASE_SALARY: u32 = 1200;
/// Pay multiplier used for locations missing from `LOCATIONS`.
pub const DEFAULT_LOCATION_MULTIPLIER: f64 = 1.0;

/// Careers in catalog order with their base monthly pay.
pub const CAREER_BASE_SALARY: &[(&str, u32)] = &[
    ("Software Engineer", 2200),
    ("Data Scientist", 2350),
    ("UI/UX Designer", 1750),
    ("Web Developer", 1700),
    ("Mobile Developer", 1800),
    ("Systems Analyst", 1600),
    ("Network Engineer", 1550),
    ("Cybersecurity Specialist", 2100),
    ("Cloud Engineer", 2450),
    ("Project Manager", 2500),
    ("Business Analyst", 1850),
    ("Marketing Specialist", 1400),
    ("Graphic Designer", 1250),
    ("HR Specialist", 1400),
    ("Financial Analyst", 1650),
    ("Accountant", 1450),
    ("Teacher", 1100),
    ("Nurse", 1300),
    ("Doctor", 3500),
    ("Civil Engineer", 1550),
    ("Electrician", 950),
    ("Chef", 1000),
    ("Lawyer", 2600),
    ("Product Manager", 2500),
    ("Plumber", 800),
    ("Content Writer", 900),
    ("IT Support Specialist", 1000),
    ("Mechanical Engineer", 1500),
    ("Digital Marketer", 1200),
    ("Customer Service Representative", 950),
    ("Sales Executive", 1200),
];

#[derive(Debug, Clone, Copy)]
pub struct LocationProfile {
    pub name: &'static str,
    pub pay_multiplier: f64,
    pub cost_of_living: u32,
}

const fn loc(name: &'static str, pay_multiplier: f64, cost_of_living: u32) -> LocationProfile {
    LocationProfile {
        name,
        pay_multiplier,
        cost_of_living,
    }
}

/// Locations in catalog order.
pub const LOCATIONS: &[LocationProfile] = &[
    loc("Malaysia", 1.0, 850),
    loc("Saudi Arabia", 1.05, 1000),
    loc("United Arab Emirates", 1.2, 1300),
    loc("USA", 2.2, 1800),
    loc("UK", 2.0, 1700),
    loc("Germany", 2.0, 1600),
    loc("Canada", 1.9, 1700),
    loc("India", 0.6, 500),
    loc("Indonesia", 0.7, 600),
    loc("Philippines", 0.65, 550),
    loc("Australia", 2.1, 1800),
    loc("Singapore", 2.2, 2000),
    loc("Japan", 2.0, 1700),
    loc("China", 1.3, 1200),
    loc("France", 2.0, 1600),
];

/// Base pay for a career, falling back to `DEFAULT_BASE_SALARY`.
pub fn base_salary(career: &str) -> u32 {
    CAREER_BASE_SALARY
        .iter()
        .find(|(name, _)| *name == career)
        .map(|(_, pay)| *pay)
        .unwrap_or(DEFAULT_BASE_SALARY)
}

pub fn location_profile(location: &str) -> Option<&'static LocationProfile> {
    LOCATIONS.iter().find(|l| l.name == location)
}

/// Pay multiplier for a location, falling back to `DEFAULT_LOCATION_MULTIPLIER`.
pub fn location_multiplier(location: &str) -> f64 {
    location_profile(location)
        .map(|l| l.pay_multiplier)
        .unwrap_or(DEFAULT_LOCATION_MULTIPLIER)
}

/// Cost of living has no fallback: a location without one gets no catalog rows.
pub fn cost_of_living(location: &str) -> Option<u32> {
    location_profile(location).map(|l| l.cost_of_living)
}

/// The career and location sets a catalog is generated over.
///
/// `Default` is the full reference vocabulary. Tests and tooling may build a
/// narrower or wider one; names outside the reference tables pick up the
/// documented fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vocabulary {
    pub careers: Vec<String>,
    pub locations: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            careers: CAREER_BASE_SALARY
                .iter()
                .map(|(name, _)| name.to_string())
                .collect(),
            locations: LOCATIONS.iter().map(|l| l.name.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    pub fn expected_record_count(&self) -> usize {
        self.careers.len()
            * self.locations.len()
            * EducationLevel::ALL.len()
            * ExperienceTier::ALL.len()
    }
}
