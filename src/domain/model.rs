use chrono::Month;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Years covered by the per-year percentage report.
pub const DEFAULT_YEAR_RANGE: RangeInclusive<i32> = 2021..=2023;

/// One row of the registration data: how many dogs of `breed` were
/// registered in `month` of `year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRecord {
    pub breed: String,
    pub year: i32,
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
    pub count: u64,
}

impl RegistrationRecord {
    pub fn new(breed: &str, year: i32, month: Month, count: u64) -> Self {
        Self {
            breed: normalize_breed(breed),
            year,
            month,
            count,
        }
    }
}

/// Raw CSV row as exported from the spreadsheet, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Breed", alias = "breed", alias = "BREED")]
    pub breed: String,
    #[serde(rename = "Year", alias = "year", alias = "YEAR")]
    pub year: i32,
    #[serde(rename = "Month", alias = "month", alias = "MONTH")]
    pub month: String,
    #[serde(rename = "Total", alias = "total", alias = "TOTAL")]
    pub total: u64,
}

/// Percentage breakdown of one breed across the year range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyBreakdown {
    /// Years in which the breed has at least one registration, ascending.
    pub years: Vec<i32>,
    /// `(year, percent)` pairs in the same order as `years`.
    pub per_year_percent: Vec<(i32, f64)>,
    pub overall_percent: f64,
}

impl YearlyBreakdown {
    pub fn years_label(&self) -> String {
        self.years
            .iter()
            .map(|year| year.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn percent_for(&self, year: i32) -> Option<f64> {
        self.per_year_percent
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, percent)| *percent)
    }
}

/// Everything reported for a single breed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreedReport {
    pub breed: String,
    pub total_registrations: u64,
    pub yearly: YearlyBreakdown,
    #[serde(serialize_with = "serialize_months")]
    pub popular_months: Vec<Month>,
}

/// Trim surrounding whitespace and uppercase. Idempotent.
pub fn normalize_breed(candidate: &str) -> String {
    candidate.trim().to_uppercase()
}

/// Accepts `Jan`, `JANUARY`, `jan` or a month number `1`-`12`.
pub fn parse_month(label: &str) -> Option<Month> {
    let label = label.trim();
    if let Ok(number) = label.parse::<u8>() {
        return Month::try_from(number).ok();
    }
    label.parse::<Month>().ok()
}

pub fn month_label(month: &Month) -> &'static str {
    &month.name()[..3]
}

fn serialize_month<S: serde::Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month_label(month))
}

fn serialize_months<S: serde::Serializer>(
    months: &[Month],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(months.iter().map(month_label))
}
