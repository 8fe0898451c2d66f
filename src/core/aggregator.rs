//! Per-breed statistics over a [`RecordStore`].

use crate::core::{BreedReport, RecordStore, YearlyBreakdown};
use chrono::Month;
use std::ops::RangeInclusive;

/// Read-only view that answers the three report questions for a breed.
pub struct Aggregator<'a> {
    store: &'a RecordStore,
}

impl<'a> Aggregator<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Sum of registrations for `breed` across every year and month.
    pub fn total_registrations(&self, breed: &str) -> u64 {
        self.store.for_breed(breed).map(|r| r.count).sum()
    }

    /// Years in which `breed` was registered and its share of each year.
    ///
    /// A year's denominator is every registration in that year, whatever the
    /// breed. The overall denominator is every registration in the store.
    pub fn yearly_breakdown(&self, breed: &str, year_range: RangeInclusive<i32>) -> YearlyBreakdown {
        let mut years = Vec::new();
        let mut per_year_percent = Vec::new();

        for year in year_range {
            let breed_year_total: u64 = self.store.for_breed_year(breed, year).map(|r| r.count).sum();
            if breed_year_total == 0 {
                continue;
            }
            let year_total: u64 = self.store.for_year(year).map(|r| r.count).sum();
            years.push(year);
            per_year_percent.push((year, percent(breed_year_total, year_total)));
        }

        let grand_total: u64 = self.store.records().iter().map(|r| r.count).sum();
        let overall_percent = percent(self.total_registrations(breed), grand_total);

        YearlyBreakdown {
            years,
            per_year_percent,
            overall_percent,
        }
    }

    /// Month(s) with the most records for `breed`.
    ///
    /// Counts rows, not registrations: a month appearing in two years scores 2
    /// no matter how many dogs each row holds. Ties keep first-seen order.
    pub fn most_popular_months(&self, breed: &str) -> Vec<Month> {
        let mut appearances: Vec<(Month, usize)> = Vec::new();
        for record in self.store.for_breed(breed) {
            match appearances.iter_mut().find(|(m, _)| *m == record.month) {
                Some((_, rows)) => *rows += 1,
                None => appearances.push((record.month, 1)),
            }
        }

        let max_rows = appearances.iter().map(|(_, rows)| *rows).max().unwrap_or(0);
        appearances
            .into_iter()
            .filter(|(_, rows)| *rows == max_rows)
            .map(|(month, _)| month)
            .collect()
    }

    pub fn report(&self, breed: &str, year_range: RangeInclusive<i32>) -> BreedReport {
        tracing::debug!("Aggregating statistics for {}", breed);
        BreedReport {
            breed: breed.to_string(),
            total_registrations: self.total_registrations(breed),
            yearly: self.yearly_breakdown(breed, year_range),
            popular_months: self.most_popular_months(breed),
        }
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}
