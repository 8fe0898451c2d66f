use crate::core::{RawRecord, RegistrationRecord, Storage};
use crate::domain::model::parse_month;
use crate::utils::error::{Result, StatsError};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Immutable in-memory table of registration records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<RegistrationRecord>,
    breeds: BTreeSet<String>,
}

impl RecordStore {
    pub fn new(records: Vec<RegistrationRecord>) -> Self {
        let breeds = records.iter().map(|r| r.breed.clone()).collect();
        Self { records, breeds }
    }

    /// 透過 Storage 讀取 CSV 並建立資料表
    pub fn load<S: Storage>(storage: &S, path: &str, year_range: &RangeInclusive<i32>) -> Result<Self> {
        tracing::debug!("Reading registration data from: {}", path);
        let data = storage.read_file(path)?;
        let store = Self::from_csv_reader(data.as_slice())?;

        let out_of_range = store
            .records
            .iter()
            .filter(|r| !year_range.contains(&r.year))
            .count();
        if out_of_range > 0 {
            tracing::warn!(
                "{} records fall outside the report years {}-{}",
                out_of_range,
                year_range.start(),
                year_range.end()
            );
        }

        tracing::info!(
            "Loaded {} records covering {} breeds",
            store.records.len(),
            store.breeds.len()
        );
        Ok(store)
    }

    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<RawRecord>() {
            let raw = row?;
            // 表頭佔第一行，資料從第二行開始
            let line = records.len() as u64 + 2;

            if raw.breed.trim().is_empty() {
                return Err(StatsError::MalformedRecordError {
                    line,
                    reason: "breed is empty".to_string(),
                });
            }
            let month = parse_month(&raw.month).ok_or_else(|| StatsError::MalformedRecordError {
                line,
                reason: format!("unrecognised month '{}'", raw.month),
            })?;

            records.push(RegistrationRecord::new(&raw.breed, raw.year, month, raw.total));
        }

        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[RegistrationRecord] {
        &self.records
    }

    pub fn breeds(&self) -> &BTreeSet<String> {
        &self.breeds
    }

    pub fn contains_breed(&self, breed: &str) -> bool {
        self.breeds.contains(breed)
    }

    pub fn for_breed<'a>(&'a self, breed: &'a str) -> impl Iterator<Item = &'a RegistrationRecord> + 'a {
        self.records.iter().filter(move |r| r.breed == breed)
    }

    pub fn for_breed_year<'a>(
        &'a self,
        breed: &'a str,
        year: i32,
    ) -> impl Iterator<Item = &'a RegistrationRecord> + 'a {
        self.for_breed(breed).filter(move |r| r.year == year)
    }

    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &RegistrationRecord> + '_ {
        self.records.iter().filter(move |r| r.year == year)
    }
}
