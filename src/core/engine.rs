use crate::core::{
    report, validator, Aggregator, BreedReport, ConfigProvider, OutputFormat, RecordStore,
};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub struct ReportEngine<C: ConfigProvider> {
    store: RecordStore,
    config: C,
}

impl<C: ConfigProvider> ReportEngine<C> {
    pub fn new(store: RecordStore, config: C) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Select a breed, aggregate and write the report to `output`.
    ///
    /// Text reports share `output` with the prompt. JSON reports keep
    /// `output` to the document alone and prompt on stderr.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<BreedReport> {
        match self.config.output_format() {
            OutputFormat::Text => {
                self.write_title(output)?;
                let breed = self.select_breed(input, output)?;
                self.emit(&breed, output)
            }
            OutputFormat::Json => self.run_with_prompt(input, &mut std::io::stderr(), output),
        }
    }

    /// Like [`run`](Self::run), with prompts and retry messages on `prompt`.
    pub fn run_with_prompt<R: BufRead, P: Write, W: Write>(
        &self,
        input: &mut R,
        prompt: &mut P,
        output: &mut W,
    ) -> Result<BreedReport> {
        self.write_title(output)?;
        let breed = self.select_breed(input, prompt)?;
        self.emit(&breed, output)
    }

    fn write_title<W: Write>(&self, output: &mut W) -> Result<()> {
        tracing::info!("Starting breed report");
        if self.config.output_format() == OutputFormat::Text {
            writeln!(output, "{}", self.config.title())?;
        }
        Ok(())
    }

    // 選擇品種
    fn select_breed<R: BufRead, P: Write>(&self, input: &mut R, prompt: &mut P) -> Result<String> {
        let breed = match self.config.preset_breed() {
            Some(candidate) => validator::require_breed(candidate, self.store.breeds())?,
            None => validator::prompt_for_breed(input, prompt, self.store.breeds())?,
        };
        tracing::info!("Reporting on breed: {}", breed);
        Ok(breed)
    }

    fn emit<W: Write>(&self, breed: &str, output: &mut W) -> Result<BreedReport> {
        let report = Aggregator::new(&self.store).report(breed, self.config.year_range());
        tracing::debug!(
            "Total {}, found in {} of the report years",
            report.total_registrations,
            report.yearly.years.len()
        );

        report::render(&report, self.config.output_format(), output)?;
        output.flush()?;

        Ok(report)
    }

    /// Write the known breeds, one per line, in sorted order.
    pub fn list_breeds<W: Write>(&self, output: &mut W) -> Result<()> {
        for breed in self.store.breeds() {
            writeln!(output, "{}", breed)?;
        }
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RegistrationRecord;
    use crate::domain::model::DEFAULT_YEAR_RANGE;
    use crate::utils::error::StatsError;
    use chrono::Month;
    use std::io::Cursor;
    use std::ops::RangeInclusive;

    struct MockConfig {
        breed: Option<String>,
        format: OutputFormat,
    }

    impl ConfigProvider for MockConfig {
        fn data_path(&self) -> &str {
            "unused.csv"
        }

        fn year_range(&self) -> RangeInclusive<i32> {
            DEFAULT_YEAR_RANGE
        }

        fn title(&self) -> &str {
            "Test"
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn preset_breed(&self) -> Option<&str> {
            self.breed.as_deref()
        }
    }

    fn store() -> RecordStore {
        RecordStore::new(vec![
            RegistrationRecord::new("LABRADOR", 2021, Month::January, 5),
            RegistrationRecord::new("LABRADOR", 2022, Month::January, 3),
            RegistrationRecord::new("LABRADOR", 2022, Month::February, 3),
            RegistrationRecord::new("POODLE", 2021, Month::January, 10),
        ])
    }

    #[test]
    fn test_run_interactive_reprompts_before_reporting() {
        let config = MockConfig {
            breed: None,
            format: OutputFormat::Text,
        };
        let engine = ReportEngine::new(store(), config);
        let mut input = Cursor::new("Chihuahua\n labrador \n");
        let mut output = Vec::new();

        let report = engine.run(&mut input, &mut output).unwrap();
        assert_eq!(report.breed, "LABRADOR");
        assert_eq!(report.total_registrations, 11);
        assert_eq!(report.popular_months, vec![Month::January]);

        let text = String::from_utf8(output).unwrap();
        let not_found = text.find(validator::BREED_NOT_FOUND).unwrap();
        let total = text.find("There have been 11 LABRADOR dogs").unwrap();
        assert!(not_found < total);
    }

    #[test]
    fn test_run_with_preset_breed_skips_prompt() {
        let config = MockConfig {
            breed: Some("poodle".to_string()),
            format: OutputFormat::Text,
        };
        let engine = ReportEngine::new(store(), config);
        let mut output = Vec::new();

        let report = engine.run(&mut Cursor::new(""), &mut output).unwrap();
        assert_eq!(report.breed, "POODLE");
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Test\n"));
        assert!(!text.contains(validator::BREED_PROMPT));
        assert!(text.contains("The POODLE was found in the years: 2021"));
    }

    #[test]
    fn test_run_with_unknown_preset_breed_fails() {
        let config = MockConfig {
            breed: Some("beagle".to_string()),
            format: OutputFormat::Json,
        };
        let engine = ReportEngine::new(store(), config);
        let mut output = Vec::new();

        let err = engine.run(&mut Cursor::new(""), &mut output).unwrap_err();
        assert!(matches!(err, StatsError::UnknownBreedError { .. }));
        assert!(output.is_empty());
    }

    #[test]
    fn test_json_run_keeps_prompts_off_the_report() {
        let config = MockConfig {
            breed: None,
            format: OutputFormat::Json,
        };
        let engine = ReportEngine::new(store(), config);
        let mut input = Cursor::new("nope\npoodle\n");
        let mut prompt = Vec::new();
        let mut output = Vec::new();

        let report = engine
            .run_with_prompt(&mut input, &mut prompt, &mut output)
            .unwrap();
        assert_eq!(report.breed, "POODLE");

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["breed"], "POODLE");

        let prompt = String::from_utf8(prompt).unwrap();
        assert_eq!(prompt.matches(validator::BREED_PROMPT).count(), 2);
        assert!(prompt.contains(validator::BREED_NOT_FOUND));
    }

    #[test]
    fn test_list_breeds() {
        let config = MockConfig {
            breed: None,
            format: OutputFormat::Text,
        };
        let engine = ReportEngine::new(store(), config);
        let mut output = Vec::new();
        engine.list_breeds(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "LABRADOR\nPOODLE\n");
    }
}
