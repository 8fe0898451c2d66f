use crate::core::BreedReport;
use crate::domain::model::month_label;
use crate::domain::ports::OutputFormat;
use crate::utils::error::Result;
use std::io::Write;

pub fn render<W: Write>(report: &BreedReport, format: OutputFormat, output: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report, output),
        OutputFormat::Json => render_json(report, output),
    }
}

pub fn render_text<W: Write>(report: &BreedReport, output: &mut W) -> Result<()> {
    let breed = &report.breed;

    writeln!(
        output,
        "There have been {} {} dogs registered total.",
        report.total_registrations, breed
    )?;

    writeln!(
        output,
        "The {} was found in the years: {}",
        breed,
        report.yearly.years_label()
    )?;
    for (year, percent) in &report.yearly.per_year_percent {
        writeln!(output, "The {} was {:9.6}% of top breeds in {}", breed, percent, year)?;
    }
    writeln!(
        output,
        "The {} was {:9.6}% of top breeds across all years",
        breed, report.yearly.overall_percent
    )?;

    writeln!(output, "The most popular month(s) for {} dogs:", breed)?;
    let months: Vec<&str> = report.popular_months.iter().map(month_label).collect();
    writeln!(output, "{}", months.join(" "))?;

    Ok(())
}

pub fn render_json<W: Write>(report: &BreedReport, output: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *output, report)?;
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::YearlyBreakdown;
    use chrono::Month;

    fn sample_report() -> BreedReport {
        BreedReport {
            breed: "LABRADOR".to_string(),
            total_registrations: 11,
            yearly: YearlyBreakdown {
                years: vec![2021, 2022],
                per_year_percent: vec![(2021, 100.0 / 3.0), (2022, 100.0)],
                overall_percent: 1100.0 / 21.0,
            },
            popular_months: vec![Month::January, Month::March],
        }
    }

    #[test]
    fn test_render_text() {
        let mut output = Vec::new();
        render_text(&sample_report(), &mut output).unwrap();
        let expected = "\
There have been 11 LABRADOR dogs registered total.
The LABRADOR was found in the years: 2021 2022
The LABRADOR was 33.333333% of top breeds in 2021
The LABRADOR was 100.000000% of top breeds in 2022
The LABRADOR was 52.380952% of top breeds across all years
The most popular month(s) for LABRADOR dogs:
Jan Mar
";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_small_percentages_are_padded() {
        let mut report = sample_report();
        report.yearly.per_year_percent = vec![(2021, 0.5)];
        let mut output = Vec::new();
        render_text(&report, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("The LABRADOR was  0.500000% of top breeds in 2021"));
    }

    #[test]
    fn test_render_json() {
        let mut output = Vec::new();
        render(&sample_report(), OutputFormat::Json, &mut output).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["breed"], "LABRADOR");
        assert_eq!(value["total_registrations"], 11);
        assert_eq!(value["yearly"]["years"], serde_json::json!([2021, 2022]));
        assert_eq!(value["yearly"]["per_year_percent"][1], serde_json::json!([2022, 100.0]));
        assert_eq!(value["popular_months"], serde_json::json!(["Jan", "Mar"]));
    }
}
