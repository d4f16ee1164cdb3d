use crate::services::report::GenerationReport;

pub fn format_generation_report(report: &GenerationReport) -> String {
    let seed = match report.seed {
        Some(value) => value.to_string(),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Load Model Report".to_string());
    lines.push(format!("Month: {}-{:02}", report.year, report.month));
    lines.push(format!("Hours in month: {}", report.hours));
    lines.push(format!("Operating hours: {}", report.operating_hours));
    lines.push(format!("Average load: {:.2} kW", report.average_load_kw));
    lines.push(format!("Minimum load: {:.2} kW", report.min_load_kw));
    lines.push(format!("Maximum load: {:.2} kW", report.max_load_kw));
    lines.push(format!("Seed: {}", seed));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_report() -> GenerationReport {
        GenerationReport {
            year: 2024,
            month: 3,
            hours: 744,
            operating_hours: 210,
            average_load_kw: 35.4,
            min_load_kw: 10.0,
            max_load_kw: 100.0,
            seed: Some(42),
        }
    }

    #[test]
    fn format_generation_report_includes_every_line() {
        let output = format_generation_report(&build_report());

        assert!(output.contains("Load Model Report"));
        assert!(output.contains("Month: 2024-03"));
        assert!(output.contains("Hours in month: 744"));
        assert!(output.contains("Operating hours: 210"));
        assert!(output.contains("Average load: 35.40 kW"));
        assert!(output.contains("Minimum load: 10.00 kW"));
        assert!(output.contains("Maximum load: 100.00 kW"));
        assert!(output.contains("Seed: 42"));
    }

    #[test]
    fn format_generation_report_uses_na_for_missing_seed() {
        let mut report = build_report();
        report.seed = None;

        let output = format_generation_report(&report);
        assert!(output.contains("Seed: n/a"));
    }
}
