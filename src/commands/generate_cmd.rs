use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_generation_report;
use crate::domain::month::MonthSpec;
use crate::services::generator::generate_load_series;
use crate::services::load_chart::write_series_chart_png;
use crate::services::params_yaml::load_schedule_params_from_yaml_file;
use crate::services::report::build_generation_report;
use crate::services::series_yaml::serialize_series_to_yaml;

pub fn generate_command(cmd: Commands) {
    if let Commands::Generate {
        params,
        output,
        year,
        month,
        seed,
    } = cmd
    {
        let schedule = match load_schedule_params_from_yaml_file(&params) {
            Ok(schedule) => schedule,
            Err(e) => {
                eprintln!("Failed to load schedule params: {e:?}");
                return;
            }
        };

        let month_spec = MonthSpec::new(year, month);
        let series = match generate_load_series(month_spec, &schedule, seed) {
            Ok(series) => series,
            Err(e) => {
                eprintln!("Failed to generate load series: {e:?}");
                return;
            }
        };

        let mut buffer = Vec::new();
        if let Err(e) = serialize_series_to_yaml(&mut buffer, &series) {
            eprintln!("Failed to serialize load series: {e:?}");
            return;
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write output file: {e:?}");
            return;
        }

        let chart_path = format!("{output}.png");
        if let Err(e) = write_series_chart_png(&chart_path, &series) {
            eprintln!("Failed to write load chart: {e:?}");
        }

        let report = build_generation_report(month_spec, &series, seed);
        println!("{}", format_generation_report(&report));
        println!("Load series for {year}-{month:02} written to {output}");
        println!("Load chart written to {chart_path}");
    }
}
