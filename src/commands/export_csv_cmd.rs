use crate::commands::base_commands::Commands;
use crate::services::series_csv::export_series_csv_from_yaml_file;

pub fn export_csv_command(cmd: Commands) {
    if let Commands::ExportCsv { input, output } = cmd {
        match export_series_csv_from_yaml_file(&input, &output) {
            Ok(()) => println!("Load series table written to {output}"),
            Err(e) => eprintln!("Failed to export load series: {e:?}"),
        }
    }
}
