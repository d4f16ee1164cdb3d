use crate::commands::base_commands::Commands;
use crate::services::load_chart::plot_series_from_yaml_file;

pub fn plot_command(cmd: Commands) {
    if let Commands::Plot { input, output } = cmd {
        match plot_series_from_yaml_file(&input, &output) {
            Ok(()) => println!("Load chart written to {output}"),
            Err(e) => eprintln!("Failed to plot load series: {e:?}"),
        }
    }
}
