use crate::commands::base_commands::Commands;
use crate::services::params_yaml::starter_params_yaml;

pub fn init_params_command(cmd: Commands) {
    if let Commands::InitParams { output } = cmd {
        if let Err(e) = std::fs::write(&output, starter_params_yaml()) {
            eprintln!("Failed to write params file: {e:?}");
        } else {
            println!("Starter params written to {output}");
        }
    }
}
