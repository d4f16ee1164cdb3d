pub mod base_commands;
pub mod export_csv_cmd;
pub mod generate_cmd;
pub mod init_params_cmd;
pub mod plot_cmd;
pub mod report_format;
