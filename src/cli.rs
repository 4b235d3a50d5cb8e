use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Optional TOML file overriding the built-in defaults.
    #[arg(long)]
    pub config_file: Option<std::path::PathBuf>,

    #[arg(short, long, default_value_t = log::LevelFilter::Info)]
    pub logging_level: log::LevelFilter,
}
