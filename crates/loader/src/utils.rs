use std::env;

use clap::Parser;
use hawaii_climate_core::{
    find_config_file, get_xdg_data_dir, load_config, ConfigSource, DB_FILE_NAME,
};
use slog::{o, Drain, Level, Logger};

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "Hawaii climate loader - Loads the station and measurement CSVs into SQLite"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $HAWAII_LOADER_CONFIG, ./loader.toml,
    /// $XDG_CONFIG_HOME/hawaii-climate/loader.toml, /etc/hawaii-climate/loader.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "HAWAII_LOADER_LEVEL")]
    pub level: Option<String>,

    /// Path of the SQLite database to create or reload
    #[arg(short, long, env = "HAWAII_LOADER_DB_PATH")]
    pub db_path: Option<String>,

    /// Station metadata CSV
    #[arg(short, long, env = "HAWAII_LOADER_STATIONS_CSV")]
    pub stations_csv: Option<String>,

    /// Daily observations CSV
    #[arg(short, long, env = "HAWAII_LOADER_MEASUREMENTS_CSV")]
    pub measurements_csv: Option<String>,

    /// Print a dataset summary after loading
    #[arg(long)]
    #[serde(default)]
    pub summary: bool,
}

impl Cli {
    /// Get the effective configuration value with defaults
    pub fn db_path(&self) -> String {
        self.db_path.clone().unwrap_or_else(|| {
            get_xdg_data_dir()
                .join(DB_FILE_NAME)
                .to_string_lossy()
                .to_string()
        })
    }

    pub fn stations_csv(&self) -> String {
        self.stations_csv
            .clone()
            .unwrap_or_else(|| "./resources/hawaii_stations.csv".to_string())
    }

    pub fn measurements_csv(&self) -> String {
        self.measurements_csv
            .clone()
            .unwrap_or_else(|| "./resources/hawaii_measurements.csv".to_string())
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    // Determine config file path
    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("HAWAII_LOADER_CONFIG", "loader.toml")
    };

    // Load from config file
    let file_config: Cli = load_config(&source).unwrap_or_default();

    // CLI args override file config (env vars are handled by clap)
    Cli {
        config: cli_args.config,
        level: cli_args.level.or(file_config.level),
        db_path: cli_args.db_path.or(file_config.db_path),
        stations_csv: cli_args.stations_csv.or(file_config.stations_csv),
        measurements_csv: cli_args.measurements_csv.or(file_config.measurements_csv),
        summary: cli_args.summary || file_config.summary,
    }
}

pub fn setup_logger(cli: &Cli) -> Logger {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_default();

    let log_level = match level_str.to_lowercase().as_str() {
        "trace" => Level::Trace,
        "debug" => Level::Debug,
        "info" => Level::Info,
        "warn" => Level::Warning,
        "error" => Level::Error,
        _ => Level::Info,
    };

    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = drain.filter_level(log_level).fuse();
    slog::Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}
