use std::path::Path;

use loader::{
    get_config_info, load, open_database, read_measurements, read_stations, setup_logger,
    summarize,
};
use slog::{info, warn};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = get_config_info();
    let logger = setup_logger(&cli);

    info!(logger, "Hawaii climate loader starting...");
    info!(logger, "  Stations CSV: {}", cli.stations_csv());
    info!(logger, "  Measurements CSV: {}", cli.measurements_csv());
    info!(logger, "  Database: {}", cli.db_path());

    let stations = read_stations(Path::new(&cli.stations_csv()))?;
    if stations.skipped > 0 {
        warn!(
            logger,
            "skipped {} malformed station rows", stations.skipped
        );
    }

    let measurements = read_measurements(Path::new(&cli.measurements_csv()))?;
    if measurements.skipped > 0 {
        warn!(
            logger,
            "skipped {} malformed measurement rows", measurements.skipped
        );
    }

    let pool = open_database(&cli.db_path()).await?;
    let report = load(&pool, stations.rows, measurements.rows).await?;
    info!(
        logger,
        "loaded {} stations and {} measurements", report.stations, report.measurements
    );

    if cli.summary {
        let summary = summarize(&pool).await?;
        println!("{}", summary);
    }

    pool.close().await;
    Ok(())
}
