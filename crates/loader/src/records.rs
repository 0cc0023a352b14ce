use std::{fs::File, io::Read, path::Path};

use anyhow::Context;
use hawaii_climate_core::parse_date;
use serde::Deserialize;

/// One row of the station metadata CSV.
///
/// Header: `station,name,latitude,longitude,elevation`
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub station: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// One row of the daily observations CSV.
///
/// Header: `station,date,prcp,tobs`. The prcp column is blank on days the
/// station reported no precipitation value.
#[derive(Debug, Clone, Deserialize)]
pub struct MeasurementRecord {
    pub station: String,
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

/// Rows parsed out of one CSV file, plus how many were dropped as malformed.
#[derive(Debug)]
pub struct ParsedRows<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

pub fn parse_stations<R: Read>(reader: R) -> ParsedRows<StationRecord> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0;
    for result in rdr.deserialize::<StationRecord>() {
        match result {
            Ok(record) if !record.station.trim().is_empty() => rows.push(record),
            _ => skipped += 1,
        }
    }

    ParsedRows { rows, skipped }
}

pub fn parse_measurements<R: Read>(reader: R) -> ParsedRows<MeasurementRecord> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0;
    for result in rdr.deserialize::<MeasurementRecord>() {
        match result {
            // A row without a parseable date can never be matched by the
            // range queries, so it is dropped here rather than stored.
            Ok(record)
                if !record.station.trim().is_empty() && parse_date(&record.date).is_ok() =>
            {
                rows.push(record)
            }
            _ => skipped += 1,
        }
    }

    ParsedRows { rows, skipped }
}

pub fn read_stations(path: &Path) -> anyhow::Result<ParsedRows<StationRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open stations CSV: {}", path.display()))?;
    Ok(parse_stations(file))
}

pub fn read_measurements(path: &Path) -> anyhow::Result<ParsedRows<MeasurementRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open measurements CSV: {}", path.display()))?;
    Ok(parse_measurements(file))
}
