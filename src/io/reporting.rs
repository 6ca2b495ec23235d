// src/io/reporting.rs

use std::error::Error;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::model::InventoryPolicy;
use crate::sim::DailyRecord;

/// Writes computed policies to a CSV file, one row per SKU/location.
pub fn write_policy_report(
    file_path: &str,
    policies: &[InventoryPolicy],
) -> Result<(), Box<dyn Error>> {
    write_csv(file_path, policies)?;
    info!(rows = policies.len(), path = file_path, "wrote policy report");
    Ok(())
}

/// Writes a simulation history to a CSV file, one row per day.
pub fn write_simulation_log(
    file_path: &str,
    history: &[DailyRecord],
) -> Result<(), Box<dyn Error>> {
    write_csv(file_path, history)?;
    info!(rows = history.len(), path = file_path, "wrote simulation log");
    Ok(())
}

fn write_csv<T: Serialize>(file_path: &str, rows: &[T]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(())
}
