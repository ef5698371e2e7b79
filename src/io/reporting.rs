// src/io/reporting.rs

use crate::simulation::engine::TracePoint;
use std::error::Error;
use std::path::Path;

/// Writes an inventory trace to a CSV file, one row per simulated day.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "traces/fixed_quantity.csv").
/// * `trace` - The day-indexed inventory levels from a simulation or projection.
pub fn write_trace_csv(file_path: &str, trace: &[TracePoint]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);

    let mut wtr = csv::Writer::from_path(path)?;

    for point in trace {
        wtr.serialize(point)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    Ok(())
}
