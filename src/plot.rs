//! Post-session key-press frequency chart.

use crate::error::{Error, Result};
use crate::tally::PressTally;
use plotters::prelude::*;
use std::path::Path;

/// Chart image dimensions
const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 600;

/// Render the final press tally as a bar chart PNG.
///
/// An empty tally produces no file.
pub fn render_tally_chart<P: AsRef<Path>>(tally: &PressTally, path: P) -> Result<()> {
    if tally.is_empty() {
        log::info!("No key presses recorded, skipping frequency chart");
        return Ok(());
    }

    let entries: Vec<(String, u32)> = tally.iter().map(|(k, c)| (k.to_string(), c)).collect();
    let max_count = tally.max_count();

    log::info!(
        "Writing frequency chart for {} keys to {}",
        entries.len(),
        path.as_ref().display()
    );

    let root = BitMapBackend::new(path.as_ref(), (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| Error::PlotError(format!("Failed to fill chart background: {e}")))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Key Press Frequency", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0usize..entries.len(), 0u32..max_count + 1)
        .map_err(|e| Error::PlotError(format!("Failed to build chart: {e}")))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len())
        .x_label_formatter(&|i: &usize| {
            entries.get(*i).map(|(name, _)| name.clone()).unwrap_or_default()
        })
        .x_desc("Keys")
        .y_desc("Count")
        .draw()
        .map_err(|e| Error::PlotError(format!("Failed to draw chart mesh: {e}")))?;

    chart
        .draw_series(entries.iter().enumerate().map(|(i, &(_, count))| {
            Rectangle::new([(i, 0u32), (i + 1, count)], BLUE.filled())
        }))
        .map_err(|e| Error::PlotError(format!("Failed to draw chart bars: {e}")))?;

    root.present()
        .map_err(|e| Error::PlotError(format!("Failed to write chart file: {e}")))?;

    Ok(())
}
