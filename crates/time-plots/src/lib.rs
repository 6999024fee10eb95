// File: crates/time-plots/src/lib.rs
// Summary: Completion-time charts for the bank queue experiment.
// Both data sets are measured completion times transcribed from simulator runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Axis, Chart, Marker, RenderOptions, Series};

/// Output file names, written into the target directory.
pub const SERVER_SWEEP_PNG: &str = "time1.png";
pub const CUSTOMER_SWEEP_PNG: &str = "time2.png";

/// Axis padding as a fraction of the data span.
const MARGIN: f64 = 0.05;

fn line_chart(x_label: &str, y_label: &str, series: Series) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::labeled(x_label);
    chart.y_axis = Axis::labeled(y_label);
    chart.add_series(series.with_marker(Marker::circle()));
    chart.autoscale_axes(MARGIN);
    chart
}

/// Completion time against server count, 10 customers.
pub fn server_sweep_chart() -> Chart {
    const SERVER_NUM: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    const TIME: [f64; 10] = [53.0, 28.0, 20.0, 18.0, 16.0, 15.0, 15.0, 15.0, 15.0, 15.0];
    line_chart(
        "server num",
        "time",
        Series::from_columns(&SERVER_NUM, &TIME).with_label("customer num = 10"),
    )
}

/// Completion time against customer count, 5 servers.
pub fn customer_sweep_chart() -> Chart {
    const CUSTOMER_NUM: [f64; 10] = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0];
    const TIME: [f64; 10] = [16.0, 19.0, 26.0, 30.0, 34.0, 39.0, 41.0, 55.0, 56.0, 58.0];
    line_chart(
        "customer num",
        "time",
        Series::from_columns(&CUSTOMER_NUM, &TIME).with_label("server num = 5"),
    )
}

/// Render both charts into `dir` with `opts`, overwriting existing files.
/// Returns the written paths in order: server sweep, customer sweep.
pub fn render_all_with(dir: impl AsRef<Path>, opts: &RenderOptions) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut written = Vec::with_capacity(2);
    for (name, chart) in [
        (SERVER_SWEEP_PNG, server_sweep_chart()),
        (CUSTOMER_SWEEP_PNG, customer_sweep_chart()),
    ] {
        let path = dir.join(name);
        chart
            .render_to_png(opts, &path)
            .with_context(|| format!("failed to render '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "wrote chart");
        written.push(path);
    }
    Ok(written)
}

/// Render both charts into `dir` with default options.
pub fn render_all(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    render_all_with(dir, &RenderOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_sweep_series() {
        let chart = server_sweep_chart();
        assert_eq!(chart.series.len(), 1);
        let s = &chart.series[0];
        assert_eq!(s.len(), 10);
        assert_eq!(s.data_xy[0], (1.0, 53.0));
        assert_eq!(s.data_xy[9], (10.0, 15.0));
        assert_eq!(s.label.as_deref(), Some("customer num = 10"));
        assert_eq!(s.marker, Some(Marker::circle()));
        assert_eq!((chart.x_axis.label.as_str(), chart.y_axis.label.as_str()), ("server num", "time"));
    }

    #[test]
    fn customer_sweep_series() {
        let chart = customer_sweep_chart();
        let s = &chart.series[0];
        assert_eq!(s.len(), 10);
        assert_eq!(s.data_xy[0], (5.0, 16.0));
        assert_eq!(s.data_xy[9], (50.0, 58.0));
        assert_eq!(s.label.as_deref(), Some("server num = 5"));
        assert_eq!(chart.x_axis.label, "customer num");
    }

    #[test]
    fn axes_cover_data_with_margin() {
        let chart = server_sweep_chart();
        assert!((chart.x_axis.min - 0.55).abs() < 1e-9);
        assert!((chart.x_axis.max - 10.45).abs() < 1e-9);
        assert!((chart.y_axis.min - 13.1).abs() < 1e-9);
        assert!((chart.y_axis.max - 54.9).abs() < 1e-9);
    }
}
