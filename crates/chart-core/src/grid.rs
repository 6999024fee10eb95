// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers: "nice" tick values and their labels.

const NICE_MULTIPLES: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Smallest step of the form {1, 2, 2.5, 5} x 10^k that covers `span`
/// in at most `max_ticks` intervals.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let span = span.abs().max(1e-12);
    let raw = span / max_ticks.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    for m in NICE_MULTIPLES {
        if m * mag >= raw * (1.0 - 1e-9) {
            return m * mag;
        }
    }
    10.0 * mag
}

/// Tick step and tick values inside `[min, max]` on multiples of that step.
/// Returns at most `max_ticks + 1` values; an empty or non-finite range yields no ticks.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> (f64, Vec<f64>) {
    let step = nice_step(max - min, max_ticks);
    if !min.is_finite() || !max.is_finite() || max <= min {
        return (step, Vec::new());
    }
    let eps = step * 1e-9;
    let first = (min / step - 1e-9).ceil() * step;
    let mut ticks = Vec::new();
    let mut i = 0usize;
    loop {
        let mut v = first + i as f64 * step;
        if v > max + eps { break; }
        if v.abs() < eps { v = 0.0; }
        ticks.push(v);
        i += 1;
    }
    (step, ticks)
}

/// Format a tick value with just enough decimals to distinguish multiples of `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let mut decimals = 0usize;
    while decimals < 6 {
        let scaled = step.abs() * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-6 { break; }
        decimals += 1;
    }
    format!("{:.*}", decimals, value)
}
