// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label and visible range.

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Axis with a label and a placeholder range, to be autoscaled later.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0)
    }

    pub fn default_x() -> Self {
        Self::labeled("x")
    }

    pub fn default_y() -> Self {
        Self::labeled("y")
    }
}
