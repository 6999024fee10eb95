// File: crates/chart-core/src/series.rs
// Summary: Series model: XY points plus optional legend label and point marker.

use crate::types::Marker;

#[derive(Clone, Debug)]
pub struct Series {
    pub data_xy: Vec<(f64, f64)>,
    pub label: Option<String>,
    pub marker: Option<Marker>,
}

impl Series {
    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, label: None, marker: None }
    }

    /// Build a series by zipping parallel x and y slices.
    /// Extra values on the longer side are ignored.
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> Self {
        Self::with_data(xs.iter().copied().zip(ys.iter().copied()).collect())
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}
