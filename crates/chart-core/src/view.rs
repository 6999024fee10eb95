// File: crates/chart-core/src/view.rs
// View state: visible data ranges and autoscale from series bounds.

use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Bounds of every series point, padded on each side by `margin` times the span.
    /// Empty charts fall back to the unit square; zero spans widen to 1.0.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        let margin = margin.max(0.0);
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        Self { x_min: x_min - xm, x_max: x_max + xm, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Series;

    #[test]
    fn empty_chart_is_unit_square() {
        let v = ViewState::from_chart(&Chart::new(), 0.05);
        assert_eq!(v, ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
    }

    #[test]
    fn single_point_widens_around_value() {
        let mut chart = Chart::new();
        chart.add_series(Series::with_data(vec![(3.0, 7.0)]));
        let v = ViewState::from_chart(&chart, 0.0);
        assert_eq!((v.x_min, v.x_max), (2.5, 3.5));
        assert_eq!((v.y_min, v.y_max), (6.5, 7.5));
    }
}
