// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, marker shapes).

/// Default surface width in pixels (6.4in at 100 dpi).
pub const WIDTH: i32 = 640;
/// Default surface height in pixels (4.8in at 100 dpi).
pub const HEIGHT: i32 = 480;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Point marker drawn at every data point of a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Marker {
    /// Filled circle with the given radius in pixels.
    Circle { radius: f32 },
}

impl Marker {
    /// Circle sized like a 6pt marker at 100 dpi.
    pub const fn circle() -> Self {
        Marker::Circle { radius: 4.0 }
    }
}
