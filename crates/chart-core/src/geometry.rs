// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Plot area left after removing `insets` from a `width` x `height` surface.
    pub fn inset(width: i32, height: i32, insets: &crate::types::Insets) -> Self {
        Self::from_ltrb(
            insets.left as i32,
            insets.top as i32,
            width - insets.right as i32,
            height - insets.bottom as i32,
        )
    }
}

/// Linear mapping from data coordinates into a pixel rectangle.
/// Y grows upward in data space and downward on screen.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub rect: RectI32,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Projection {
    #[inline]
    pub fn sx(&self, x: f64) -> f32 {
        let span = (self.x_max - self.x_min).max(1e-9);
        self.rect.left as f32 + ((x - self.x_min) / span) as f32 * self.rect.width() as f32
    }
    #[inline]
    pub fn sy(&self, y: f64) -> f32 {
        let span = (self.y_max - self.y_min).max(1e-9);
        self.rect.bottom as f32 - ((y - self.y_min) / span) as f32 * self.rect.height() as f32
    }
}
