// File: crates/chart-core/src/theme.rs
// Summary: Theme colors for chart rendering (light, white-background preset).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    /// Colors assigned to series in insertion order, cycling.
    pub palette: [skia::Color; 4],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 235, 235, 240),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 40, 40, 40),
            legend_fill: skia::Color::from_argb(255, 248, 248, 250),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c), // green
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28), // red
            ],
        }
    }

    /// Color of the `index`-th series.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}
