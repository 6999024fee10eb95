// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::error::{RenderError, Result};
use crate::geometry::{Projection, RectI32};
use crate::grid::{format_tick, nice_ticks};
use crate::legend::{best_corner, legend_box_size, legend_rect, sample_center, LEGEND_SAMPLE};
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, Marker, WIDTH, HEIGHT};
use crate::{Axis, ViewState};

const TICK_LEN: f32 = 4.0;
const TICK_FONT: f32 = 11.0;
const LABEL_FONT: f32 = 13.0;
const LEGEND_FONT: f32 = 11.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw tick labels, axis labels and legend text. Disable for pixel-stable output.
    pub draw_labels: bool,
    /// Upper bound on tick intervals per axis.
    pub max_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            max_ticks: 8,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padded by `margin` (fraction of each span).
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        // Create raster surface
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);

        // Snapshot and encode
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        let io_err = |source| RenderError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        std::fs::write(path, &bytes).map_err(io_err)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::inset(opts.width, opts.height, &opts.insets);
        let proj = Projection {
            rect: plot,
            x_min: self.x_axis.min,
            x_max: self.x_axis.max,
            y_min: self.y_axis.min,
            y_max: self.y_axis.max,
        };
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        let (x_step, x_ticks) = nice_ticks(self.x_axis.min, self.x_axis.max, opts.max_ticks);
        let (y_step, y_ticks) = nice_ticks(self.y_axis.min, self.y_axis.max, opts.max_ticks);

        draw_grid(canvas, &proj, &x_ticks, &y_ticks, theme);
        draw_frame(canvas, &plot, theme);
        draw_ticks(canvas, &proj, &x_ticks, &y_ticks, theme);

        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, &proj, &x_ticks, x_step, &y_ticks, y_step, theme);
            draw_axis_labels(canvas, shaper, &plot, &self.x_axis, &self.y_axis, theme);
        }

        // Series, clipped to the plot area
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32),
            skia::ClipOp::Intersect,
            true,
        );
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &proj, s, theme.series_color(i));
        }
        canvas.restore();

        draw_legend(canvas, shaper.as_ref(), &proj, &self.series, theme);
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, proj: &Projection, xs: &[f64], ys: &[f64], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let r = &proj.rect;
    for &x in xs {
        let px = proj.sx(x);
        canvas.draw_line((px, r.top as f32), (px, r.bottom as f32), &paint);
    }
    for &y in ys {
        let py = proj.sy(y);
        canvas.draw_line((r.left as f32, py), (r.right as f32, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    let rect = skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_rect(rect, &paint);
}

fn draw_ticks(canvas: &skia::Canvas, proj: &Projection, xs: &[f64], ys: &[f64], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let r = &proj.rect;
    for &x in xs {
        let px = proj.sx(x);
        canvas.draw_line((px, r.bottom as f32), (px, r.bottom as f32 + TICK_LEN), &paint);
    }
    for &y in ys {
        let py = proj.sy(y);
        canvas.draw_line((r.left as f32 - TICK_LEN, py), (r.left as f32, py), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    proj: &Projection,
    xs: &[f64],
    x_step: f64,
    ys: &[f64],
    y_step: f64,
    theme: &Theme,
) {
    let r = &proj.rect;
    for &x in xs {
        let label = format_tick(x, x_step);
        let baseline = r.bottom as f32 + TICK_LEN + TICK_FONT + 2.0;
        shaper.draw(canvas, &label, proj.sx(x), baseline, Anchor::Center, TICK_FONT, theme.tick, true);
    }
    for &y in ys {
        let label = format_tick(y, y_step);
        let baseline = proj.sy(y) + TICK_FONT * 0.35;
        shaper.draw(canvas, &label, r.left as f32 - TICK_LEN - 3.0, baseline, Anchor::Right, TICK_FONT, theme.tick, true);
    }
}

fn draw_axis_labels(canvas: &skia::Canvas, shaper: &TextShaper, plot: &RectI32, x: &Axis, y: &Axis, theme: &Theme) {
    let cx = (plot.left + plot.right) as f32 * 0.5;
    let cy = (plot.top + plot.bottom) as f32 * 0.5;
    let x_baseline = plot.bottom as f32 + TICK_LEN + TICK_FONT + LABEL_FONT + 12.0;
    shaper.draw(canvas, &x.label, cx, x_baseline, Anchor::Center, LABEL_FONT, theme.axis_label, false);
    shaper.draw_vertical(canvas, &y.label, plot.left as f32 - 52.0, cy, LABEL_FONT, theme.axis_label);
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, x: f32, y: f32, color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    match marker {
        Marker::Circle { radius } => {
            canvas.draw_circle((x, y), radius, &fill);
        }
    }
}

fn draw_line_series(canvas: &skia::Canvas, proj: &Projection, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((proj.sx(x0), proj.sy(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((proj.sx(x), proj.sy(y)));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.5);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);
    }

    if let Some(marker) = series.marker {
        for &(x, y) in data {
            draw_marker(canvas, marker, proj.sx(x), proj.sy(y), color);
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, shaper: Option<&TextShaper>, proj: &Projection, series: &[Series], theme: &Theme) {
    let entries: Vec<(usize, &Series, &str)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.label.as_deref().map(|l| (i, s, l)))
        .collect();
    if entries.is_empty() {
        return;
    }

    let text_w = entries
        .iter()
        .map(|(_, _, label)| shaper.map_or(0.0, |sh| sh.measure_width(label, LEGEND_FONT, false)))
        .fold(0.0f32, f32::max);
    let (width, height) = legend_box_size(text_w, entries.len());

    let points: Vec<(f32, f32)> = series
        .iter()
        .flat_map(|s| s.data_xy.iter().map(|&(x, y)| (proj.sx(x), proj.sy(y))))
        .collect();
    let corner = best_corner(&proj.rect, width, height, &points);
    let (l, t, r, b) = legend_rect(&proj.rect, corner, width, height);

    let rect = skia::Rect::from_ltrb(l, t, r, b);
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(rect, 3.0, 3.0, &border);

    for (row, (i, s, label)) in entries.iter().enumerate() {
        let color = theme.series_color(*i);
        let (cx, cy) = sample_center(l, t, row);
        let x0 = cx - LEGEND_SAMPLE * 0.5;
        let x1 = cx + LEGEND_SAMPLE * 0.5;

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_stroke_width(1.5);
        stroke.set_color(color);
        canvas.draw_line((x0, cy), (x1, cy), &stroke);
        if let Some(marker) = s.marker {
            draw_marker(canvas, marker, cx, cy, color);
        }
        if let Some(shaper) = shaper {
            shaper.draw(canvas, label, x1 + 8.0, cy + LEGEND_FONT * 0.35, Anchor::Left, LEGEND_FONT, theme.axis_label, false);
        }
    }
}
