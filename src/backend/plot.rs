//! `plotters` drawing-area adapter and figure output.

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::grid::GRID_SIZE;
use crate::heatmap::{HeatmapSpec, HeatmapSurface, Rgb};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const COLORBAR_STEPS: i32 = 32;

/// Heatmap surface over a `plotters` drawing area.
///
/// The area is owned by the caller's figure; splitting a root area and
/// wrapping each piece gives a multi-panel figure.
pub struct PlotSurface<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
    font_family: String,
    font_size: u32,
}

impl<DB: DrawingBackend> PlotSurface<DB> {
    /// Wrap a drawing area.
    pub fn new(area: DrawingArea<DB, Shift>, config: &RenderConfig) -> Self {
        Self {
            area,
            font_family: config.font_family.clone(),
            font_size: config.font_size,
        }
    }

    fn text_style(&self, color: Rgb) -> TextStyle<'_> {
        (self.font_family.as_str(), f64::from(self.font_size))
            .into_font()
            .color(&to_rgb(color))
            .pos(Pos::new(HPos::Center, VPos::Center))
    }

    fn draw_label(&self, text: &str, at: (i32, i32), color: Rgb) -> Result<()> {
        self.area
            .draw(&Text::new(text.to_string(), at, self.text_style(color)))
            .map_err(Error::render)
    }

    /// Line under a centered label, sized from the font without loading it.
    fn draw_underline(&self, text: &str, center: (i32, i32), color: Rgb) -> Result<()> {
        let half_width = (text.chars().count() as f64 * f64::from(self.font_size) * 0.3) as i32;
        let y = center.1 + self.font_size as i32 / 2 + 1;
        self.area
            .draw(&PathElement::new(
                vec![(center.0 - half_width, y), (center.0 + half_width, y)],
                to_rgb(color).stroke_width(1),
            ))
            .map_err(Error::render)
    }

    fn draw_colorbar(&self, spec: &HeatmapSpec, left: i32, top: i32, height: i32) -> Result<()> {
        let width = self.font_size as i32;
        let step = (height / COLORBAR_STEPS).max(1);
        for i in 0..COLORBAR_STEPS {
            // Darkest at the top.
            let t = 1.0 - i as f32 / (COLORBAR_STEPS - 1) as f32;
            let y = top + i * step;
            self.area
                .draw(&Rectangle::new(
                    [(left, y), (left + width, y + step)],
                    to_rgb(spec.colormap.color_at(t)).filled(),
                ))
                .map_err(Error::render)?;
        }
        let black = Rgb(0, 0, 0);
        let x = left + width * 2;
        self.draw_label(&format!("{:.2}", spec.color_range.max), (x, top), black)?;
        self.draw_label(
            &format!("{:.2}", spec.color_range.min),
            (x, top + step * COLORBAR_STEPS),
            black,
        )
    }
}

fn to_rgb(Rgb(r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

impl<DB: DrawingBackend> HeatmapSurface for PlotSurface<DB> {
    fn draw_heatmap(&mut self, spec: &HeatmapSpec) -> Result<()> {
        let (rows, cols) = spec.dim();
        if rows == 0 || cols == 0 {
            return Ok(());
        }

        let (width, height) = self.area.dim_in_pixel();
        let margin = self.font_size as i32 * 2;
        let colorbar = if spec.colorbar { self.font_size as i32 * 5 } else { 0 };
        let avail_w = (width as i32 - margin - colorbar).max(1);
        let avail_h = (height as i32 - margin).max(1);

        let (cell_w, cell_h) = if spec.square {
            let side = (avail_w / cols as i32).min(avail_h / rows as i32).max(1);
            (side, side)
        } else {
            ((avail_w / cols as i32).max(1), (avail_h / rows as i32).max(1))
        };
        let grid_w = cell_w * cols as i32;
        let grid_h = cell_h * rows as i32;
        let left = margin + (avail_w - grid_w) / 2;
        let top = (avail_h - grid_h) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let x = left + col as i32 * cell_w;
                let y = top + row as i32 * cell_h;
                let fill = spec.cell_color(row, col);
                if let Some(color) = fill {
                    self.area
                        .draw(&Rectangle::new(
                            [(x, y), (x + cell_w, y + cell_h)],
                            to_rgb(color).filled(),
                        ))
                        .map_err(Error::render)?;
                }

                let annotation = &spec.annotations[(row, col)];
                let text_color = fill.map_or(Rgb(0, 0, 0), Rgb::contrasting_text);
                let center = (x + cell_w / 2, y + cell_h / 2);
                self.draw_label(&annotation.text, center, text_color)?;
                if annotation.underline {
                    self.draw_underline(&annotation.text, center, text_color)?;
                }
            }
        }

        let black = Rgb(0, 0, 0);
        for (row, label) in spec.y_labels.iter().take(rows).enumerate() {
            let y = top + row as i32 * cell_h + cell_h / 2;
            self.draw_label(label, (left - margin / 2, y), black)?;
        }
        for (col, label) in spec.x_labels.iter().take(cols).enumerate() {
            let x = left + col as i32 * cell_w + cell_w / 2;
            self.draw_label(label, (x, top + grid_h + margin / 2), black)?;
        }

        if spec.colorbar {
            self.draw_colorbar(spec, left + grid_w + self.font_size as i32, top, grid_h)?;
        }

        Ok(())
    }
}

/// Pixel size of one heatmap panel.
pub fn panel_size(config: &RenderConfig) -> (u32, u32) {
    let side = config.cell_size * GRID_SIZE as u32 + config.font_size * 2;
    (side, side)
}

/// Write heatmaps side by side into one image.
///
/// `.svg` paths produce SVG. Everything else is rasterized and encoded by
/// extension (PNG, BMP, JPEG); unknown or missing extensions get PNG.
pub fn write_figure(path: &Path, specs: &[HeatmapSpec], config: &RenderConfig) -> Result<()> {
    let panels = specs.len().max(1);
    let (w, h) = panel_size(config);
    let size = (w * panels as u32, h);

    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if is_svg {
        draw_panels(SVGBackend::new(path, size).into_drawing_area(), specs, config)
    } else {
        let mut buf = vec![0u8; size.0 as usize * size.1 as usize * 3];
        draw_panels(
            BitMapBackend::with_buffer(&mut buf, size).into_drawing_area(),
            specs,
            config,
        )?;
        let image = RgbImage::from_raw(size.0, size.1, buf)
            .ok_or_else(|| Error::render("bitmap buffer does not match figure size"))?;
        let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
        image.save_with_format(path, format).map_err(Error::render)
    }
}

fn draw_panels<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    specs: &[HeatmapSpec],
    config: &RenderConfig,
) -> Result<()> {
    root.fill(&WHITE).map_err(Error::render)?;
    let areas = root.split_evenly((1, specs.len().max(1)));
    for (area, spec) in areas.into_iter().zip(specs) {
        PlotSurface::new(area, config).draw_heatmap(spec)?;
    }
    root.present().map_err(Error::render)
}
