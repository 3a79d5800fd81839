//! Text heatmap for terminals.

use crate::annotation::UnderlineMarkup;
use crate::error::Result;
use crate::heatmap::{HeatmapSpec, HeatmapSurface, Rgb};

const SHADES: [char; 4] = ['░', '▒', '▓', '█'];
const MIN_CELL_WIDTH: usize = 6;

/// Heatmap rendered into a string.
///
/// In plain mode the fill is drawn with shade glyphs around the label and an
/// underline becomes `_label_`. In color mode each cell gets a 24-bit ANSI
/// background and the underline is a real terminal underline.
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    output: String,
    color: bool,
}

impl TerminalSurface {
    /// Create an empty plain-text surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable ANSI truecolor output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Rendered text so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consume the surface, returning the rendered text.
    pub fn into_output(self) -> String {
        self.output
    }

    fn markup(&self) -> UnderlineMarkup {
        if self.color {
            UnderlineMarkup::Ansi
        } else {
            UnderlineMarkup::Underscore
        }
    }

    fn cell_width(&self, spec: &HeatmapSpec) -> usize {
        let widest = spec
            .annotations
            .iter()
            .map(|a| a.text.chars().count() + if a.underline { 2 } else { 0 })
            .max()
            .unwrap_or(0);
        (widest + 2).max(MIN_CELL_WIDTH)
    }

    fn push_cell(&mut self, spec: &HeatmapSpec, row: usize, col: usize, width: usize) {
        let annotation = &spec.annotations[(row, col)];
        let label = annotation.markup(self.markup());
        let visible = annotation.text.chars().count()
            + if annotation.underline && !self.color { 2 } else { 0 };
        let pad = width.saturating_sub(visible);
        let (left, right) = (pad / 2, pad - pad / 2);
        let fill = spec.cell_color(row, col);

        if self.color {
            match fill {
                Some(bg) => {
                    let fg = bg.contrasting_text();
                    self.output.push_str(&format!(
                        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m",
                        bg.0, bg.1, bg.2, fg.0, fg.1, fg.2
                    ));
                }
                None => self.output.push_str("\x1b[0m"),
            }
            self.output.push_str(&" ".repeat(left));
            self.output.push_str(&label);
            self.output.push_str(&" ".repeat(right));
            self.output.push_str("\x1b[0m");
        } else {
            let shade = shade_for(spec, row, col);
            self.output.extend(std::iter::repeat(shade).take(left));
            self.output.push_str(&label);
            self.output.extend(std::iter::repeat(shade).take(right));
        }
    }

    fn push_colorbar(&mut self, spec: &HeatmapSpec, label_width: usize) {
        let steps = 16;
        self.output.push_str(&" ".repeat(label_width + 1));
        self.output.push_str(&format!("{:.2} ", spec.color_range.min));
        for i in 0..steps {
            let t = i as f32 / (steps - 1) as f32;
            if self.color {
                let Rgb(r, g, b) = spec.colormap.color_at(t);
                self.output.push_str(&format!("\x1b[48;2;{r};{g};{b}m \x1b[0m"));
            } else {
                self.output.push(shade_at(t));
            }
        }
        self.output.push_str(&format!(" {:.2}\n", spec.color_range.max));
    }
}

fn shade_at(t: f32) -> char {
    let idx = (t.clamp(0.0, 1.0) * 3.0).round() as usize;
    SHADES[idx.min(3)]
}

fn shade_for(spec: &HeatmapSpec, row: usize, col: usize) -> char {
    spec.color_range
        .normalize(spec.values[(row, col)])
        .map_or(' ', shade_at)
}

impl HeatmapSurface for TerminalSurface {
    fn draw_heatmap(&mut self, spec: &HeatmapSpec) -> Result<()> {
        let (rows, cols) = spec.dim();
        let width = self.cell_width(spec);
        let label_width = spec
            .y_labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);

        if !self.output.is_empty() {
            self.output.push('\n');
        }

        // Header
        self.output.push_str(&" ".repeat(label_width + 1));
        for col in 0..cols {
            let label = spec.x_labels.get(col).map_or("", String::as_str);
            self.output.push_str(&format!("{label:^width$}"));
        }
        self.output.push('\n');

        // Rows
        for row in 0..rows {
            let label = spec.y_labels.get(row).map_or("", String::as_str);
            self.output.push_str(&format!("{label:>label_width$} "));
            for col in 0..cols {
                self.push_cell(spec, row, col, width);
            }
            self.output.push('\n');
        }

        if spec.colorbar {
            self.push_colorbar(spec, label_width);
        }

        Ok(())
    }
}
