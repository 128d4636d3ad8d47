//! Drives the horizontal and vertical passes over a line or a whole paragraph

use tiny_sdk::MetricsProvider;

use super::horizontal::{clamp_width, layout_horizontal};
use super::line::{WrapColumn, WrapLine};
use super::vertical::layout_vertical;

pub const DEFAULT_LINE_SPACE: f32 = 1.3;
pub const DEFAULT_EMPTY_LINE_HEIGHT: f32 = 15.0;
/// Width used when no usable width was configured; effectively "never wrap"
pub const UNBOUNDED_WIDTH: f32 = 5_000_000.0;

/// Wrapping and vertical layout for a paragraph of logical lines
///
/// Every recalculation rebuilds all rows and positions from scratch. Metrics are
/// read through the provider passed into each call; the algorithm never keeps it.
#[derive(Debug, Clone)]
pub struct WrapAlgorithm {
    column: Option<WrapColumn>,

    // Calculated quantities
    height: f32,
    total_width: f32,
    first_max_ascent: f32,
    first_max_descent: f32,

    // User set quantities
    widths: Vec<f32>,
    line_space: f32,
    default_empty_line_height: f32,
}

impl Default for WrapAlgorithm {
    fn default() -> Self {
        Self::new(UNBOUNDED_WIDTH)
    }
}

impl WrapAlgorithm {
    pub fn new(width: f32) -> Self {
        Self {
            column: None,
            height: 0.0,
            total_width: 0.0,
            first_max_ascent: 0.0,
            first_max_descent: 0.0,
            widths: vec![width],
            line_space: DEFAULT_LINE_SPACE,
            default_empty_line_height: DEFAULT_EMPTY_LINE_HEIGHT,
        }
    }

    pub fn with_line_space(mut self, line_space: f32) -> Self {
        self.line_space = line_space;
        self
    }

    // === Paragraph ===

    /// Hand the paragraph to the algorithm
    pub fn set_text_column(&mut self, column: WrapColumn, redo: Option<&dyn MetricsProvider>) {
        self.column = Some(column);
        if let Some(metrics) = redo {
            self.recalculate(metrics);
        }
    }

    pub fn column(&self) -> Option<&WrapColumn> {
        self.column.as_ref()
    }

    /// Mutable access for edits; call `recalculate` afterwards
    pub fn column_mut(&mut self) -> Option<&mut WrapColumn> {
        self.column.as_mut()
    }

    pub fn take_column(&mut self) -> Option<WrapColumn> {
        self.column.take()
    }

    // === Configuration ===

    pub fn set_width(&mut self, width: f32, redo: Option<&dyn MetricsProvider>) {
        self.widths = vec![width];
        if let Some(metrics) = redo {
            self.recalculate(metrics);
        }
    }

    /// Per-line widths, consumed one per non-empty line; the last one repeats
    pub fn set_widths(&mut self, widths: &[f32], redo: Option<&dyn MetricsProvider>) {
        if widths.is_empty() {
            tracing::warn!(fallback = UNBOUNDED_WIDTH, "empty width list");
            self.widths = vec![UNBOUNDED_WIDTH];
        } else {
            self.widths = widths.to_vec();
        }
        if let Some(metrics) = redo {
            self.recalculate(metrics);
        }
    }

    pub fn set_line_space(&mut self, line_space: f32, redo: Option<&dyn MetricsProvider>) {
        self.line_space = line_space;
        if let Some(metrics) = redo {
            self.recalculate(metrics);
        }
    }

    pub fn set_default_empty_line_height(
        &mut self,
        height: f32,
        redo: Option<&dyn MetricsProvider>,
    ) {
        self.default_empty_line_height = height;
        if let Some(metrics) = redo {
            self.recalculate(metrics);
        }
    }

    pub fn widths(&self) -> &[f32] {
        &self.widths
    }

    pub fn line_space(&self) -> f32 {
        self.line_space
    }

    pub fn default_empty_line_height(&self) -> f32 {
        self.default_empty_line_height
    }

    // === Results ===

    /// Height of the last layout: the whole paragraph, or the single line
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Widest first row over all lines of the paragraph
    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    /// Max ascent of the first row, for sizing a caret
    pub fn first_max_ascent(&self) -> f32 {
        self.first_max_ascent
    }

    pub fn first_max_descent(&self) -> f32 {
        self.first_max_descent
    }

    // === Layout ===

    /// Forget computed results, including every row of the owned paragraph
    pub fn clear(&mut self) {
        self.height = 0.0;
        self.total_width = 0.0;
        self.first_max_ascent = 0.0;
        self.first_max_descent = 0.0;
        if let Some(column) = self.column.as_mut() {
            for (_, line) in column.iter_mut() {
                line.clear_layout();
            }
        }
    }

    /// Lay out the owned paragraph
    ///
    /// Lines are stacked in index order starting at y = 0. Empty lines skip
    /// wrapping and take the default empty-line height. No-op without a column.
    pub fn recalculate(&mut self, metrics: &dyn MetricsProvider) {
        self.clear();
        let Some(column) = self.column.as_mut() else {
            return;
        };

        let mut width_idx = 0;
        let mut line_y_pos = 0.0f32;
        let mut first_recorded = false;
        let mut total_width = 0.0f32;

        for (_, line) in column.iter_mut() {
            line.relative_y_pos = line_y_pos;

            if line.is_empty() {
                line.height = self.default_empty_line_height;
                line_y_pos += self.default_empty_line_height;
                continue;
            }

            let width = width_at(&self.widths, width_idx);
            let horizontal = layout_horizontal(&mut line.chars, metrics, width, 0.0);
            line.sublines = horizontal.sublines;

            let vertical = layout_vertical(
                &mut line.sublines,
                &mut line.chars,
                metrics,
                line_y_pos,
                self.line_space,
            );
            line.height = vertical.height;
            line_y_pos += vertical.height;

            if !first_recorded {
                self.first_max_ascent = vertical.first_max_ascent;
                self.first_max_descent = vertical.first_max_descent;
                first_recorded = true;
            }
            if let Some(first) = line.sublines.first() {
                total_width = total_width.max(first.width);
            }

            if width_idx + 1 < self.widths.len() {
                width_idx += 1;
            }
        }

        self.height = line_y_pos;
        self.total_width = total_width;
        tracing::debug!(
            lines = column.len(),
            height = self.height,
            width = self.total_width,
            "recalculated paragraph"
        );
    }

    /// Lay out a single line with its first character at `x_offset`
    ///
    /// Uses the first configured width and starts at y = 0. An empty line gets
    /// no rows and zero height.
    pub fn recalculate_line(
        &mut self,
        line: &mut WrapLine,
        metrics: &dyn MetricsProvider,
        x_offset: f32,
    ) {
        line.clear_layout();

        let width = width_at(&self.widths, 0);
        let horizontal = layout_horizontal(&mut line.chars, metrics, width, x_offset);
        line.sublines = horizontal.sublines;

        let vertical = layout_vertical(
            &mut line.sublines,
            &mut line.chars,
            metrics,
            0.0,
            self.line_space,
        );
        line.height = vertical.height;

        self.height = vertical.height;
        self.total_width = line.sublines.first().map_or(0.0, |row| row.width);
        self.first_max_ascent = vertical.first_max_ascent;
        self.first_max_descent = vertical.first_max_descent;

        tracing::trace!(
            chars = line.chars.len(),
            rows = line.sublines.len(),
            height = line.height,
            "recalculated line"
        );
    }
}

/// Width for the `idx`-th non-empty line, clamped to the floor
fn width_at(widths: &[f32], idx: usize) -> f32 {
    let width = widths
        .get(idx)
        .or_else(|| widths.last())
        .copied()
        .unwrap_or(UNBOUNDED_WIDTH);
    let clamped = clamp_width(width);
    if clamped != width {
        tracing::warn!(width, clamped, "width below minimum");
    }
    clamped
}
