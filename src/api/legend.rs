use crate::core::SurfaceSize;
use crate::error::ChartResult;
use crate::render::{Color, Rect, Surface, TextHAlign, TextPrimitive, TextVAlign};

use super::config::{ChartStyle, Dataset};
use super::line_chart::{X_PADDING, Y_PADDING};

/// Horizontal space reserved for the legend left of the right padding.
pub const LEGEND_WIDTH: f64 = 100.0;
pub const LEGEND_SWATCH_SIZE: f64 = 12.0;
/// Offset from the swatch's left edge to the label.
pub const LEGEND_TEXT_OFFSET: f64 = 16.0;
pub const LEGEND_ROW_HEIGHT: f64 = 18.0;

/// One legend entry: a color swatch followed by the dataset label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub swatch: Rect,
    pub swatch_color: Color,
    pub label: String,
    pub text_x: f64,
    pub text_y: f64,
}

/// Stacks one row per dataset, in dataset order, from the plot's top-right corner.
#[must_use]
pub fn layout_legend(size: SurfaceSize, datasets: &[Dataset]) -> Vec<LegendRow> {
    let x = size.width_px() - X_PADDING - LEGEND_WIDTH;
    datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| {
            let y = Y_PADDING + LEGEND_ROW_HEIGHT * index as f64;
            LegendRow {
                swatch: Rect::new(x, y, LEGEND_SWATCH_SIZE, LEGEND_SWATCH_SIZE),
                swatch_color: dataset.resolved_line_color(),
                label: dataset.label.clone(),
                text_x: x + LEGEND_TEXT_OFFSET,
                text_y: y + LEGEND_SWATCH_SIZE / 2.0,
            }
        })
        .collect()
}

pub(crate) fn draw_legend<S: Surface + ?Sized>(
    surface: &mut S,
    rows: &[LegendRow],
    style: &ChartStyle,
) -> ChartResult<()> {
    for row in rows {
        surface.fill_rect(row.swatch, row.swatch_color)?;
        surface.fill_text(&TextPrimitive::new(
            row.label.clone(),
            row.text_x,
            row.text_y,
            style.font_size_px,
            style.legend_label_color,
            TextHAlign::Left,
            TextVAlign::Middle,
        ))?;
    }
    Ok(())
}
