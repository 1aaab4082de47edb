use tracing::{debug, trace};

use crate::core::{Domain, PlotArea, RenderState, SurfaceSize};
use crate::error::ChartResult;
use crate::render::{Color, Rect, Surface, TextHAlign, TextPrimitive, TextVAlign};

use super::config::{ChartConfig, ChartStyle};
use super::label_format::format_integer_label;

pub const TOP_PADDING: f64 = 20.0;
pub const LABEL_COLUMN_WIDTH: f64 = 100.0;
pub const RIGHT_PADDING: f64 = 20.0;
pub const LABEL_GAP: f64 = 6.0;
pub const VALUE_GAP: f64 = 4.0;
/// Fraction of the row height taken by the track and value bars.
pub const BAR_THICKNESS_RATIO: f64 = 0.5;
pub const TRACK_COLOR: Color = Color::from_rgba8(0xe5, 0xe5, 0xe5, 1.0);

/// One horizontal row: background track, value bar and its two labels.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub track: Rect,
    /// `None` when the dataset has no finite value for this label.
    pub bar: Option<Rect>,
    pub value: Option<f64>,
    pub center_y: f64,
}

impl BarRow {
    /// X where the value annotation starts.
    #[must_use]
    pub fn value_text_x(&self) -> Option<f64> {
        self.bar.map(|bar| bar.x + bar.width + VALUE_GAP)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    pub state: RenderState,
    pub bar_color: Color,
    pub rows: Vec<BarRow>,
}

/// Lays out a horizontal bar chart from the first dataset only.
///
/// Returns `None` when there are no labels, no dataset, or the first dataset
/// has no values. Further datasets are never read.
#[must_use]
pub fn layout_bar_chart(size: SurfaceSize, config: &ChartConfig) -> Option<BarChartLayout> {
    let dataset = config.datasets.first()?;
    let values = dataset.values.as_slice();
    if config.labels.is_empty() || values.is_empty() {
        debug!(
            labels = config.labels.len(),
            values = values.len(),
            "bar chart has nothing to draw"
        );
        return None;
    }
    if config.datasets.len() > 1 {
        debug!(
            ignored = config.datasets.len() - 1,
            "bar chart renders only the first dataset"
        );
    }

    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(1.0_f64, f64::max);
    let available_width = size.width_px() - LABEL_COLUMN_WIDTH - RIGHT_PADDING;
    let row_height = (size.height_px() - TOP_PADDING * 2.0) / config.labels.len() as f64;
    let state = RenderState {
        domain: Domain::new(0.0, max),
        step: row_height,
        plot: PlotArea::new(
            LABEL_COLUMN_WIDTH,
            TOP_PADDING,
            available_width,
            row_height * config.labels.len() as f64,
        ),
    };
    trace!(max, row_height, available_width, "bar chart layout");

    let rows = config
        .labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let row_top = TOP_PADDING + row_height * index as f64;
            let bar_top = row_top + row_height * (1.0 - BAR_THICKNESS_RATIO) / 2.0;
            let bar_height = row_height * BAR_THICKNESS_RATIO;
            let value = values.get(index).copied().filter(|v| v.is_finite());
            BarRow {
                label: label.clone(),
                track: Rect::new(LABEL_COLUMN_WIDTH, bar_top, available_width, bar_height),
                bar: value.map(|value| {
                    Rect::new(
                        LABEL_COLUMN_WIDTH,
                        bar_top,
                        available_width * (value / max),
                        bar_height,
                    )
                }),
                value,
                center_y: row_top + row_height / 2.0,
            }
        })
        .collect();

    Some(BarChartLayout {
        state,
        bar_color: dataset.resolved_bar_color(),
        rows,
    })
}

/// Draws a horizontal bar chart. No legend is drawn.
pub(crate) fn render_bar_chart<S: Surface + ?Sized>(
    surface: &mut S,
    size: SurfaceSize,
    config: &ChartConfig,
    style: &ChartStyle,
) -> ChartResult<Option<RenderState>> {
    let Some(layout) = layout_bar_chart(size, config) else {
        return Ok(None);
    };
    for row in &layout.rows {
        surface.fill_rect(row.track, TRACK_COLOR)?;
        if let Some(bar) = row.bar {
            surface.fill_rect(bar, layout.bar_color)?;
        }
        surface.fill_text(&TextPrimitive::new(
            row.label.clone(),
            LABEL_COLUMN_WIDTH - LABEL_GAP,
            row.center_y,
            style.font_size_px,
            style.bar_label_color,
            TextHAlign::Right,
            TextVAlign::Middle,
        ))?;
        if let (Some(value), Some(x)) = (row.value, row.value_text_x()) {
            surface.fill_text(&TextPrimitive::new(
                format_integer_label(value),
                x,
                row.center_y,
                style.font_size_px,
                style.bar_label_color,
                TextHAlign::Left,
                TextVAlign::Middle,
            ))?;
        }
    }
    Ok(Some(layout.state))
}
