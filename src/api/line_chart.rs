use tracing::{debug, trace};

use crate::core::{DEFAULT_TICK_COUNT, Domain, PlotArea, RenderState, SurfaceSize};
use crate::error::ChartResult;
use crate::render::{
    FillStyle, Path, Point, StrokeStyle, Surface, TextHAlign, TextPrimitive, TextVAlign,
};

use super::config::{ChartConfig, ChartStyle};
use super::label_format::format_integer_label;
use super::legend::{LegendRow, draw_legend, layout_legend};

pub const X_PADDING: f64 = 50.0;
pub const Y_PADDING: f64 = 30.0;
pub const AXIS_STROKE_WIDTH: f64 = 1.0;
pub const SERIES_STROKE_WIDTH: f64 = 2.0;
pub const TICK_MARK_LENGTH: f64 = 4.0;
pub const TICK_LABEL_GAP: f64 = 6.0;
pub const CATEGORY_LABEL_OFFSET: f64 = 4.0;
pub const AREA_FILL_ALPHA: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabel {
    pub text: String,
    pub x: f64,
}

/// Projected geometry of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesGeometry {
    /// Finite points in index order.
    pub points: Vec<Point>,
    /// Closed polygon down to the baseline, present only for filled datasets.
    pub area: Option<Path>,
}

/// Everything a line chart draws, computed before touching the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartLayout {
    pub state: RenderState,
    pub labels: Vec<CategoryLabel>,
    /// Empty when no dataset holds a finite value.
    pub ticks: Vec<ValueTick>,
    pub series: Vec<LineSeriesGeometry>,
    pub legend: Vec<LegendRow>,
}

impl LineChartLayout {
    /// X position of category `index`.
    #[must_use]
    pub fn category_x(&self, index: usize) -> f64 {
        category_x(&self.state, index)
    }

    /// Y position of `value` on the shared scale.
    #[must_use]
    pub fn value_y(&self, value: f64) -> f64 {
        value_y(&self.state, value)
    }
}

/// Horizontal distance between categories; a single label spans the whole plot.
#[must_use]
pub fn category_step(plot_width: f64, label_count: usize) -> f64 {
    if label_count > 1 {
        plot_width / (label_count - 1) as f64
    } else {
        plot_width
    }
}

fn category_x(state: &RenderState, index: usize) -> f64 {
    state.plot.left + state.step * index as f64
}

fn value_y(state: &RenderState, value: f64) -> f64 {
    state.plot.bottom() - state.domain.normalize(value) * state.plot.height
}

/// Lays out a line chart, or `None` when there are no labels or no datasets.
#[must_use]
pub fn layout_line_chart(size: SurfaceSize, config: &ChartConfig) -> Option<LineChartLayout> {
    if config.labels.is_empty() || config.datasets.is_empty() {
        debug!(
            labels = config.labels.len(),
            datasets = config.datasets.len(),
            "line chart has nothing to draw"
        );
        return None;
    }

    let plot = PlotArea::new(
        X_PADDING,
        Y_PADDING,
        size.width_px() - X_PADDING * 2.0,
        size.height_px() - Y_PADDING * 2.0,
    );
    let domain = Domain::from_series(config.datasets.iter().map(|d| d.values.as_slice()));
    let state = RenderState {
        domain,
        step: category_step(plot.width, config.labels.len()),
        plot,
    };
    trace!(
        min = domain.min,
        max = domain.max,
        step = state.step,
        "line chart domain"
    );

    let labels = config
        .labels
        .iter()
        .enumerate()
        .map(|(index, text)| CategoryLabel {
            text: text.clone(),
            x: category_x(&state, index),
        })
        .collect();

    let (ticks, series) = if domain.is_empty() {
        debug!("line chart has no finite values; skipping ticks and series");
        (Vec::new(), Vec::new())
    } else {
        let ticks = domain
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|value| ValueTick {
                value,
                y: value_y(&state, value),
            })
            .collect();
        let series = config
            .datasets
            .iter()
            .map(|dataset| {
                let points: Vec<Point> = dataset
                    .values
                    .iter()
                    .enumerate()
                    .filter(|(_, value)| value.is_finite())
                    .map(|(index, value)| {
                        Point::new(category_x(&state, index), value_y(&state, *value))
                    })
                    .collect();
                let area = (dataset.filled && !points.is_empty()).then(|| {
                    let mut area = Path::polyline(&points);
                    let last_index = dataset.values.len().saturating_sub(1);
                    area.line_to(category_x(&state, last_index), plot.bottom())
                        .line_to(plot.left, plot.bottom())
                        .close();
                    area
                });
                LineSeriesGeometry { points, area }
            })
            .collect();
        (ticks, series)
    };

    Some(LineChartLayout {
        state,
        labels,
        ticks,
        series,
        legend: layout_legend(size, &config.datasets),
    })
}

/// Draws a line chart: axes, category labels, value ticks, one polyline per
/// dataset (with optional shaded area) and the legend.
pub(crate) fn render_line_chart<S: Surface + ?Sized>(
    surface: &mut S,
    size: SurfaceSize,
    config: &ChartConfig,
    style: &ChartStyle,
) -> ChartResult<Option<RenderState>> {
    let Some(layout) = layout_line_chart(size, config) else {
        return Ok(None);
    };
    let plot = layout.state.plot;
    let axis_stroke = StrokeStyle::new(style.axis_color, AXIS_STROKE_WIDTH);

    let mut axes = Path::new();
    axes.move_to(plot.left, plot.top)
        .line_to(plot.left, plot.bottom())
        .line_to(plot.right(), plot.bottom());
    surface.stroke_path(&axes, axis_stroke)?;

    for label in &layout.labels {
        surface.fill_text(&TextPrimitive::new(
            label.text.clone(),
            label.x,
            plot.bottom() + CATEGORY_LABEL_OFFSET,
            style.font_size_px,
            style.axis_color,
            TextHAlign::Center,
            TextVAlign::Top,
        ))?;
    }
    trace!(count = layout.labels.len(), "drew category labels");

    for tick in &layout.ticks {
        let mut mark = Path::new();
        mark.move_to(plot.left - TICK_MARK_LENGTH, tick.y)
            .line_to(plot.left, tick.y);
        surface.stroke_path(&mark, axis_stroke)?;
        surface.fill_text(&TextPrimitive::new(
            format_integer_label(tick.value),
            plot.left - TICK_LABEL_GAP,
            tick.y,
            style.font_size_px,
            style.axis_color,
            TextHAlign::Right,
            TextVAlign::Middle,
        ))?;
    }

    for (dataset, geometry) in config.datasets.iter().zip(&layout.series) {
        if geometry.points.is_empty() {
            trace!(label = %dataset.label, "dataset has no finite points");
            continue;
        }
        surface.stroke_path(
            &Path::polyline(&geometry.points),
            StrokeStyle::new(dataset.resolved_line_color(), SERIES_STROKE_WIDTH),
        )?;
        if let Some(area) = &geometry.area {
            surface.fill_path(
                area,
                FillStyle::solid(dataset.resolved_area_color()).with_global_alpha(AREA_FILL_ALPHA),
            )?;
        }
    }

    draw_legend(surface, &layout.legend, style)?;
    Ok(Some(layout.state))
}
