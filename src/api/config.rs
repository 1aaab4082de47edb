use serde::{Deserialize, Serialize};

use crate::render::Color;

pub const DEFAULT_AXIS_COLOR: Color = Color::from_rgba8(0x66, 0x66, 0x66, 1.0);
pub const DEFAULT_LEGEND_LABEL_COLOR: Color = Color::BLACK;
pub const DEFAULT_BAR_LABEL_COLOR: Color = Color::BLACK;
pub const DEFAULT_LINE_COLOR: Color = Color::BLACK;
pub const DEFAULT_AREA_FILL_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.1);
pub const DEFAULT_BAR_COLOR: Color = Color::from_rgba8(0x88, 0x88, 0x88, 1.0);
pub const DEFAULT_FONT_SIZE_PX: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One named numeric series plus its styling.
///
/// `values` are matched to the chart labels by index; lengths are never checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(default)]
    pub filled: bool,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            values: values.into(),
            line_color: None,
            fill_color: None,
            filled: false,
        }
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Shades the area under the line (line charts only).
    #[must_use]
    pub fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Stroke color for lines and legend swatches.
    #[must_use]
    pub fn resolved_line_color(&self) -> Color {
        self.line_color.unwrap_or(DEFAULT_LINE_COLOR)
    }

    #[must_use]
    pub fn resolved_area_color(&self) -> Color {
        self.fill_color.unwrap_or(DEFAULT_AREA_FILL_COLOR)
    }

    #[must_use]
    pub fn resolved_bar_color(&self) -> Color {
        self.fill_color.unwrap_or(DEFAULT_BAR_COLOR)
    }
}

/// Recognized chart options. Absent entries fall back to built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_label_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_tick_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_tick_color: Option<Color>,
}

impl ChartOptions {
    #[must_use]
    pub fn with_legend_label_color(mut self, color: Color) -> Self {
        self.legend_label_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_x_tick_color(mut self, color: Color) -> Self {
        self.x_tick_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_y_tick_color(mut self, color: Color) -> Self {
        self.y_tick_color = Some(color);
        self
    }
}

/// Full input of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl ChartConfig {
    #[must_use]
    pub fn new<I, L>(kind: ChartKind, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            kind,
            labels: labels.into_iter().map(Into::into).collect(),
            datasets: Vec::new(),
            options: ChartOptions::default(),
        }
    }

    #[must_use]
    pub fn line<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self::new(ChartKind::Line, labels)
    }

    #[must_use]
    pub fn bar<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self::new(ChartKind::Bar, labels)
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }
}

/// Colors and font resolved from [`ChartOptions`] once per chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    /// Axis lines, tick marks and their labels on line charts.
    pub axis_color: Color,
    pub legend_label_color: Color,
    /// Category and value labels on bar charts.
    pub bar_label_color: Color,
    pub font_size_px: f64,
}

impl ChartStyle {
    #[must_use]
    pub fn resolve(options: &ChartOptions) -> Self {
        Self {
            axis_color: options
                .x_tick_color
                .or(options.y_tick_color)
                .unwrap_or(DEFAULT_AXIS_COLOR),
            legend_label_color: options
                .legend_label_color
                .unwrap_or(DEFAULT_LEGEND_LABEL_COLOR),
            bar_label_color: options
                .y_tick_color
                .or(options.x_tick_color)
                .unwrap_or(DEFAULT_BAR_LABEL_COLOR),
            font_size_px: DEFAULT_FONT_SIZE_PX,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::resolve(&ChartOptions::default())
    }
}
