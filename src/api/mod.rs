mod bar_chart;
mod chart;
mod config;
mod json_contract;
mod label_format;
mod legend;
mod line_chart;

pub use bar_chart::{
    BAR_THICKNESS_RATIO, BarChartLayout, BarRow, LABEL_COLUMN_WIDTH, LABEL_GAP, RIGHT_PADDING,
    TOP_PADDING, TRACK_COLOR, VALUE_GAP, layout_bar_chart,
};
pub use chart::Chart;
pub use config::{
    ChartConfig, ChartKind, ChartOptions, ChartStyle, DEFAULT_AREA_FILL_COLOR,
    DEFAULT_AXIS_COLOR, DEFAULT_BAR_COLOR, DEFAULT_BAR_LABEL_COLOR, DEFAULT_FONT_SIZE_PX,
    DEFAULT_LEGEND_LABEL_COLOR, DEFAULT_LINE_COLOR, Dataset,
};
pub use json_contract::CHART_CONFIG_JSON_SCHEMA_V1;
pub use label_format::format_integer_label;
pub use legend::{
    LEGEND_ROW_HEIGHT, LEGEND_SWATCH_SIZE, LEGEND_TEXT_OFFSET, LEGEND_WIDTH, LegendRow,
    layout_legend,
};
pub use line_chart::{
    AREA_FILL_ALPHA, AXIS_STROKE_WIDTH, CATEGORY_LABEL_OFFSET, CategoryLabel, LineChartLayout,
    LineSeriesGeometry, SERIES_STROKE_WIDTH, TICK_LABEL_GAP, TICK_MARK_LENGTH, ValueTick,
    X_PADDING, Y_PADDING, category_step, layout_line_chart,
};
