//! JSON form of [`ChartConfig`].
//!
//! Input accepts two spellings of the same shape: the compact one
//! (`kind` / `values` / `lineColor` / `fillColor` / `filled` and flat option
//! keys) and the Chart.js one (`type` / `data` / `borderColor` /
//! `backgroundColor` / `fill` with `plugins.legend.labels.color` and
//! `scales.{x,y}.ticks.color`). Output always uses the compact spelling.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::config::{ChartConfig, ChartKind, ChartOptions, Dataset};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Deserialize)]
struct RawChartConfig {
    #[serde(alias = "type")]
    kind: String,
    #[serde(default)]
    data: Option<RawChartData>,
    #[serde(default)]
    options: Option<Value>,
}

/// Container fields are optional so explicit `null` reads as empty.
#[derive(Debug, Deserialize)]
struct RawChartData {
    #[serde(default)]
    labels: Option<Vec<Value>>,
    #[serde(default)]
    datasets: Option<Vec<RawDataset>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    #[serde(default)]
    label: Option<Value>,
    #[serde(default, alias = "data")]
    values: Option<Vec<Value>>,
    #[serde(default, alias = "borderColor")]
    line_color: Option<Value>,
    #[serde(default, alias = "backgroundColor")]
    fill_color: Option<Value>,
    #[serde(default, alias = "fill")]
    filled: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ChartConfigJsonContractV1<'a> {
    schema_version: u32,
    kind: ChartKind,
    data: ChartDataJson<'a>,
    options: &'a ChartOptions,
}

#[derive(Debug, Serialize)]
struct ChartDataJson<'a> {
    labels: &'a [String],
    datasets: Vec<DatasetJson<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DatasetJson<'a> {
    label: &'a str,
    #[serde(serialize_with = "serialize_values")]
    values: &'a [f64],
    #[serde(skip_serializing_if = "Option::is_none")]
    line_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fill_color: Option<Color>,
    filled: bool,
}

impl<'a> From<&'a Dataset> for DatasetJson<'a> {
    fn from(dataset: &'a Dataset) -> Self {
        Self {
            label: &dataset.label,
            values: &dataset.values,
            line_color: dataset.line_color,
            fill_color: dataset.fill_color,
            filled: dataset.filled,
        }
    }
}

/// Missing (non-finite) values are written as `"NaN"` so they parse back as missing.
fn serialize_values<S: Serializer>(values: &&[f64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|value| {
        if value.is_finite() {
            Value::from(*value)
        } else {
            Value::String("NaN".to_owned())
        }
    }))
}

impl ChartConfig {
    /// Parses a chart configuration, accepting either JSON spelling.
    ///
    /// Only an unknown or missing chart kind and malformed JSON are errors.
    /// Everything else degrades: non-numeric values become NaN (not drawn),
    /// unreadable colors and malformed options fall back to defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: RawChartConfig = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart json: {e}")))?;
        Self::from_raw(raw)
    }

    pub fn from_json_value(value: Value) -> ChartResult<Self> {
        let raw: RawChartConfig = serde_json::from_value(value)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart json: {e}")))?;
        Self::from_raw(raw)
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            kind: self.kind,
            data: ChartDataJson {
                labels: &self.labels,
                datasets: self.datasets.iter().map(DatasetJson::from).collect(),
            },
            options: &self.options,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config: {e}"))
        })
    }

    fn from_raw(raw: RawChartConfig) -> ChartResult<Self> {
        let kind = match raw.kind.as_str() {
            "line" => ChartKind::Line,
            "bar" => ChartKind::Bar,
            other => {
                return Err(ChartError::InvalidConfig(format!(
                    "unsupported chart kind `{other}`"
                )));
            }
        };
        let (labels, datasets) = raw
            .data
            .map(|data| (data.labels, data.datasets))
            .unwrap_or_default();
        Ok(Self {
            kind,
            labels: labels.unwrap_or_default().iter().map(value_to_label).collect(),
            datasets: datasets
                .unwrap_or_default()
                .into_iter()
                .map(dataset_from_raw)
                .collect(),
            options: raw.options.as_ref().map(options_from_value).unwrap_or_default(),
        })
    }
}

fn dataset_from_raw(raw: RawDataset) -> Dataset {
    Dataset {
        label: raw.label.as_ref().map(value_to_label).unwrap_or_default(),
        values: raw
            .values
            .unwrap_or_default()
            .iter()
            .map(value_to_number)
            .collect(),
        line_color: raw.line_color.as_ref().and_then(value_to_color),
        fill_color: raw.fill_color.as_ref().and_then(value_to_color),
        filled: raw.filled.as_ref().is_some_and(is_truthy),
    }
}

fn options_from_value(options: &Value) -> ChartOptions {
    let color_at = |flat_key: &str, nested_pointer: &str| {
        options
            .get(flat_key)
            .or_else(|| options.pointer(nested_pointer))
            .and_then(value_to_color)
    };
    ChartOptions {
        legend_label_color: color_at("legendLabelColor", "/plugins/legend/labels/color"),
        x_tick_color: color_at("xTickColor", "/scales/x/ticks/color"),
        y_tick_color: color_at("yTickColor", "/scales/y/ticks/color"),
    }
}

/// Stringifies like a JavaScript `String(..)`: whole numbers drop the `.0`.
fn value_to_label(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "null".to_owned(),
        Value::Number(number) if number.is_i64() || number.is_u64() => number.to_string(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if float == 0.0 => "0".to_owned(),
            Some(float) => float.to_string(),
            None => number.to_string(),
        },
        other => other.to_string(),
    }
}

/// Coerces like a JavaScript `Number(..)`: numeric strings parse, booleans and
/// null map to 1/0, anything unparseable is NaN.
fn value_to_number(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn value_to_color(value: &Value) -> Option<Color> {
    let text = value.as_str()?;
    match Color::parse_css(text) {
        Ok(color) => Some(color),
        Err(err) => {
            debug!(error = %err, "falling back to default color");
            None
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
