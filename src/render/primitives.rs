use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a normalized alpha.
    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    /// Parses a CSS color expression: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb(..)`, `rgba(..)` or a basic named color.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }
        let lower = trimmed.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgb_function(body).ok_or_else(|| invalid_color(input));
        }
        named_color(&lower).ok_or_else(|| invalid_color(input))
    }

    /// Multiplies alpha, as a canvas global alpha would.
    #[must_use]
    pub fn with_alpha_factor(self, factor: f64) -> Self {
        Self {
            alpha: self.alpha * factor,
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_css(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_css(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.alpha >= 1.0 {
            write!(
                f,
                "#{:02x}{:02x}{:02x}",
                channel(self.red),
                channel(self.green),
                channel(self.blue)
            )
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                channel(self.red),
                channel(self.green),
                channel(self.blue),
                self.alpha
            )
        }
    }
}

fn invalid_color(input: &str) -> ChartError {
    ChartError::InvalidData(format!("unsupported color expression `{input}`"))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |index: usize| u8::from_str_radix(&hex[index..=index], 16).ok();
    let pair = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();
    match hex.len() {
        3 | 4 => {
            let red = digit(0)? * 17;
            let green = digit(1)? * 17;
            let blue = digit(2)? * 17;
            let alpha = if hex.len() == 4 { digit(3)? * 17 } else { 255 };
            Some(Color::from_rgba8(red, green, blue, f64::from(alpha) / 255.0))
        }
        6 | 8 => {
            let red = pair(0)?;
            let green = pair(2)?;
            let blue = pair(4)?;
            let alpha = if hex.len() == 8 { pair(6)? } else { 255 };
            Some(Color::from_rgba8(red, green, blue, f64::from(alpha) / 255.0))
        }
        _ => None,
    }
}

fn parse_rgb_function(body: &str) -> Option<Color> {
    let parts: SmallVec<[f64; 4]> = body
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;
    let channel = |value: f64| value.clamp(0.0, 255.0) / 255.0;
    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(channel(*r), channel(*g), channel(*b))),
        [r, g, b, a] => Some(Color::rgba(
            channel(*r),
            channel(*g),
            channel(*b),
            a.clamp(0.0, 1.0),
        )),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let (red, green, blue) = match name {
        "transparent" => return Some(Color::TRANSPARENT),
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "lime" => (0, 255, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "maroon" => (128, 0, 0),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "olive" => (128, 128, 0),
        "aqua" | "cyan" => (0, 255, 255),
        "fuchsia" | "magenta" => (255, 0, 255),
        _ => return None,
    };
    Some(Color::from_rgba8(red, green, blue, 1.0))
}

/// Point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Immediate-mode path, mirroring a canvas `beginPath` / `moveTo` / `lineTo` sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: SmallVec<[PathCommand; 8]>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Opens a path at the first point and connects the rest in order.
    #[must_use]
    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Self::new();
        for (index, point) in points.iter().enumerate() {
            if index == 0 {
                path.move_to(point.x, point.y);
            } else {
                path.line_to(point.x, point.y);
            }
        }
        path
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// All vertices in command order, skipping `Close`.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => Some(*point),
            PathCommand::Close => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Axis-aligned rectangle in pixel space. Width may be negative (drawn leftwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Fill color plus a global alpha multiplier applied on top of the color's own alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub color: Color,
    pub global_alpha: f64,
}

impl FillStyle {
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            global_alpha: 1.0,
        }
    }

    #[must_use]
    pub const fn with_global_alpha(mut self, global_alpha: f64) -> Self {
        self.global_alpha = global_alpha;
        self
    }

    /// Color with the global alpha folded in.
    #[must_use]
    pub fn effective_color(self) -> Color {
        self.color.with_alpha_factor(self.global_alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.global_alpha.is_finite() || !(0.0..=1.0).contains(&self.global_alpha) {
            return Err(ChartError::InvalidData(
                "global alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    Top,
    Middle,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
