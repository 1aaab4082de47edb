use crate::core::SurfaceSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FillStyle, Path, Rect, StrokeStyle, Surface, TextPrimitive};

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize(SurfaceSize),
    Clear(Rect),
    StrokePath { path: Path, style: StrokeStyle },
    FillPath { path: Path, style: FillStyle },
    FillRect { rect: Rect, color: Color },
    FillText(TextPrimitive),
}

impl DrawCommand {
    /// Whether this command leaves marks on the surface.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        !matches!(self, Self::Resize(_) | Self::Clear(_))
    }
}

/// Headless surface that records every call.
///
/// Used by tests and headless hosts. Every recorded primitive is validated so
/// geometry errors surface before a raster backend is involved.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: SurfaceSize,
    client_size: SurfaceSize,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Surface with explicit pixel dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            client_size: SurfaceSize::default(),
            commands: Vec::new(),
        }
    }

    /// Surface whose pixel dimensions are unset and must come from its client box.
    #[must_use]
    pub fn with_client_size(width: u32, height: u32) -> Self {
        Self {
            size: SurfaceSize::default(),
            client_size: SurfaceSize::new(width, height),
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands issued after the most recent clear covering the whole surface.
    #[must_use]
    pub fn visible_commands(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|command| match command {
                DrawCommand::Clear(rect) => self.covers_surface(*rect),
                _ => false,
            })
            .map_or(0, |index| index + 1);
        &self.commands[start..]
    }

    /// True when nothing has been drawn since the last full clear.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        !self.visible_commands().iter().any(DrawCommand::is_drawing)
    }

    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Clear(_)))
            .count()
    }

    #[must_use]
    pub fn drawing_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_drawing()).count()
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&Path, &StrokeStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokePath { path, style } => Some((path, style)),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Path, &FillStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillPath { path, style } => Some((path, style)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillText(text) => Some(text),
            _ => None,
        })
    }

    fn covers_surface(&self, rect: Rect) -> bool {
        rect.x <= 0.0
            && rect.y <= 0.0
            && rect.x + rect.width >= self.size.width_px()
            && rect.y + rect.height >= self.size.height_px()
    }
}

impl Surface for RecordingSurface {
    fn pixel_size(&self) -> SurfaceSize {
        self.size
    }

    fn client_size(&self) -> SurfaceSize {
        self.client_size
    }

    fn set_pixel_size(&mut self, size: SurfaceSize) -> ChartResult<()> {
        self.size = size;
        self.commands.push(DrawCommand::Resize(size));
        Ok(())
    }

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()> {
        rect.validate()?;
        self.commands.push(DrawCommand::Clear(rect));
        Ok(())
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()> {
        path.validate()?;
        style.validate()?;
        if path.is_empty() {
            return Err(ChartError::InvalidData(
                "stroked path must contain at least one vertex".to_owned(),
            ));
        }
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            style,
        });
        Ok(())
    }

    fn fill_path(&mut self, path: &Path, style: FillStyle) -> ChartResult<()> {
        path.validate()?;
        style.validate()?;
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            style,
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> ChartResult<()> {
        rect.validate()?;
        color.validate()?;
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.commands.push(DrawCommand::FillText(text.clone()));
        Ok(())
    }
}
