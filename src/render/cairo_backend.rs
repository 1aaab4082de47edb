use std::fs::File;
use std::path::Path as FsPath;

use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::core::SurfaceSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FillStyle, Path, PathCommand, Rect, StrokeStyle, Surface, TextHAlign, TextPrimitive,
    TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub clears: usize,
    pub paths_stroked: usize,
    pub paths_filled: usize,
    pub rects_filled: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango raster surface.
///
/// Pixels live in an ARGB32 image surface. Until pixel dimensions are set the
/// surface only knows its client size, and drawing calls fail.
#[derive(Debug)]
pub struct CairoSurface {
    image: Option<ImageSurface>,
    size: SurfaceSize,
    client_size: SurfaceSize,
    stats: CairoRenderStats,
}

impl CairoSurface {
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        let size = SurfaceSize::new(width, height);
        if !size.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        Ok(Self {
            image: Some(create_image(size)?),
            size,
            client_size: size,
            stats: CairoRenderStats::default(),
        })
    }

    /// Surface with unset pixel dimensions; the chart resolves them from `client`.
    #[must_use]
    pub fn with_client_size(width: u32, height: u32) -> Self {
        Self {
            image: None,
            size: SurfaceSize::default(),
            client_size: SurfaceSize::new(width, height),
            stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    /// True when every pixel is fully transparent.
    pub fn is_cleared(&mut self) -> ChartResult<bool> {
        let image = self.image_mut()?;
        image.flush();
        let data = image
            .data()
            .map_err(|err| ChartError::Backend(format!("failed to borrow pixels: {err}")))?;
        Ok(data.iter().all(|byte| *byte == 0))
    }

    pub fn write_png(&self, path: impl AsRef<FsPath>) -> ChartResult<()> {
        let image = self
            .image
            .as_ref()
            .ok_or_else(|| ChartError::Backend("surface has no pixel buffer".to_owned()))?;
        let mut file = File::create(path.as_ref()).map_err(|err| {
            ChartError::Backend(format!(
                "failed to create `{}`: {err}",
                path.as_ref().display()
            ))
        })?;
        image
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }

    fn image_mut(&mut self) -> ChartResult<&mut ImageSurface> {
        self.image
            .as_mut()
            .ok_or_else(|| ChartError::Backend("surface has no pixel buffer".to_owned()))
    }

    fn context(&self) -> ChartResult<Context> {
        let image = self
            .image
            .as_ref()
            .ok_or_else(|| ChartError::Backend("surface has no pixel buffer".to_owned()))?;
        Context::new(image).map_err(|err| map_backend_error("failed to create cairo context", err))
    }
}

impl Surface for CairoSurface {
    fn pixel_size(&self) -> SurfaceSize {
        self.size
    }

    fn client_size(&self) -> SurfaceSize {
        self.client_size
    }

    fn set_pixel_size(&mut self, size: SurfaceSize) -> ChartResult<()> {
        if !size.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: size.width,
                height: size.height,
            });
        }
        if self.image.is_none() || size != self.size {
            self.image = Some(create_image(size)?);
        }
        self.size = size;
        Ok(())
    }

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()> {
        let context = self.context()?;
        context.set_operator(Operator::Clear);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to clear region", err))?;
        self.stats.clears += 1;
        Ok(())
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()> {
        let context = self.context()?;
        append_path(&context, path);
        apply_color(&context, style.color);
        context.set_line_width(style.width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        self.stats.paths_stroked += 1;
        Ok(())
    }

    fn fill_path(&mut self, path: &Path, style: FillStyle) -> ChartResult<()> {
        let context = self.context()?;
        append_path(&context, path);
        apply_color(&context, style.effective_color());
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        self.stats.paths_filled += 1;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> ChartResult<()> {
        let context = self.context()?;
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        apply_color(&context, color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        self.stats.rects_filled += 1;
        Ok(())
    }

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        if text.text.is_empty() {
            return Ok(());
        }
        let context = self.context()?;
        let layout = pangocairo::functions::create_layout(&context);
        let font_description = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let y = match text.v_align {
            TextVAlign::Top => text.y,
            TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
        };

        apply_color(&context, text.color);
        context.move_to(x, y);
        pangocairo::functions::show_layout(&context, &layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

fn create_image(size: SurfaceSize) -> ChartResult<ImageSurface> {
    let width = i32::try_from(size.width).map_err(|_| ChartError::InvalidViewport {
        width: size.width,
        height: size.height,
    })?;
    let height = i32::try_from(size.height).map_err(|_| ChartError::InvalidViewport {
        width: size.width,
        height: size.height,
    })?;
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn append_path(context: &Context, path: &Path) {
    context.new_path();
    for command in path.commands() {
        match command {
            PathCommand::MoveTo(point) => context.move_to(point.x, point.y),
            PathCommand::LineTo(point) => context.line_to(point.x, point.y),
            PathCommand::Close => context.close_path(),
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
