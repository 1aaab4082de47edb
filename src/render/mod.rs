mod primitives;
mod recording;

pub use primitives::{
    Color, FillStyle, Path, PathCommand, Point, Rect, StrokeStyle, TextHAlign, TextPrimitive,
    TextVAlign,
};
pub use recording::{DrawCommand, RecordingSurface};

use crate::core::SurfaceSize;
use crate::error::ChartResult;

/// Contract implemented by any raster drawing target.
///
/// The primitives mirror an immediate-mode 2D canvas. Implementations draw
/// additively; nothing is cleared unless `clear_rect` is called.
pub trait Surface {
    /// Explicit pixel dimensions; either side may be zero when unset.
    fn pixel_size(&self) -> SurfaceSize;

    /// Rendered (client) size used when explicit pixel dimensions are unset.
    fn client_size(&self) -> SurfaceSize;

    fn set_pixel_size(&mut self, size: SurfaceSize) -> ChartResult<()>;

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()>;

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()>;

    fn fill_path(&mut self, path: &Path, style: FillStyle) -> ChartResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> ChartResult<()>;

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn pixel_size(&self) -> SurfaceSize {
        (**self).pixel_size()
    }

    fn client_size(&self) -> SurfaceSize {
        (**self).client_size()
    }

    fn set_pixel_size(&mut self, size: SurfaceSize) -> ChartResult<()> {
        (**self).set_pixel_size(size)
    }

    fn clear_rect(&mut self, rect: Rect) -> ChartResult<()> {
        (**self).clear_rect(rect)
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) -> ChartResult<()> {
        (**self).stroke_path(path, style)
    }

    fn fill_path(&mut self, path: &Path, style: FillStyle) -> ChartResult<()> {
        (**self).fill_path(path, style)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> ChartResult<()> {
        (**self).fill_rect(rect, color)
    }

    fn fill_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        (**self).fill_text(text)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
