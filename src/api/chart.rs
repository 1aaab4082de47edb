use tracing::{debug, warn};

use crate::core::{RenderState, SurfaceSize};
use crate::error::ChartResult;
use crate::render::{Rect, Surface};

use super::bar_chart::render_bar_chart;
use super::config::{ChartConfig, ChartKind, ChartStyle};
use super::line_chart::render_line_chart;

/// Handle to one rendered chart.
///
/// `create` draws exactly once; the handle never re-renders. To show new data,
/// `destroy` the old handle and create a new one. `S` is usually `&mut T` so
/// the caller keeps ownership of the surface.
pub struct Chart<S: Surface> {
    surface: S,
    config: ChartConfig,
    style: ChartStyle,
    size: SurfaceSize,
    render_state: Option<RenderState>,
    destroyed: bool,
}

impl<S: Surface> Chart<S> {
    /// Normalizes the surface size, clears it and renders `config` once.
    ///
    /// Never fails. Empty input draws nothing after the clear; a backend error
    /// is logged and ends the pass early.
    pub fn create(mut surface: S, config: ChartConfig) -> Self {
        let style = ChartStyle::resolve(&config.options);
        let size = normalize_surface_size(&mut surface);
        debug!(
            kind = ?config.kind,
            width = size.width,
            height = size.height,
            labels = config.labels.len(),
            datasets = config.datasets.len(),
            "create chart"
        );

        let render_state = match render_pass(&mut surface, size, &config, &style) {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err, kind = ?config.kind, "chart render pass aborted");
                None
            }
        };

        Self {
            surface,
            config,
            style,
            size,
            render_state,
            destroyed: false,
        }
    }

    /// Clears the whole surface region. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if let Err(err) = self.surface.clear_rect(full_rect(self.size)) {
            warn!(error = %err, "failed to clear surface on destroy");
        }
        if !self.destroyed {
            debug!(kind = ?self.config.kind, "destroy chart");
        }
        self.destroyed = true;
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.config.kind
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    /// Pixel size the chart was rendered at.
    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Geometry of the render pass, `None` when nothing was drawn.
    #[must_use]
    pub fn render_state(&self) -> Option<RenderState> {
        self.render_state
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Resolves the drawing size (explicit pixels, else client box) and writes it
/// back to the surface when it changed.
fn normalize_surface_size<S: Surface>(surface: &mut S) -> SurfaceSize {
    let explicit = surface.pixel_size();
    let size = explicit.or_client(surface.client_size());
    if size != explicit {
        if let Err(err) = surface.set_pixel_size(size) {
            warn!(
                error = %err,
                width = size.width,
                height = size.height,
                "failed to apply normalized surface size"
            );
        }
    }
    size
}

fn render_pass<S: Surface>(
    surface: &mut S,
    size: SurfaceSize,
    config: &ChartConfig,
    style: &ChartStyle,
) -> ChartResult<Option<RenderState>> {
    surface.clear_rect(full_rect(size))?;
    if !size.is_valid() {
        debug!(
            width = size.width,
            height = size.height,
            "surface has no area; skipping render"
        );
        return Ok(None);
    }
    match config.kind {
        ChartKind::Line => render_line_chart(surface, size, config, style),
        ChartKind::Bar => render_bar_chart(surface, size, config, style),
    }
}

fn full_rect(size: SurfaceSize) -> Rect {
    Rect::new(0.0, 0.0, size.width_px(), size.height_px())
}
