use serde::{Deserialize, Serialize};

use crate::core::scale::Domain;

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Resolves each dimension independently: an explicit nonzero value wins,
    /// otherwise the rendered (client) value is used.
    #[must_use]
    pub fn or_client(self, client: SurfaceSize) -> Self {
        Self {
            width: if self.width != 0 { self.width } else { client.width },
            height: if self.height != 0 {
                self.height
            } else {
                client.height
            },
        }
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Plot rectangle in pixel space, after padding has been reserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// Geometry derived for a single render pass.
///
/// For line charts `step` is the horizontal distance between categories; for
/// bar charts it is the height of one bar row and `domain` is `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub domain: Domain,
    pub step: f64,
    pub plot: PlotArea,
}
