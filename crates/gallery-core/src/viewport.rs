//! Pan/zoom/drag state for the fractal view.
//!
//! Pointer positions arrive already normalized by the input layer. The
//! controller keeps a committed offset and zoom plus an optional in-flight
//! drag; each frame it hands the renderer a [`ViewTransform`] that includes
//! the drag preview without committing it.

use glam::DVec2;

use crate::config::ViewportConfig;
use crate::error::Result;

/// Pointer drag progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { start: DVec2, current: DVec2 },
}

/// Committed view plus the in-flight drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Center of view in fractal-plane units.
    pub offset: DVec2,
    /// Squared scale of the view; smaller is further in.
    pub zoom: f64,
    pub drag: DragState,
}

/// The `(offset, zoom)` pair one frame is rendered with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub offset: DVec2,
    pub zoom: f64,
}

impl ViewTransform {
    pub fn new(offset: DVec2, zoom: f64) -> Self {
        Self { offset, zoom }
    }

    /// Map a normalized screen coordinate into the complex plane.
    #[inline]
    pub fn to_plane(&self, coordinate: DVec2) -> DVec2 {
        coordinate * self.zoom.sqrt() + self.offset
    }
}

impl Viewport {
    fn drag_delta(&self) -> DVec2 {
        match self.drag {
            DragState::Idle => DVec2::ZERO,
            DragState::Dragging { start, current } => (current - start) * self.zoom.sqrt(),
        }
    }
}

/// Turns pointer and wheel events into a [`Viewport`].
///
/// Events that make no sense in the current state (an up or leave with no
/// drag in progress) are ignored.
#[derive(Clone, Debug)]
pub struct ViewportController {
    viewport: Viewport,
    zoom_factor: f64,
}

impl Default for ViewportController {
    fn default() -> Self {
        let config = ViewportConfig::default();
        Self {
            viewport: Viewport {
                offset: config.offset,
                zoom: config.zoom,
                drag: DragState::Idle,
            },
            zoom_factor: config.zoom_factor,
        }
    }
}

impl ViewportController {
    pub fn new(config: &ViewportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            viewport: Viewport {
                offset: config.offset,
                zoom: config.zoom,
                drag: DragState::Idle,
            },
            zoom_factor: config.zoom_factor,
        })
    }

    pub fn on_pointer_down(&mut self, p: DVec2) {
        self.viewport.drag = match self.viewport.drag {
            DragState::Idle => DragState::Dragging { start: p, current: p },
            DragState::Dragging { start, .. } => DragState::Dragging { start, current: p },
        };
    }

    pub fn on_pointer_move(&mut self, p: DVec2) {
        if let DragState::Dragging { current, .. } = &mut self.viewport.drag {
            *current = p;
        }
    }

    /// Commit the drag into the offset.
    pub fn on_pointer_up(&mut self) {
        if let DragState::Dragging { .. } = self.viewport.drag {
            self.viewport.offset += self.viewport.drag_delta();
            self.viewport.drag = DragState::Idle;
            log::debug!(
                "viewport offset ({}, {}) zoom {}",
                self.viewport.offset.x,
                self.viewport.offset.y,
                self.viewport.zoom
            );
        }
    }

    /// Drop the drag without moving the view.
    pub fn on_pointer_leave(&mut self) {
        if let DragState::Dragging { .. } = self.viewport.drag {
            log::trace!("drag abandoned");
            self.viewport.drag = DragState::Idle;
        }
    }

    /// Negative `delta_y` (wheel up) zooms in; anything else zooms out.
    ///
    /// A step that would leave zoom non-finite or zero is dropped, so zoom
    /// stays a usable positive scale at both extremes.
    pub fn on_wheel(&mut self, delta_y: f64) {
        let zoom = if delta_y < 0.0 {
            self.viewport.zoom * self.zoom_factor
        } else {
            self.viewport.zoom / self.zoom_factor
        };
        if zoom.is_finite() && zoom > 0.0 {
            self.viewport.zoom = zoom;
        } else {
            log::trace!("wheel step dropped at zoom {}", self.viewport.zoom);
        }
    }

    pub fn offset(&self) -> DVec2 {
        self.viewport.offset
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn drag_state(&self) -> DragState {
        self.viewport.drag
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Offset including the uncommitted drag, if any.
    pub fn preview_offset(&self) -> DVec2 {
        self.viewport.offset + self.viewport.drag_delta()
    }

    /// Transform to render the current frame with.
    pub fn snapshot(&self) -> ViewTransform {
        ViewTransform::new(self.preview_offset(), self.viewport.zoom)
    }
}
