use std::fmt;

use stackview_ui_graphics::Color;

use crate::error::StackViewError;
use crate::layout::{ContainerStyle, ContentStyle};
use crate::side::Side;
use crate::snap::SnapPoints;

pub(crate) type ClosedCallback = Box<dyn FnMut() + 'static>;

/// Configuration for [`crate::StackView::mount`].
///
/// ```ignore
/// let options = StackViewOptions::new()
///     .side(Side::Right)
///     .background_hex("#1e1e2e")?
///     .try_snap_points([40, 100])?
///     .on_closed(|| log::info!("panel closed"));
/// ```
pub struct StackViewOptions {
    pub background_color: Color,
    pub side: Side,
    pub snap_points: SnapPoints,
    pub style: ContentStyle,
    pub container_style: ContainerStyle,
    pub(crate) on_closed: Option<ClosedCallback>,
}

impl StackViewOptions {
    pub fn new() -> Self {
        Self {
            background_color: Color::WHITE,
            side: Side::default(),
            snap_points: SnapPoints::default(),
            style: ContentStyle::default(),
            container_style: ContainerStyle::default(),
            on_closed: None,
        }
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn background_hex(mut self, hex: &str) -> Result<Self, StackViewError> {
        self.background_color = Color::from_hex(hex)?;
        Ok(self)
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn snap_points(mut self, snap_points: SnapPoints) -> Self {
        self.snap_points = snap_points;
        self
    }

    pub fn try_snap_points(
        mut self,
        points: impl IntoIterator<Item = u32>,
    ) -> Result<Self, StackViewError> {
        self.snap_points = SnapPoints::new(points)?;
        Ok(self)
    }

    pub fn style(mut self, style: ContentStyle) -> Self {
        self.style = style;
        self
    }

    pub fn container_style(mut self, container_style: ContainerStyle) -> Self {
        self.container_style = container_style;
        self
    }

    /// Called once per release that ends with the panel fully closed.
    pub fn on_closed(mut self, on_closed: impl FnMut() + 'static) -> Self {
        self.on_closed = Some(Box::new(on_closed));
        self
    }
}

impl Default for StackViewOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StackViewOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackViewOptions")
            .field("background_color", &self.background_color)
            .field("side", &self.side)
            .field("snap_points", &self.snap_points)
            .field("style", &self.style)
            .field("container_style", &self.container_style)
            .field("on_closed", &self.on_closed.is_some())
            .finish()
    }
}
