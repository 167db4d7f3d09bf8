//! Mapping from panel progress to what the host renderer draws.
//!
//! All functions here are pure. The host calls [`StackViewLayout::compute`]
//! (usually through [`crate::StackView::layout`]) whenever progress or the
//! window size changes and applies the result to its own view tree.

use stackview_ui_graphics::{Color, CornerRadii, EdgeInsets, Rect, Size, Translation};

use crate::side::Side;

const PANEL_EDGE_PADDING: f32 = 6.0;
const PANEL_CORNER_RADIUS: f32 = 16.0;
const CONTENT_PADDING: f32 = 6.0;
const CONTENT_LEADING_PADDING: f32 = 16.0;

const INDICATOR_THICKNESS: f32 = 6.0;
const INDICATOR_EDGE_OFFSET: f32 = 8.0;
const INDICATOR_CORNER_RADIUS: f32 = 3.0;
/// Bottom indicator spans 35%..65% of the width.
const INDICATOR_BOTTOM_INSET: f32 = 0.35;
/// Side indicators span 40%..60% of the height.
const INDICATOR_SIDE_INSET: f32 = 0.40;

/// Overrides for the sliding panel itself. Unset fields keep the defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerStyle {
    pub padding: Option<EdgeInsets>,
    pub corner_radii: Option<CornerRadii>,
    pub background: Option<Color>,
}

impl ContainerStyle {
    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn corner_radii(mut self, corner_radii: CornerRadii) -> Self {
        self.corner_radii = Some(corner_radii);
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }
}

/// Overrides for the content box inside the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentStyle {
    pub padding: Option<EdgeInsets>,
}

impl ContentStyle {
    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLayout {
    /// Untranslated frame; fixed by the maximum snap point.
    pub frame: Rect,
    pub translation: Translation,
    pub background: Color,
    pub padding: EdgeInsets,
    pub corner_radii: CornerRadii,
    pub content_padding: EdgeInsets,
}

impl PanelLayout {
    /// Where the panel currently sits on screen.
    pub fn visible_frame(&self) -> Rect {
        self.translation.apply_to_rect(self.frame)
    }
}

/// The grab handle drawn along the panel's leading edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorLayout {
    pub frame: Rect,
    pub translation: Translation,
    pub color: Color,
    pub corner_radius: f32,
}

impl IndicatorLayout {
    pub fn visible_frame(&self) -> Rect {
        self.translation.apply_to_rect(self.frame)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackViewLayout {
    pub side: Side,
    pub progress: f32,
    pub panel: PanelLayout,
    pub indicator: IndicatorLayout,
}

/// Everything [`StackViewLayout::compute`] needs besides progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutInput {
    pub side: Side,
    pub window: Size,
    pub max_stack_point: f32,
    pub background: Color,
    pub container_style: ContainerStyle,
    pub content_style: ContentStyle,
}

impl StackViewLayout {
    pub fn compute(input: &LayoutInput, progress: f32) -> Self {
        let strategy = input.side.strategy();
        let translation = strategy.translation(progress, input.window);
        let container = &input.container_style;

        let panel = PanelLayout {
            frame: container_frame(input.side, input.window, input.max_stack_point),
            translation,
            background: container.background.unwrap_or(input.background),
            padding: container
                .padding
                .unwrap_or_else(|| default_panel_padding(input.side)),
            corner_radii: container
                .corner_radii
                .unwrap_or_else(|| default_corner_radii(input.side)),
            content_padding: input
                .content_style
                .padding
                .unwrap_or_else(|| default_content_padding(input.side)),
        };

        let indicator = IndicatorLayout {
            frame: indicator_frame(input.side, input.window),
            translation,
            color: Color::LIGHT_GRAY,
            corner_radius: INDICATOR_CORNER_RADIUS,
        };

        Self {
            side: input.side,
            progress,
            panel,
            indicator,
        }
    }
}

/// Static panel frame: the edge opposite the home edge is pulled in by
/// `1 - max_stack_point` of the extent, so the fully open panel stops there.
pub fn container_frame(side: Side, window: Size, max_stack_point: f32) -> Rect {
    let inset = side.strategy().extent(window) * (1.0 - max_stack_point);
    match side {
        Side::Bottom => Rect::new(0.0, 0.0, window.width, window.height - inset),
        Side::Right => Rect::new(0.0, 0.0, window.width - inset, window.height),
        Side::Left => Rect::new(inset, 0.0, window.width - inset, window.height),
    }
}

pub fn default_panel_padding(side: Side) -> EdgeInsets {
    match side {
        Side::Bottom => EdgeInsets::from_components(0.0, PANEL_EDGE_PADDING, 0.0, 0.0),
        Side::Right => EdgeInsets::from_components(PANEL_EDGE_PADDING, 0.0, 0.0, 0.0),
        Side::Left => EdgeInsets::from_components(0.0, 0.0, PANEL_EDGE_PADDING, 0.0),
    }
}

pub fn default_corner_radii(side: Side) -> CornerRadii {
    let r = PANEL_CORNER_RADIUS;
    match side {
        Side::Bottom => CornerRadii {
            top_left: r,
            top_right: r,
            bottom_right: 0.0,
            bottom_left: 0.0,
        },
        Side::Right => CornerRadii {
            top_left: r,
            top_right: 0.0,
            bottom_right: 0.0,
            bottom_left: r,
        },
        Side::Left => CornerRadii {
            top_left: 0.0,
            top_right: r,
            bottom_right: r,
            bottom_left: 0.0,
        },
    }
}

pub fn default_content_padding(side: Side) -> EdgeInsets {
    let leading = |matches: bool| {
        if matches {
            CONTENT_LEADING_PADDING
        } else {
            CONTENT_PADDING
        }
    };
    EdgeInsets::from_components(
        leading(side == Side::Right),
        leading(side == Side::Bottom),
        leading(side == Side::Left),
        0.0,
    )
}

/// Untranslated grab indicator frame, in window coordinates.
pub fn indicator_frame(side: Side, window: Size) -> Rect {
    match side {
        Side::Bottom => Rect::new(
            window.width * INDICATOR_BOTTOM_INSET,
            INDICATOR_EDGE_OFFSET,
            window.width * (1.0 - 2.0 * INDICATOR_BOTTOM_INSET),
            INDICATOR_THICKNESS,
        ),
        Side::Right => Rect::new(
            INDICATOR_EDGE_OFFSET,
            window.height * INDICATOR_SIDE_INSET,
            INDICATOR_THICKNESS,
            window.height * (1.0 - 2.0 * INDICATOR_SIDE_INSET),
        ),
        Side::Left => Rect::new(
            window.width - INDICATOR_EDGE_OFFSET - INDICATOR_THICKNESS,
            window.height * INDICATOR_SIDE_INSET,
            INDICATOR_THICKNESS,
            window.height * (1.0 - 2.0 * INDICATOR_SIDE_INSET),
        ),
    }
}
