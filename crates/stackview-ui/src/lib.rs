//! Draggable edge-anchored panel for StackView.
//!
//! [`StackView`] wires the gesture handling in [`side`] and the release
//! decision in [`snap`] to an [`stackview_animation::Animatable`] progress
//! value; [`layout`] turns that progress into frames and translations the
//! host renders.

mod error;
pub mod layout;
mod metrics;
mod options;
pub mod side;
pub mod snap;
mod stack_view;

pub use error::StackViewError;
pub use layout::{
    ContainerStyle, ContentStyle, IndicatorLayout, LayoutInput, PanelLayout, StackViewLayout,
};
pub use metrics::WindowMetrics;
pub use options::StackViewOptions;
pub use side::{Axis, DragSample, Side, SideStrategy};
pub use snap::{resolve_release, Release, ReleaseKind, SnapPoints};
pub use stack_view::StackView;

pub mod prelude {
    pub use crate::{
        ContainerStyle, ContentStyle, Side, SnapPoints, StackView, StackViewError,
        StackViewOptions, WindowMetrics,
    };
    pub use stackview_ui_graphics::prelude::*;
}

#[cfg(test)]
#[path = "tests/side_tests.rs"]
mod side_tests;

#[cfg(test)]
#[path = "tests/snap_tests.rs"]
mod snap_tests;

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod layout_tests;
