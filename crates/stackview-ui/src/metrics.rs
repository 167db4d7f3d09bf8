use std::cell::Cell;
use std::rc::Rc;

use stackview_ui_graphics::Size;

/// Source of the current window dimensions.
///
/// Queried on every gesture event, so hosts can report rotations and resizes
/// without notifying the panel.
pub trait WindowMetrics {
    fn window_size(&self) -> Size;
}

impl WindowMetrics for Size {
    fn window_size(&self) -> Size {
        *self
    }
}

impl WindowMetrics for Cell<Size> {
    fn window_size(&self) -> Size {
        self.get()
    }
}

impl<T: WindowMetrics + ?Sized> WindowMetrics for Rc<T> {
    fn window_size(&self) -> Size {
        (**self).window_size()
    }
}

impl<T: WindowMetrics + ?Sized> WindowMetrics for &T {
    fn window_size(&self) -> Size {
        (**self).window_size()
    }
}
