use stackview_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single touch sample.
///
/// `page_position` is in window coordinates (origin at the top-left of the
/// window), which is what edge-anchored panels hit-test against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub page_position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, page_position: Point) -> Self {
        Self {
            kind,
            page_position,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y))
    }
}
