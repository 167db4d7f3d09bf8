use super::*;

#[test]
fn constructors_set_kind_and_position() {
    let cases = [
        (PointerEvent::down(1.0, 2.0), PointerEventKind::Down),
        (PointerEvent::moved(1.0, 2.0), PointerEventKind::Move),
        (PointerEvent::up(1.0, 2.0), PointerEventKind::Up),
        (PointerEvent::cancel(1.0, 2.0), PointerEventKind::Cancel),
    ];
    for (event, kind) in cases {
        assert_eq!(event.kind, kind);
        assert_eq!(event.page_position.x, 1.0);
        assert_eq!(event.page_position.y, 2.0);
    }
}
