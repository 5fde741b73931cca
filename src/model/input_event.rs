use super::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    CloseRequested,
    PointerReleased(Point),
}
