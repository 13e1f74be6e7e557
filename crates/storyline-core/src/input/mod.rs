//! Input abstraction layer.

pub mod mock;

/// Half of the screen a press landed on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TapZone {
    Previous,
    Next,
}

/// Gestures recognized by the host, consumed by the story viewer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    PressIn(TapZone),
    /// The current press has been held long enough to count as a hold.
    LongPress,
    PressOut,
    SwipeUp,
    SwipeDown,
    ClosePressed,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
