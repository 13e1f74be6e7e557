//! Timed gesture script replayed against the simulated clock.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use storyline_core::input::{InputEvent, InputProvider, TapZone};

const SCRIPT: [(u64, InputEvent); 8] = [
    (2_500, InputEvent::PressIn(TapZone::Next)),
    (2_560, InputEvent::PressOut),
    (4_000, InputEvent::PressIn(TapZone::Next)),
    (4_400, InputEvent::LongPress),
    (7_000, InputEvent::PressOut),
    (9_000, InputEvent::PressIn(TapZone::Previous)),
    (9_050, InputEvent::PressOut),
    (31_000, InputEvent::SwipeUp),
];

/// Input shared by every page; only the ticked viewer drains it.
#[derive(Clone)]
pub struct TimedInput {
    clock: Rc<Cell<u64>>,
    events: Rc<RefCell<VecDeque<(u64, InputEvent)>>>,
}

impl TimedInput {
    pub fn scripted(clock: Rc<Cell<u64>>) -> Self {
        Self {
            clock,
            events: Rc::new(RefCell::new(SCRIPT.into_iter().collect())),
        }
    }
}

impl InputProvider for TimedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let now_ms = self.clock.get();
        let mut events = self.events.borrow_mut();
        let due = events.front().is_some_and(|(at_ms, _)| *at_ms <= now_ms);
        if !due {
            return Ok(None);
        }
        Ok(events.pop_front().map(|(_, event)| event))
    }
}
