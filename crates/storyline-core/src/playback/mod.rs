//! Playback controller: active story, per-segment marks and the timer.

use heapless::Vec;
use log::{debug, info, warn};

use crate::{
    config::StoryConfig,
    media::{MediaRequest, MediaSize, SizeReport},
    story::{FinishedMark, ItemsLoadResult, MAX_STORY_ITEMS, PlaybackEntry, StoryItem},
    timer::{PERMILLE_FULL, ProgressTimer},
};

/// Neighbours on each side of the active story worth warming up.
const PREFETCH_RADIUS: usize = 2;
/// Holds both sides of the window; the active story itself is skipped.
pub const PREFETCH_SLOTS: usize = PREFETCH_RADIUS * 2;

/// Which edge of the list playback ran off.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackState {
    Empty,
    Playing,
    Suspended,
    Loading,
    Closed,
}

/// Host callbacks. Every method is optional.
pub trait NavigationObserver<M> {
    fn on_advanced(&mut self, _entry: &PlaybackEntry<M>, _index: u16) {}

    fn on_rewound(&mut self, _entry: &PlaybackEntry<M>, _index: u16) {}

    /// Only reported while this list is the current page of the carousel.
    fn on_finished(&mut self, _direction: Direction) {}

    /// Swipe-up on an activatable story.
    fn on_activate(&mut self, _entry: &PlaybackEntry<M>, _index: u16) {}

    /// Close button, swipe-down, or swipe-up with `close_on_swipe_up`.
    fn on_close_requested(&mut self, _entry: Option<&PlaybackEntry<M>>) {}
}

/// Observer that ignores every callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<M> NavigationObserver<M> for NoopObserver {}

/// Single source of truth for the visible story of one list.
#[derive(Debug)]
pub struct PlaybackController<M> {
    config: StoryConfig,
    entries: Vec<PlaybackEntry<M>, MAX_STORY_ITEMS>,
    active_index: u16,
    loading: bool,
    suspended: bool,
    closed: bool,
    page_index: u16,
    current_page: Option<u16>,
    timer: ProgressTimer,
    media_request: Option<MediaRequest<M>>,
    image_size: Option<MediaSize>,
}

impl<M> PlaybackController<M>
where
    M: Clone + PartialEq,
{
    pub fn new(config: StoryConfig) -> Self {
        if config.duration_ms == 0 {
            warn!("story-config: zero duration, stories will not auto-advance");
        }

        Self {
            config: config.sanitized(),
            entries: Vec::new(),
            active_index: 0,
            loading: false,
            suspended: false,
            closed: false,
            page_index: 0,
            current_page: None,
            timer: ProgressTimer::new(),
            media_request: None,
            image_size: None,
        }
    }

    /// Position of this list inside the outer carousel.
    pub fn with_page_index(mut self, page_index: u16) -> Self {
        self.page_index = page_index;
        self
    }

    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    pub fn entries(&self) -> &[PlaybackEntry<M>] {
        &self.entries
    }

    pub fn active_index(&self) -> Option<u16> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.active_index)
        }
    }

    pub fn active_entry(&self) -> Option<&PlaybackEntry<M>> {
        self.entries.get(self.active_index as usize)
    }

    pub fn page_index(&self) -> u16 {
        self.page_index
    }

    pub fn is_current_page(&self) -> bool {
        self.current_page == Some(self.page_index)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn state(&self) -> PlaybackState {
        if self.entries.is_empty() {
            PlaybackState::Empty
        } else if self.closed {
            PlaybackState::Closed
        } else if self.loading {
            PlaybackState::Loading
        } else if self.suspended {
            PlaybackState::Suspended
        } else {
            PlaybackState::Playing
        }
    }

    pub fn timer(&self) -> &ProgressTimer {
        &self.timer
    }

    /// Fill of one progress segment in permille.
    pub fn segment_fill(&self, index: usize, now_ms: u64) -> u16 {
        match self.entries.get(index).map(|entry| entry.finished) {
            Some(FinishedMark::Done) => PERMILLE_FULL,
            Some(FinishedMark::Active) => self.timer.permille(now_ms),
            Some(FinishedMark::NotReached) | None => 0,
        }
    }

    /// Natural size of the active media, once known.
    pub fn image_size(&self) -> Option<MediaSize> {
        self.image_size
    }

    pub fn image_height(&self) -> Option<u32> {
        self.image_size.map(|size| size.height)
    }

    /// Label for the swipe-up affordance; `None` when the active story has
    /// no action.
    pub fn swipe_label(&self) -> Option<&str> {
        let entry = self.active_entry()?;
        if !entry.activatable {
            return None;
        }
        Some(entry.label().unwrap_or(self.config.default_swipe_label))
    }

    /// Media of the stories around the active one.
    pub fn prefetch_window(&self) -> Vec<&M, PREFETCH_SLOTS> {
        let mut window = Vec::new();
        if self.entries.is_empty() {
            return window;
        }

        let active = self.active_index as usize;
        let first = active.saturating_sub(PREFETCH_RADIUS);
        let last = (active + PREFETCH_RADIUS).min(self.entries.len() - 1);
        for index in (first..=last).filter(|index| *index != active) {
            let pushed = window.push(&self.entries[index].media);
            debug_assert!(pushed.is_ok(), "prefetch window exceeds PREFETCH_SLOTS");
        }
        window
    }

    /// Hands out the media request queued by the last index change.
    pub fn take_media_request(&mut self) -> Option<MediaRequest<M>> {
        self.media_request.take()
    }

    /// Polls the timer; a natural completion advances playback.
    pub fn tick<O>(&mut self, now_ms: u64, observer: &mut O) -> bool
    where
        O: NavigationObserver<M>,
    {
        let Some(completion) = self.timer.poll(now_ms) else {
            return false;
        };

        debug!(
            "story-timer: run={} completed index={}",
            completion.run, self.active_index
        );
        self.advance(now_ms, observer);
        true
    }

    fn derive_marks(&mut self) {
        let active = self.active_index as usize;
        let closed = self.closed;
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.finished = if closed || index > active {
                FinishedMark::NotReached
            } else if index < active {
                FinishedMark::Done
            } else {
                FinishedMark::Active
            };
        }
    }

    fn start_timer(&mut self, now_ms: u64) {
        self.timer.start(self.config.duration_ms, now_ms);
        if self.suspended {
            self.timer.pause(now_ms);
        }
    }

    fn queue_media_request(&mut self) {
        self.media_request = self.active_entry().map(|entry| MediaRequest {
            index: self.active_index,
            media: entry.media.clone(),
        });
    }
}

include!("navigation.rs");
include!("external.rs");

#[cfg(test)]
mod tests;
