//! Outer carousel: one story list per user, switched on finish.

use log::info;
use storyline_core::{
    app::StoryViewer,
    media::StaticMediaProbe,
    playback::{Direction, NavigationObserver},
    story::PlaybackEntry,
};

use crate::{Media, script::TimedInput};

pub type UserViewer =
    StoryViewer<Media, TimedInput, StaticMediaProbe<'static, Media>, CarouselObserver>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CarouselCommand {
    NextPage,
    PreviousPage,
    Dismiss,
}

/// Collects the outcome of one viewer tick for the carousel to act on.
#[derive(Debug)]
pub struct CarouselObserver {
    user: &'static str,
    command: Option<CarouselCommand>,
    last_seen: u16,
}

impl CarouselObserver {
    pub fn new(user: &'static str) -> Self {
        Self {
            user,
            command: None,
            last_seen: 0,
        }
    }

    pub fn take_command(&mut self) -> Option<CarouselCommand> {
        self.command.take()
    }
}

impl NavigationObserver<Media> for CarouselObserver {
    fn on_advanced(&mut self, entry: &PlaybackEntry<Media>, index: u16) {
        info!("story: {} advanced to #{} {}", self.user, index, entry.media);
        self.last_seen = index;
    }

    fn on_rewound(&mut self, entry: &PlaybackEntry<Media>, index: u16) {
        info!("story: {} rewound to #{} {}", self.user, index, entry.media);
        self.last_seen = index;
    }

    fn on_finished(&mut self, direction: Direction) {
        info!("story: {} finished direction={}", self.user, direction.as_str());
        if direction == Direction::Next {
            self.last_seen = 0;
        }
        self.command = Some(match direction {
            Direction::Next => CarouselCommand::NextPage,
            Direction::Previous => CarouselCommand::PreviousPage,
        });
    }

    fn on_activate(&mut self, entry: &PlaybackEntry<Media>, index: u16) {
        info!(
            "story: {} opened action of #{} label={:?}",
            self.user,
            index,
            entry.label()
        );
    }

    fn on_close_requested(&mut self, entry: Option<&PlaybackEntry<Media>>) {
        info!(
            "story: {} close requested from={:?}",
            self.user,
            entry.map(|entry| entry.media)
        );
        self.command = Some(CarouselCommand::Dismiss);
    }
}

pub struct Carousel {
    pages: Vec<UserViewer>,
    current: u16,
}

impl Carousel {
    pub fn new(pages: Vec<UserViewer>) -> Self {
        Self { pages, current: 0 }
    }

    pub fn current(&self) -> u16 {
        self.current
    }

    pub fn current_mut(&mut self) -> Option<&mut UserViewer> {
        self.pages.get_mut(self.current as usize)
    }

    /// Every list hears about the switch; only the new current one will
    /// report finishing.
    pub fn switch_to(&mut self, page: u16, now_ms: u64) {
        self.current = page;
        for viewer in self.pages.iter_mut() {
            let last_seen = viewer.observer().last_seen;
            viewer.on_page_changed(page, Some(last_seen), now_ms);
        }
        info!("carousel: page {}/{}", page + 1, self.pages.len());
    }

    /// Applies a command; returns `false` once the session is over.
    pub fn apply(&mut self, command: CarouselCommand, now_ms: u64) -> bool {
        match command {
            CarouselCommand::NextPage => {
                let next = self.current + 1;
                if next as usize >= self.pages.len() {
                    return false;
                }
                self.switch_to(next, now_ms);
                true
            }
            CarouselCommand::PreviousPage => {
                if self.current == 0 {
                    return false;
                }
                self.switch_to(self.current - 1, now_ms);
                true
            }
            CarouselCommand::Dismiss => false,
        }
    }
}
