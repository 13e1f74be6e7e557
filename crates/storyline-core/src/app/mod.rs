//! Story viewer: wires the playback controller to input, media and the
//! renderer for one story list.

use log::{debug, warn};

use crate::{
    config::StoryConfig,
    input::{InputEvent, InputProvider, TapZone},
    media::{MediaEvent, MediaProbe},
    playback::{NavigationObserver, PlaybackController},
    render::{AnimationKind, AnimationSpec, Screen},
    story::{ItemsLoadResult, MAX_STORY_ITEMS, PlaybackEntry, StoryItem, StoryProfile},
};

const ANIM_STORY_MS: u16 = 160;
const ANIM_PAGE_MS: u16 = 220;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct PressState {
    zone: TapZone,
    held: bool,
}

/// Position snapshot used to pick a transition after each tick step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Position {
    active: Option<u16>,
    closed: bool,
}

fn never_show_backdrop<M>(_entry: &PlaybackEntry<M>) -> bool {
    false
}

pub struct StoryViewer<M, IN, MP, OB>
where
    M: Clone + PartialEq,
    IN: InputProvider,
    MP: MediaProbe<M>,
    OB: NavigationObserver<M>,
{
    controller: PlaybackController<M>,
    input: IN,
    probe: MP,
    observer: OB,
    profile: StoryProfile<M>,
    show_backdrop: fn(&PlaybackEntry<M>) -> bool,
    press: Option<PressState>,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
    last_progress_slot: Option<u64>,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
