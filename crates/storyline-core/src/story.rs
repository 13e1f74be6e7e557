//! Story items supplied by the host and the playback entries derived from them.

use heapless::String;

pub const MAX_STORY_ITEMS: usize = 64;
pub const SWIPE_LABEL_BYTES: usize = 48;
pub const PROFILE_NAME_BYTES: usize = 48;

pub type SwipeLabel = String<SWIPE_LABEL_BYTES>;
pub type ProfileName = String<PROFILE_NAME_BYTES>;

/// Progress mark of a single story segment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FinishedMark {
    #[default]
    NotReached,
    Active,
    Done,
}

/// One story as supplied by the host. `M` is an opaque media handle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoryItem<M> {
    pub media: M,
    /// The host has an activation action for this story (swipe-up target).
    pub activatable: bool,
    pub swipe_label: Option<SwipeLabel>,
}

impl<M> StoryItem<M> {
    pub const fn new(media: M) -> Self {
        Self {
            media,
            activatable: false,
            swipe_label: None,
        }
    }

    pub fn with_action(mut self) -> Self {
        self.activatable = true;
        self
    }

    /// Stores the label, cut at the last char that fits.
    pub fn with_swipe_label(mut self, label: &str) -> Self {
        let (stored, truncated) = bounded_copy::<SWIPE_LABEL_BYTES>(label);
        if truncated {
            log::debug!(
                "story-item: swipe label truncated to {} bytes",
                SWIPE_LABEL_BYTES
            );
        }
        self.swipe_label = Some(stored);
        self
    }
}

/// Story item plus its derived progress mark. Owned by the controller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlaybackEntry<M> {
    pub media: M,
    pub activatable: bool,
    pub swipe_label: Option<SwipeLabel>,
    pub finished: FinishedMark,
}

impl<M> From<StoryItem<M>> for PlaybackEntry<M> {
    fn from(item: StoryItem<M>) -> Self {
        Self {
            media: item.media,
            activatable: item.activatable,
            swipe_label: item.swipe_label,
            finished: FinishedMark::NotReached,
        }
    }
}

impl<M> PlaybackEntry<M> {
    /// Own label, unless missing or empty.
    pub fn label(&self) -> Option<&str> {
        self.swipe_label
            .as_ref()
            .map(|label| label.as_str())
            .filter(|label| !label.is_empty())
    }
}

/// Owner of a story list, shown in the viewer header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoryProfile<M> {
    pub name: ProfileName,
    pub avatar: Option<M>,
}

impl<M> StoryProfile<M> {
    pub fn new(name: &str, avatar: Option<M>) -> Self {
        let (name, _) = bounded_copy::<PROFILE_NAME_BYTES>(name);
        Self { name, avatar }
    }
}

impl<M> Default for StoryProfile<M> {
    fn default() -> Self {
        Self {
            name: String::new(),
            avatar: None,
        }
    }
}

/// Outcome of replacing the story list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ItemsLoadResult {
    pub loaded: u16,
    pub truncated: bool,
}

fn bounded_copy<const N: usize>(text: &str) -> (String<N>, bool) {
    let mut out = String::<N>::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            return (out, true);
        }
    }
    (out, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_swipe_label_is_cut_on_char_boundary() {
        let label = "ñ".repeat(SWIPE_LABEL_BYTES);
        let item = StoryItem::new(0u8).with_swipe_label(&label);
        let stored = item.swipe_label.unwrap();

        assert_eq!(stored.len(), SWIPE_LABEL_BYTES);
        assert!(stored.chars().all(|ch| ch == 'ñ'));
    }

    #[test]
    fn empty_label_falls_back() {
        let entry = PlaybackEntry::from(StoryItem::new(1u8).with_swipe_label(""));
        assert_eq!(entry.label(), None);

        let entry = PlaybackEntry::from(StoryItem::new(1u8).with_swipe_label("Shop"));
        assert_eq!(entry.label(), Some("Shop"));
        assert_eq!(entry.finished, FinishedMark::NotReached);
    }
}
