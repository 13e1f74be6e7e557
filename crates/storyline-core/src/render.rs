//! View models and transition metadata for the story renderer.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
    Fade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// Read-only snapshot handed to the renderer.
#[derive(Debug)]
pub enum Screen<'a, M> {
    /// No stories: nothing is drawn.
    Empty,
    Story {
        profile_name: &'a str,
        avatar: Option<&'a M>,
        media: &'a M,
        /// Blurred copy of the media behind it, when the host asks for one.
        backdrop: Option<&'a M>,
        image_height: Option<u32>,
        loading: bool,
        paused: bool,
        /// Fill per story in permille, in list order.
        segments: &'a [u16],
        active_index: u16,
        swipe_label: Option<&'a str>,
        prefetch: &'a [&'a M],
        animation: Option<AnimationFrame>,
    },
}
