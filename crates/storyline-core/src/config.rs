//! Playback configuration supplied by the host screen.

pub const DEFAULT_DURATION_MS: u32 = 10_000;
pub const DEFAULT_SWIPE_LABEL: &str = "Swipe Up";
const DEFAULT_PROGRESS_FRAME_MS: u16 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StoryConfig {
    /// Time each story stays on screen.
    pub duration_ms: u32,
    /// Swipe-up also asks the host to close the viewer.
    pub close_on_swipe_up: bool,
    /// Label shown for activatable stories without their own label.
    pub default_swipe_label: &'static str,
    /// Hold the timer at zero until the renderer reports the media loaded.
    pub wait_for_media: bool,
    /// Redraw cadence while the progress bar is filling.
    pub progress_frame_ms: u16,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            close_on_swipe_up: false,
            default_swipe_label: DEFAULT_SWIPE_LABEL,
            wait_for_media: true,
            progress_frame_ms: DEFAULT_PROGRESS_FRAME_MS,
        }
    }
}

impl StoryConfig {
    pub const fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub const fn with_close_on_swipe_up(mut self, close_on_swipe_up: bool) -> Self {
        self.close_on_swipe_up = close_on_swipe_up;
        self
    }

    pub const fn with_default_swipe_label(mut self, label: &'static str) -> Self {
        self.default_swipe_label = label;
        self
    }

    pub const fn with_wait_for_media(mut self, wait_for_media: bool) -> Self {
        self.wait_for_media = wait_for_media;
        self
    }

    pub(crate) fn sanitized(mut self) -> Self {
        self.progress_frame_ms = self.progress_frame_ms.max(1);
        if self.default_swipe_label.is_empty() {
            self.default_swipe_label = DEFAULT_SWIPE_LABEL;
        }
        self
    }
}
