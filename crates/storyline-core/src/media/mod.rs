//! Media collaborator: load progress and natural size of the active story.

mod static_probe;

pub use static_probe::{StaticMediaProbe, StaticProbeError};

/// Natural pixel size of a media item.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MediaSize {
    pub width: u32,
    pub height: u32,
}

impl MediaSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaError {
    /// Size lookup failed or the media could not be resolved.
    SizeUnavailable,
}

/// Issued once per active-index change, keyed by the index that asked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MediaRequest<M> {
    pub index: u16,
    pub media: M,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SizeReport {
    pub index: u16,
    pub result: Result<MediaSize, MediaError>,
}

/// Asynchronous notifications from the renderer/decoder side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaEvent {
    LoadStarted { index: u16 },
    LoadFinished { index: u16 },
    Size(SizeReport),
}

/// Polled media backend. Requests are fire-and-forget; answers come back
/// through [`poll_event`](Self::poll_event) whenever they are ready.
pub trait MediaProbe<M> {
    type Error;

    fn request(&mut self, request: MediaRequest<M>) -> Result<(), Self::Error>;

    fn poll_event(&mut self) -> Result<Option<MediaEvent>, Self::Error>;
}
