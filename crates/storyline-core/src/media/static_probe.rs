use heapless::Deque;
use log::debug;

use super::{MediaError, MediaEvent, MediaProbe, MediaRequest, MediaSize, SizeReport};

const EVENT_QUEUE_LEN: usize = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StaticProbeError {
    QueueFull,
}

/// In-memory probe backed by a fixed size table. Every request resolves on
/// the next poll: load start, load end, then size (or a failure when the
/// media is not in the table).
#[derive(Debug)]
pub struct StaticMediaProbe<'a, M> {
    sizes: &'a [(M, MediaSize)],
    pending: Deque<MediaEvent, EVENT_QUEUE_LEN>,
}

impl<'a, M> StaticMediaProbe<'a, M>
where
    M: PartialEq,
{
    pub fn new(sizes: &'a [(M, MediaSize)]) -> Self {
        Self {
            sizes,
            pending: Deque::new(),
        }
    }

    fn size_of(&self, media: &M) -> Option<MediaSize> {
        self.sizes
            .iter()
            .find(|(candidate, _)| candidate == media)
            .map(|(_, size)| *size)
    }

    fn enqueue(&mut self, event: MediaEvent) -> Result<(), StaticProbeError> {
        self.pending
            .push_back(event)
            .map_err(|_| StaticProbeError::QueueFull)
    }
}

impl<M> MediaProbe<M> for StaticMediaProbe<'_, M>
where
    M: PartialEq,
{
    type Error = StaticProbeError;

    fn request(&mut self, request: MediaRequest<M>) -> Result<(), Self::Error> {
        let index = request.index;
        let result = self
            .size_of(&request.media)
            .ok_or(MediaError::SizeUnavailable);
        debug!(
            "story-media: static request index={} known={}",
            index,
            result.is_ok()
        );

        self.enqueue(MediaEvent::LoadStarted { index })?;
        self.enqueue(MediaEvent::LoadFinished { index })?;
        self.enqueue(MediaEvent::Size(SizeReport { index, result }))
    }

    fn poll_event(&mut self) -> Result<Option<MediaEvent>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}
