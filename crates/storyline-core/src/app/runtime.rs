impl<M, IN, MP, OB> StoryViewer<M, IN, MP, OB>
where
    M: Clone + PartialEq,
    IN: InputProvider,
    MP: MediaProbe<M>,
    OB: NavigationObserver<M>,
{
    /// Runs one step: inputs, media events, pending media request, then the
    /// timer. Returns whether the screen should be redrawn.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        let before = self.position();

        self.process_inputs(now_ms);
        self.process_media(now_ms);
        self.dispatch_media_request();
        if self.controller.tick(now_ms, &mut self.observer) {
            self.pending_redraw = true;
        }

        self.note_transition(before, now_ms);

        let progress_changed = self.progress_slot_changed(now_ms);
        let rendered = if self.pending_redraw || progress_changed {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    /// Earliest time at which [`tick`](Self::tick) has something to do
    /// without new input.
    pub fn next_wake_ms(&self, now_ms: u64) -> Option<u64> {
        let frame = self.controller.config().progress_frame_ms as u64;
        let next_frame = (now_ms / frame + 1) * frame;

        let progress = self
            .controller
            .timer()
            .deadline_ms()
            .map(|deadline| deadline.min(next_frame));
        let animation = self
            .transition
            .filter(|anim| anim.frame(now_ms).is_some())
            .map(|anim| {
                let end = anim.start_ms + anim.duration_ms.max(1) as u64;
                end.min(next_frame)
            });

        match (progress, animation) {
            (Some(progress), Some(animation)) => Some(progress.min(animation)),
            (progress, animation) => progress.or(animation),
        }
    }

    fn position(&self) -> Position {
        Position {
            active: self.controller.active_index(),
            closed: self.controller.is_closed(),
        }
    }

    fn note_transition(&mut self, before: Position, now_ms: u64) {
        let after = self.position();
        if before == after || after.closed {
            return;
        }

        let kind = match (before.active, after.active) {
            (Some(previous), Some(current)) if current < previous => AnimationKind::SlideRight,
            (Some(_), Some(_)) => AnimationKind::SlideLeft,
            _ => AnimationKind::Fade,
        };
        self.start_transition(kind, now_ms, ANIM_STORY_MS);
        self.last_progress_slot = None;
        self.pending_redraw = true;
    }

    fn progress_slot_changed(&mut self, now_ms: u64) -> bool {
        if !self.controller.timer().is_running() {
            self.last_progress_slot = None;
            return false;
        }

        let slot = now_ms / self.controller.config().progress_frame_ms as u64;
        if self.last_progress_slot == Some(slot) {
            return false;
        }
        self.last_progress_slot = Some(slot);
        true
    }
}
