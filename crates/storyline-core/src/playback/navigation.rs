impl<M> PlaybackController<M>
where
    M: Clone + PartialEq,
{
    /// Moves to the next story, or closes with [`Direction::Next`] from the
    /// last one.
    pub fn advance<O>(&mut self, now_ms: u64, observer: &mut O)
    where
        O: NavigationObserver<M>,
    {
        if self.entries.is_empty() || self.closed {
            debug!("story-nav: advance ignored state={:?}", self.state());
            return;
        }

        let current = self.active_index as usize;
        if current + 1 >= self.entries.len() {
            self.close(Direction::Next, observer);
            return;
        }

        self.entries[current].finished = FinishedMark::Done;
        let next = current + 1;
        self.move_to(next, now_ms);
        debug!(
            "story-nav: advanced {}->{} of {} loading={}",
            current,
            next,
            self.entries.len(),
            self.loading
        );
        observer.on_advanced(&self.entries[next], next as u16);
    }

    /// Moves to the previous story, or closes with [`Direction::Previous`]
    /// from the first one. The story being left loses its progress.
    pub fn rewind<O>(&mut self, now_ms: u64, observer: &mut O)
    where
        O: NavigationObserver<M>,
    {
        if self.entries.is_empty() || self.closed {
            debug!("story-nav: rewind ignored state={:?}", self.state());
            return;
        }

        let current = self.active_index as usize;
        if current == 0 {
            self.close(Direction::Previous, observer);
            return;
        }

        self.entries[current].finished = FinishedMark::NotReached;
        let previous = current - 1;
        self.move_to(previous, now_ms);
        debug!(
            "story-nav: rewound {}->{} of {} loading={}",
            current,
            previous,
            self.entries.len(),
            self.loading
        );
        observer.on_rewound(&self.entries[previous], previous as u16);
    }

    /// Clears every mark and stops the timer. The host only hears about it
    /// when this list is the visible page.
    pub fn close<O>(&mut self, direction: Direction, observer: &mut O)
    where
        O: NavigationObserver<M>,
    {
        for entry in self.entries.iter_mut() {
            entry.finished = FinishedMark::NotReached;
        }
        self.timer.reset();
        self.loading = false;
        self.suspended = false;
        self.closed = true;

        if self.is_current_page() {
            info!(
                "story-nav: finished page={} direction={}",
                self.page_index,
                direction.as_str()
            );
            observer.on_finished(direction);
        } else {
            debug!(
                "story-nav: closed background page={} current={:?} direction={}",
                self.page_index,
                self.current_page,
                direction.as_str()
            );
        }
    }

    /// Tap on the right half. Ignored while held, loading or closed.
    pub fn tap_next<O>(&mut self, now_ms: u64, observer: &mut O) -> bool
    where
        O: NavigationObserver<M>,
    {
        if !self.accepts_taps() {
            debug!("story-nav: tap next ignored state={:?}", self.state());
            return false;
        }
        self.advance(now_ms, observer);
        true
    }

    /// Tap on the left half. Ignored while held, loading or closed.
    pub fn tap_previous<O>(&mut self, now_ms: u64, observer: &mut O) -> bool
    where
        O: NavigationObserver<M>,
    {
        if !self.accepts_taps() {
            debug!("story-nav: tap previous ignored state={:?}", self.state());
            return false;
        }
        self.rewind(now_ms, observer);
        true
    }

    pub fn swipe_up<O>(&self, observer: &mut O)
    where
        O: NavigationObserver<M>,
    {
        let index = self.active_index;
        let Some(entry) = self.entries.get(index as usize) else {
            return;
        };

        if self.config.close_on_swipe_up {
            observer.on_close_requested(Some(entry));
        }
        if entry.activatable {
            debug!("story-nav: activate index={}", index);
            observer.on_activate(entry, index);
        }
    }

    /// Swipe-down and the close button both ask the host to dismiss.
    pub fn request_close<O>(&self, observer: &mut O)
    where
        O: NavigationObserver<M>,
    {
        observer.on_close_requested(None);
    }

    fn accepts_taps(&self) -> bool {
        !self.entries.is_empty() && !self.suspended && !self.loading && !self.closed
    }

    fn move_to(&mut self, index: usize, now_ms: u64) {
        let previous = self.active_index as usize;
        self.active_index = index as u16;
        self.entries[index].finished = FinishedMark::Active;
        self.timer.reset();

        // Identical media is not reloaded by the renderer, so no load event
        // will come to start the timer.
        let same_media = self.entries[previous].media == self.entries[index].media;
        if same_media || !self.config.wait_for_media {
            self.loading = false;
            self.start_timer(now_ms);
        } else {
            self.loading = true;
        }

        self.queue_media_request();
    }
}
