impl<M> PlaybackController<M>
where
    M: Clone + PartialEq,
{
    /// Rebuilds the entries from a fresh story list. The active index is kept
    /// when still valid and clamped otherwise; the timer is left alone.
    pub fn replace_items<I>(&mut self, items: I) -> ItemsLoadResult
    where
        I: IntoIterator<Item = StoryItem<M>>,
    {
        let previous_media = self.active_entry().map(|entry| entry.media.clone());

        self.entries.clear();
        let mut truncated = false;
        for item in items {
            if self.entries.push(PlaybackEntry::from(item)).is_err() {
                truncated = true;
                break;
            }
        }

        if self.entries.is_empty() {
            self.active_index = 0;
            self.loading = false;
            self.timer.reset();
            self.media_request = None;
            self.image_size = None;
            info!("story-items: list emptied page={}", self.page_index);
            return ItemsLoadResult {
                loaded: 0,
                truncated,
            };
        }

        let last = (self.entries.len() - 1) as u16;
        if self.active_index > last {
            debug!(
                "story-items: active index {} clamped to {}",
                self.active_index, last
            );
            self.active_index = last;
        }
        self.derive_marks();

        let active_media = self.active_entry().map(|entry| &entry.media);
        if previous_media.as_ref() != active_media {
            self.image_size = None;
            self.queue_media_request();
        }

        if truncated {
            warn!(
                "story-items: list truncated to {} entries page={}",
                MAX_STORY_ITEMS, self.page_index
            );
        }
        info!(
            "story-items: loaded={} active={} page={}",
            self.entries.len(),
            self.active_index,
            self.page_index
        );

        ItemsLoadResult {
            loaded: self.entries.len() as u16,
            truncated,
        }
    }

    /// The outer carousel switched pages. Restarts this list at `last_seen`
    /// (default 0) and records whether it is now the visible page.
    pub fn on_page_changed(&mut self, current_page: u16, last_seen: Option<u16>, now_ms: u64) {
        self.current_page = Some(current_page);
        self.closed = false;
        self.loading = false;
        // A hold does not survive the page switch.
        self.suspended = false;
        self.timer.reset();

        if self.entries.is_empty() {
            self.active_index = 0;
            debug!(
                "story-page: page={} current={} has no stories",
                self.page_index, current_page
            );
            return;
        }

        let last = (self.entries.len() - 1) as u16;
        let requested = last_seen.unwrap_or(0);
        if requested > last {
            debug!(
                "story-page: last seen {} clamped to {}",
                requested, last
            );
        }
        self.active_index = requested.min(last);
        self.derive_marks();
        self.start_timer(now_ms);
        self.queue_media_request();

        info!(
            "story-page: page={} current={} active={}/{}",
            self.page_index,
            current_page,
            self.active_index,
            self.entries.len()
        );
    }

    /// Press-and-hold started: freeze the timer.
    pub fn suspend(&mut self, now_ms: u64) {
        if self.suspended {
            return;
        }
        self.suspended = true;
        self.timer.pause(now_ms);
    }

    /// Hold released: continue where the timer froze.
    pub fn unsuspend(&mut self, now_ms: u64) {
        if !self.suspended {
            return;
        }
        self.suspended = false;
        self.timer.resume(now_ms);
    }

    /// The renderer began loading the media at `index`.
    pub fn on_image_loading(&mut self, index: u16) {
        if !self.is_active_index(index) || self.closed {
            debug!(
                "story-media: stale load start index={} active={}",
                index, self.active_index
            );
            return;
        }
        self.loading = true;
        self.timer.reset();
    }

    /// The media at `index` finished loading; its story starts from zero.
    pub fn on_image_ready(&mut self, index: u16, now_ms: u64) {
        if !self.is_active_index(index) || !self.loading {
            debug!(
                "story-media: ignored load end index={} active={} loading={}",
                index, self.active_index, self.loading
            );
            return;
        }
        self.loading = false;
        self.timer.reset();
        self.start_timer(now_ms);
    }

    /// Natural size answer for a previous media request. Answers for a story
    /// that is no longer active are dropped.
    pub fn on_image_size(&mut self, report: SizeReport) {
        if !self.is_active_index(report.index) {
            debug!(
                "story-media: stale size index={} active={}",
                report.index, self.active_index
            );
            return;
        }

        match report.result {
            Ok(size) => self.image_size = Some(size),
            Err(err) => warn!(
                "story-media: size lookup failed index={} err={:?}",
                report.index, err
            ),
        }
    }

    fn is_active_index(&self, index: u16) -> bool {
        !self.entries.is_empty() && index == self.active_index
    }
}
