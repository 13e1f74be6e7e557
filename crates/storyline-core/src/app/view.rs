impl<M, IN, MP, OB> StoryViewer<M, IN, MP, OB>
where
    M: Clone + PartialEq,
    IN: InputProvider,
    MP: MediaProbe<M>,
    OB: NavigationObserver<M>,
{
    pub fn new(
        config: StoryConfig,
        profile: StoryProfile<M>,
        input: IN,
        probe: MP,
        observer: OB,
    ) -> Self {
        Self {
            controller: PlaybackController::new(config),
            input,
            probe,
            observer,
            profile,
            show_backdrop: never_show_backdrop::<M>,
            press: None,
            pending_redraw: true,
            transition: None,
            last_progress_slot: None,
        }
    }

    /// Position of this list inside the outer carousel.
    pub fn with_page_index(mut self, page_index: u16) -> Self {
        self.controller = self.controller.with_page_index(page_index);
        self
    }

    /// Predicate deciding whether the active story gets a blurred backdrop.
    pub fn with_backdrop_policy(mut self, show_backdrop: fn(&PlaybackEntry<M>) -> bool) -> Self {
        self.show_backdrop = show_backdrop;
        self
    }

    pub fn controller(&self) -> &PlaybackController<M> {
        &self.controller
    }

    pub fn observer(&self) -> &OB {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut OB {
        &mut self.observer
    }

    pub fn profile(&self) -> &StoryProfile<M> {
        &self.profile
    }

    pub fn replace_items<I>(&mut self, items: I) -> ItemsLoadResult
    where
        I: IntoIterator<Item = StoryItem<M>>,
    {
        let result = self.controller.replace_items(items);
        self.pending_redraw = true;
        result
    }

    pub fn on_page_changed(&mut self, current_page: u16, last_seen: Option<u16>, now_ms: u64) {
        self.press = None;
        self.controller.on_page_changed(current_page, last_seen, now_ms);
        if self.controller.is_current_page() {
            self.start_transition(AnimationKind::Fade, now_ms, ANIM_PAGE_MS);
        }
        self.last_progress_slot = None;
        self.pending_redraw = true;
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_, M>),
    {
        let (Some(active_index), Some(entry)) = (
            self.controller.active_index(),
            self.controller.active_entry(),
        ) else {
            f(Screen::Empty);
            return;
        };

        let mut segments = [0u16; MAX_STORY_ITEMS];
        let count = self.controller.entries().len();
        for (index, fill) in segments.iter_mut().take(count).enumerate() {
            *fill = self.controller.segment_fill(index, now_ms);
        }

        let prefetch = self.controller.prefetch_window();
        let backdrop = if (self.show_backdrop)(entry) {
            Some(&entry.media)
        } else {
            None
        };

        f(Screen::Story {
            profile_name: self.profile.name.as_str(),
            avatar: self.profile.avatar.as_ref(),
            media: &entry.media,
            backdrop,
            image_height: self.controller.image_height(),
            loading: self.controller.is_loading(),
            paused: self.controller.is_suspended(),
            segments: &segments[..count],
            active_index,
            swipe_label: self.controller.swipe_label(),
            prefetch: &prefetch,
            animation: self.transition_frame(now_ms),
        });
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<crate::render::AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }
}
