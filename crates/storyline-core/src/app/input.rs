impl<M, IN, MP, OB> StoryViewer<M, IN, MP, OB>
where
    M: Clone + PartialEq,
    IN: InputProvider,
    MP: MediaProbe<M>,
    OB: NavigationObserver<M>,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("story-input: provider error, dropping remaining events");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::PressIn(zone) => {
                self.press = Some(PressState { zone, held: false });
                self.controller.suspend(now_ms);
                self.pending_redraw = true;
            }
            InputEvent::LongPress => {
                if let Some(press) = self.press.as_mut() {
                    press.held = true;
                }
            }
            InputEvent::PressOut => {
                let Some(press) = self.press.take() else {
                    return;
                };
                self.controller.unsuspend(now_ms);
                self.pending_redraw = true;

                if press.held {
                    debug!("story-input: hold released zone={:?}", press.zone);
                    return;
                }
                match press.zone {
                    TapZone::Next => {
                        self.controller.tap_next(now_ms, &mut self.observer);
                    }
                    TapZone::Previous => {
                        self.controller.tap_previous(now_ms, &mut self.observer);
                    }
                }
            }
            InputEvent::SwipeUp => {
                self.cancel_press(now_ms);
                self.controller.swipe_up(&mut self.observer);
            }
            InputEvent::SwipeDown | InputEvent::ClosePressed => {
                self.cancel_press(now_ms);
                self.controller.request_close(&mut self.observer);
            }
        }
    }

    /// A swipe ends the press that started it without counting as a tap.
    fn cancel_press(&mut self, now_ms: u64) {
        if self.press.take().is_some() {
            self.controller.unsuspend(now_ms);
            self.pending_redraw = true;
        }
    }

    fn process_media(&mut self, now_ms: u64) {
        loop {
            match self.probe.poll_event() {
                Ok(Some(event)) => self.apply_media_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("story-media: probe error, dropping remaining events");
                    break;
                }
            }
        }
    }

    fn apply_media_event(&mut self, event: MediaEvent, now_ms: u64) {
        match event {
            MediaEvent::LoadStarted { index } => self.controller.on_image_loading(index),
            MediaEvent::LoadFinished { index } => self.controller.on_image_ready(index, now_ms),
            MediaEvent::Size(report) => self.controller.on_image_size(report),
        }
        self.pending_redraw = true;
    }

    fn dispatch_media_request(&mut self) {
        let Some(request) = self.controller.take_media_request() else {
            return;
        };

        let index = request.index;
        if self.probe.request(request).is_err() {
            warn!("story-media: request rejected index={}", index);
        }
    }
}
