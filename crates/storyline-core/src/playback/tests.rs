use super::*;
use crate::media::MediaError;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Call {
    Advanced(u16),
    Rewound(u16),
    Finished(Direction),
    Activated(u16),
    CloseRequested(Option<char>),
}

#[derive(Default)]
struct RecordingObserver {
    calls: std::vec::Vec<Call>,
    advanced_media: std::vec::Vec<char>,
}

impl NavigationObserver<char> for RecordingObserver {
    fn on_advanced(&mut self, entry: &PlaybackEntry<char>, index: u16) {
        self.advanced_media.push(entry.media);
        self.calls.push(Call::Advanced(index));
    }

    fn on_rewound(&mut self, _entry: &PlaybackEntry<char>, index: u16) {
        self.calls.push(Call::Rewound(index));
    }

    fn on_finished(&mut self, direction: Direction) {
        self.calls.push(Call::Finished(direction));
    }

    fn on_activate(&mut self, _entry: &PlaybackEntry<char>, index: u16) {
        self.calls.push(Call::Activated(index));
    }

    fn on_close_requested(&mut self, entry: Option<&PlaybackEntry<char>>) {
        self.calls.push(Call::CloseRequested(entry.map(|entry| entry.media)));
    }
}

use FinishedMark::{Active, Done, NotReached};

fn items(media: &str) -> impl Iterator<Item = StoryItem<char>> + '_ {
    media.chars().map(StoryItem::new)
}

fn marks(controller: &PlaybackController<char>) -> std::vec::Vec<FinishedMark> {
    controller.entries().iter().map(|entry| entry.finished).collect()
}

fn playing(media: &str, last_seen: Option<u16>) -> PlaybackController<char> {
    let config = StoryConfig::default()
        .with_duration_ms(1_000)
        .with_wait_for_media(false);
    let mut controller = PlaybackController::new(config);
    controller.replace_items(items(media));
    controller.on_page_changed(0, last_seen, 0);
    controller
}

#[test]
fn page_change_marks_entries_up_to_last_seen() {
    let controller = playing("ABC", Some(1));

    assert_eq!(controller.active_index(), Some(1));
    assert_eq!(marks(&controller), [Done, Active, NotReached]);
    assert_eq!(controller.state(), PlaybackState::Playing);
    assert!(controller.timer().is_running());
}

#[test]
fn last_seen_past_the_end_is_clamped() {
    let controller = playing("AB", Some(9));

    assert_eq!(controller.active_index(), Some(1));
    assert_eq!(marks(&controller), [Done, Active]);
}

#[test]
fn advance_moves_forward_and_notifies() {
    let mut controller = playing("AB", None);
    let mut observer = RecordingObserver::default();

    controller.advance(100, &mut observer);

    assert_eq!(controller.active_index(), Some(1));
    assert_eq!(marks(&controller), [Done, Active]);
    assert_eq!(observer.calls, [Call::Advanced(1)]);
    assert_eq!(observer.advanced_media, ['B']);
    assert_eq!(controller.segment_fill(1, 100), 0);
    assert_eq!(controller.segment_fill(0, 100), PERMILLE_FULL);
}

#[test]
fn advancing_past_the_last_story_closes_with_next() {
    let mut controller = playing("ABC", None);
    let mut observer = RecordingObserver::default();

    controller.advance(0, &mut observer);
    controller.advance(0, &mut observer);
    assert!(!controller.is_closed());
    assert!(!observer.calls.contains(&Call::Finished(Direction::Next)));

    controller.advance(0, &mut observer);

    assert!(controller.is_closed());
    assert_eq!(observer.calls.last(), Some(&Call::Finished(Direction::Next)));
    assert_eq!(marks(&controller), [NotReached, NotReached, NotReached]);
}

#[test]
fn single_story_advance_closes() {
    let mut controller = playing("A", None);
    let mut observer = RecordingObserver::default();

    controller.advance(0, &mut observer);

    assert_eq!(observer.calls, [Call::Finished(Direction::Next)]);
    assert_eq!(marks(&controller), [NotReached]);
    assert_eq!(controller.state(), PlaybackState::Closed);
    assert_eq!(controller.timer().deadline_ms(), None);
}

#[test]
fn rewind_from_first_story_closes_with_previous() {
    let mut controller = playing("AB", None);
    let mut observer = RecordingObserver::default();

    controller.rewind(0, &mut observer);

    assert_eq!(observer.calls, [Call::Finished(Direction::Previous)]);
    assert_eq!(marks(&controller), [NotReached, NotReached]);
}

#[test]
fn rewind_forfeits_progress_of_the_story_left() {
    let mut controller = playing("ABC", Some(2));
    let mut observer = RecordingObserver::default();

    controller.rewind(10, &mut observer);

    assert_eq!(controller.active_index(), Some(1));
    assert_eq!(marks(&controller), [Done, Active, NotReached]);
    assert_eq!(observer.calls, [Call::Rewound(1)]);
}

#[test]
fn background_page_closes_silently() {
    let config = StoryConfig::default().with_duration_ms(1_000);
    let mut controller = PlaybackController::new(config).with_page_index(2);
    controller.replace_items(items("A"));
    controller.on_page_changed(1, None, 0);
    let mut observer = RecordingObserver::default();

    controller.advance(0, &mut observer);

    assert!(controller.is_closed());
    assert!(observer.calls.is_empty());
}

#[test]
fn closed_list_ignores_navigation_until_next_page_change() {
    let mut controller = playing("AB", Some(1));
    let mut observer = RecordingObserver::default();
    controller.advance(0, &mut observer);
    observer.calls.clear();

    controller.advance(0, &mut observer);
    controller.rewind(0, &mut observer);
    assert!(observer.calls.is_empty());

    controller.on_page_changed(0, Some(1), 50);
    assert_eq!(controller.state(), PlaybackState::Playing);
    assert_eq!(marks(&controller), [Done, Active]);
}

#[test]
fn timer_completion_advances_once() {
    let mut controller = playing("AB", None);
    let mut observer = RecordingObserver::default();

    assert!(!controller.tick(999, &mut observer));
    assert!(controller.tick(1_000, &mut observer));
    assert!(!controller.tick(1_001, &mut observer));

    assert_eq!(observer.calls, [Call::Advanced(1)]);
    assert_eq!(controller.timer().deadline_ms(), Some(2_000));
}

#[test]
fn suspended_playback_never_completes() {
    let mut controller = playing("AB", None);
    let mut observer = RecordingObserver::default();

    controller.suspend(400);
    assert_eq!(controller.state(), PlaybackState::Suspended);
    assert!(controller.timer().is_paused());
    assert!(!controller.tick(60_000, &mut observer));
    assert!(observer.calls.is_empty());

    controller.unsuspend(60_000);
    assert!(!controller.tick(60_599, &mut observer));
    assert!(controller.tick(60_600, &mut observer));
}

#[test]
fn taps_are_ignored_while_suspended_or_loading() {
    let mut controller = playing("AB", None);
    let mut observer = RecordingObserver::default();

    controller.suspend(0);
    assert!(!controller.tap_next(0, &mut observer));
    controller.unsuspend(0);

    controller.on_image_loading(0);
    assert!(!controller.tap_next(0, &mut observer));
    assert!(!controller.tap_previous(0, &mut observer));
    assert!(observer.calls.is_empty());

    controller.on_image_ready(0, 10);
    assert!(controller.tap_next(10, &mut observer));
    assert_eq!(observer.calls, [Call::Advanced(1)]);
}

#[test]
fn navigation_waits_for_media_before_starting_timer() {
    let mut controller = PlaybackController::new(StoryConfig::default().with_duration_ms(1_000));
    controller.replace_items(items("AB"));
    controller.on_page_changed(0, None, 0);
    let mut observer = RecordingObserver::default();

    controller.advance(100, &mut observer);
    assert_eq!(controller.state(), PlaybackState::Loading);
    assert!(!controller.timer().is_running());
    assert!(!controller.tick(50_000, &mut observer));

    controller.on_image_ready(1, 50_000);
    assert_eq!(controller.state(), PlaybackState::Playing);
    assert_eq!(controller.timer().deadline_ms(), Some(51_000));
}

#[test]
fn duplicate_media_restarts_timer_without_waiting_for_load() {
    let mut controller = PlaybackController::new(StoryConfig::default().with_duration_ms(1_000));
    controller.replace_items(items("AAB"));
    controller.on_page_changed(0, None, 0);
    let mut observer = RecordingObserver::default();

    controller.advance(700, &mut observer);

    assert!(!controller.is_loading());
    assert_eq!(controller.timer().permille(700), 0);
    assert_eq!(controller.timer().deadline_ms(), Some(1_700));
}

#[test]
fn duplicate_media_on_rewind_restarts_timer_without_waiting_for_load() {
    let mut controller = PlaybackController::new(StoryConfig::default().with_duration_ms(1_000));
    controller.replace_items(items("BAA"));
    controller.on_page_changed(0, Some(2), 0);
    let mut observer = RecordingObserver::default();

    controller.rewind(300, &mut observer);

    assert_eq!(controller.active_index(), Some(1));
    assert!(!controller.is_loading());
    assert_eq!(marks(&controller), [Done, Active, NotReached]);
    assert_eq!(controller.timer().permille(300), 0);
    assert_eq!(controller.timer().deadline_ms(), Some(1_300));
    assert_eq!(observer.calls, [Call::Rewound(1)]);
}

#[test]
fn page_change_releases_a_hold() {
    let mut controller = playing("AB", None);
    let mut observer = RecordingObserver::default();
    controller.suspend(100);

    controller.on_page_changed(0, None, 200);

    assert_eq!(controller.state(), PlaybackState::Playing);
    assert!(controller.timer().is_running());
    assert_eq!(controller.timer().deadline_ms(), Some(1_200));
    assert!(controller.tick(1_200, &mut observer));
    assert_eq!(observer.calls, [Call::Advanced(1)]);
}

#[test]
fn close_during_hold_clears_suspension() {
    let mut controller = playing("AB", None);
    let mut observer = RecordingObserver::default();
    controller.suspend(100);

    controller.close(Direction::Next, &mut observer);

    assert_eq!(controller.state(), PlaybackState::Closed);
    assert!(!controller.is_suspended());
    assert_eq!(observer.calls, [Call::Finished(Direction::Next)]);
}

#[test]
fn items_change_keeps_index_and_clamps_after_shrink() {
    let mut controller = playing("ABCD", Some(3));
    let deadline = controller.timer().deadline_ms();

    let result = controller.replace_items(items("ABCDE"));
    assert_eq!(result, ItemsLoadResult { loaded: 5, truncated: false });
    assert_eq!(controller.active_index(), Some(3));
    assert_eq!(controller.timer().deadline_ms(), deadline);

    controller.replace_items(items("AB"));
    assert_eq!(controller.active_index(), Some(1));
    assert_eq!(marks(&controller), [Done, Active]);
    assert_eq!(controller.timer().deadline_ms(), deadline);
}

#[test]
fn oversized_list_is_truncated() {
    let mut controller = PlaybackController::new(StoryConfig::default());
    let result = controller.replace_items((0..MAX_STORY_ITEMS + 3).map(|_| StoryItem::new('x')));

    assert_eq!(
        result,
        ItemsLoadResult {
            loaded: MAX_STORY_ITEMS as u16,
            truncated: true
        }
    );
}

#[test]
fn empty_list_is_inert() {
    let mut controller = playing("AB", None);
    let mut observer = RecordingObserver::default();

    controller.replace_items(core::iter::empty());
    controller.advance(0, &mut observer);
    controller.rewind(0, &mut observer);
    controller.swipe_up(&mut observer);

    assert_eq!(controller.state(), PlaybackState::Empty);
    assert_eq!(controller.active_index(), None);
    assert!(!controller.tick(100_000, &mut observer));
    assert!(observer.calls.is_empty());
}

#[test]
fn stale_size_report_is_ignored() {
    let mut controller = playing("AB", None);
    let mut observer = RecordingObserver::default();
    controller.on_image_size(SizeReport {
        index: 0,
        result: Ok(MediaSize::new(100, 200)),
    });
    controller.advance(0, &mut observer);

    controller.on_image_size(SizeReport {
        index: 0,
        result: Ok(MediaSize::new(100, 900)),
    });
    assert_eq!(controller.image_height(), Some(200));

    controller.on_image_size(SizeReport {
        index: 1,
        result: Err(MediaError::SizeUnavailable),
    });
    assert_eq!(controller.image_height(), Some(200));
}

#[test]
fn every_index_change_queues_one_media_request() {
    let mut controller = playing("ABC", None);
    let mut observer = RecordingObserver::default();

    assert_eq!(
        controller.take_media_request(),
        Some(MediaRequest { index: 0, media: 'A' })
    );
    assert_eq!(controller.take_media_request(), None);

    controller.advance(0, &mut observer);
    assert_eq!(
        controller.take_media_request(),
        Some(MediaRequest { index: 1, media: 'B' })
    );
}

#[test]
fn swipe_up_activates_and_optionally_closes() {
    let mut controller = PlaybackController::new(
        StoryConfig::default()
            .with_close_on_swipe_up(true)
            .with_wait_for_media(false),
    );
    controller.replace_items([
        StoryItem::new('A').with_action(),
        StoryItem::new('B').with_swipe_label("Shop now"),
    ]);
    controller.on_page_changed(0, None, 0);
    let mut observer = RecordingObserver::default();

    assert_eq!(controller.swipe_label(), Some("Swipe Up"));
    controller.swipe_up(&mut observer);
    assert_eq!(
        observer.calls,
        [Call::CloseRequested(Some('A')), Call::Activated(0)]
    );

    controller.advance(0, &mut observer);
    assert_eq!(controller.swipe_label(), None);
}

#[test]
fn prefetch_window_covers_two_neighbours_each_side() {
    let controller = playing("ABCDEF", Some(2));
    let window: std::vec::Vec<char> = controller.prefetch_window().iter().map(|m| **m).collect();
    assert_eq!(window, ['A', 'B', 'D', 'E']);

    let controller = playing("AB", None);
    let window: std::vec::Vec<char> = controller.prefetch_window().iter().map(|m| **m).collect();
    assert_eq!(window, ['B']);
}
