//! Host-side story session: a few users in an outer carousel, driven by a
//! simulated clock and a scripted gesture timeline.

use std::{cell::Cell, env, rc::Rc};

use env_logger::Env;
use log::{debug, info, warn};
use storyline_core::{
    app::{StoryViewer, TickResult},
    config::StoryConfig,
    media::{MediaSize, StaticMediaProbe},
    render::Screen,
    story::{StoryItem, StoryProfile},
    timer::PERMILLE_FULL,
};

use carousel::{Carousel, CarouselObserver, UserViewer};
use script::TimedInput;

#[path = "main/carousel.rs"]
mod carousel;
#[path = "main/script.rs"]
mod script;

type Media = &'static str;

const TICK_MS: u64 = 10;
const SESSION_LIMIT_MS: u64 = 180_000;
const DURATION_ENV: &str = "STORYLINE_DURATION_MS";
const CLOSE_ON_SWIPE_UP_ENV: &str = "STORYLINE_CLOSE_ON_SWIPE_UP";

static MEDIA_SIZES: [(Media, MediaSize); 5] = [
    ("ana-1.jpg", MediaSize::new(1080, 1920)),
    ("ana-2.jpg", MediaSize::new(1080, 1350)),
    ("ana-3.jpg", MediaSize::new(1080, 1920)),
    ("ben-1.jpg", MediaSize::new(1080, 1920)),
    ("cleo-1-wide.jpg", MediaSize::new(1920, 1080)),
];

struct UserStories {
    name: &'static str,
    avatar: Media,
    /// Media plus the swipe label of its action, if it has one.
    stories: &'static [(Media, Option<&'static str>)],
}

const USERS: [UserStories; 3] = [
    UserStories {
        name: "ana",
        avatar: "ana-avatar.jpg",
        stories: &[
            ("ana-1.jpg", None),
            ("ana-2.jpg", None),
            ("ana-2.jpg", None),
            ("ana-3.jpg", Some("Read more")),
        ],
    },
    UserStories {
        name: "ben",
        avatar: "ben-avatar.jpg",
        stories: &[("ben-1.jpg", None), ("ben-missing.jpg", None)],
    },
    UserStories {
        name: "cleo",
        avatar: "cleo-avatar.jpg",
        stories: &[("cleo-1-wide.jpg", Some(""))],
    },
];

fn story_config() -> StoryConfig {
    let mut config = StoryConfig::default();

    if let Ok(raw) = env::var(DURATION_ENV) {
        match raw.trim().parse::<u32>() {
            Ok(duration_ms) if duration_ms > 0 => config = config.with_duration_ms(duration_ms),
            _ => warn!("config: ignoring {}={:?}", DURATION_ENV, raw),
        }
    }
    if let Ok(raw) = env::var(CLOSE_ON_SWIPE_UP_ENV) {
        config = config.with_close_on_swipe_up(matches!(raw.trim(), "1" | "true" | "yes"));
    }

    config
}

fn build_viewer(
    page: u16,
    user: &UserStories,
    config: StoryConfig,
    input: TimedInput,
) -> UserViewer {
    let mut viewer = StoryViewer::new(
        config,
        StoryProfile::new(user.name, Some(user.avatar)),
        input,
        StaticMediaProbe::new(&MEDIA_SIZES),
        CarouselObserver::new(user.name),
    )
    .with_page_index(page)
    .with_backdrop_policy(|entry| entry.media.ends_with("-wide.jpg"));

    let items = user.stories.iter().map(|(media, action)| {
        let item = StoryItem::new(*media);
        match action {
            Some(label) => item.with_action().with_swipe_label(label),
            None => item,
        }
    });
    let loaded = viewer.replace_items(items);
    if loaded.truncated {
        warn!(
            "storyline: {} has more stories than fit, kept {}",
            user.name, loaded.loaded
        );
    }

    viewer
}

fn log_screen(viewer: &UserViewer, now_ms: u64) {
    viewer.with_screen(now_ms, |screen| match screen {
        Screen::Empty => debug!("render: t={} empty", now_ms),
        Screen::Story {
            profile_name,
            media,
            backdrop,
            loading,
            paused,
            segments,
            active_index,
            swipe_label,
            ..
        } => {
            let bars: String = segments
                .iter()
                .map(|fill| match *fill {
                    0 => '.',
                    PERMILLE_FULL => '#',
                    _ => '>',
                })
                .collect();
            debug!(
                "render: t={} {} [{}] #{} {} backdrop={} loading={} paused={} swipe={:?}",
                now_ms,
                profile_name,
                bars,
                active_index,
                media,
                backdrop.is_some(),
                loading,
                paused,
                swipe_label
            );
        }
    });
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = story_config();
    let clock = Rc::new(Cell::new(0u64));
    let input = TimedInput::scripted(clock.clone());
    let pages = USERS
        .iter()
        .enumerate()
        .map(|(page, user)| build_viewer(page as u16, user, config, input.clone()))
        .collect();
    let mut carousel = Carousel::new(pages);

    info!(
        "storyline: users={} duration_ms={} close_on_swipe_up={} wait_for_media={}",
        USERS.len(),
        config.duration_ms,
        config.close_on_swipe_up,
        config.wait_for_media
    );

    let mut now_ms = 0u64;
    carousel.switch_to(0, now_ms);

    while now_ms <= SESSION_LIMIT_MS {
        clock.set(now_ms);
        let Some(viewer) = carousel.current_mut() else {
            break;
        };

        if viewer.tick(now_ms) == TickResult::RenderRequested {
            log_screen(viewer, now_ms);
        }

        if let Some(command) = viewer.observer_mut().take_command()
            && !carousel.apply(command, now_ms)
        {
            info!(
                "storyline: session over t={} page={} command={:?}",
                now_ms,
                carousel.current(),
                command
            );
            return;
        }

        now_ms += TICK_MS;
    }

    warn!("storyline: session limit of {} ms reached", SESSION_LIMIT_MS);
}
