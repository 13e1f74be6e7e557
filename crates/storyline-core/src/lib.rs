#![cfg_attr(not(test), no_std)]

//! Playback core for timed story carousels.
//!
//! The crate is driven entirely by the host: every operation that depends on
//! time takes a monotonic `now_ms`, and collaborators (input, media) are
//! polled from [`app::StoryViewer::tick`].

pub mod app;
pub mod config;
pub mod input;
pub mod media;
pub mod playback;
pub mod render;
pub mod story;
pub mod timer;
