//! Progress displays configured per acquisition.
//!
//! A [`Renderer`] hands out [`Tracker`]s for a [`ProgressConfig`]. [`Console`]
//! draws with indicatif; [`Recorder`] only records events, for headless runs
//! and tests. [`Renderer::track`] wraps any iterator so that each completed
//! element advances a tracker that is finished when the iterator runs out or
//! the adapter goes out of scope.

mod config;
mod console;
mod error;
mod postfix;
mod record;
mod style;
mod template;
mod tracker;

pub use config::ProgressConfig;
pub use console::{Bar, Console};
pub use error::{ProgressError, Result};
pub use postfix::Postfix;
pub use record::{Event, RecordedBar, Recorder};
pub use template::{default_layout, translate};
pub use tracker::{Renderer, Tracked, Tracker};
