use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use tracing::{debug, warn};

use crate::config::ProgressConfig;
use crate::postfix::Postfix;
use crate::style;
use crate::tracker::{Renderer, Tracker, clip};

/// Terminal renderer backed by an indicatif [`MultiProgress`].
///
/// Bars acquired while another is live stack underneath it, which is what
/// nested loops need.
pub struct Console {
    multi: MultiProgress,
}

impl Console {
    /// Draws on stderr.
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
        }
    }

    /// Tracks progress without drawing anything.
    pub fn hidden() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for Console {
    type Tracker = Bar;

    fn acquire(&self, config: ProgressConfig) -> Bar {
        let pb = match config.total {
            Some(total) => ProgressBar::new(total),
            None => ProgressBar::no_length(),
        };

        let pb = match style::build(&config) {
            Ok(style) => pb.with_style(style),
            Err(e) => {
                warn!(error = %e, "bar format rejected, using default layout");
                match style::build_default(&config) {
                    Ok(style) => pb.with_style(style),
                    Err(_) => pb,
                }
            }
        };

        let pb = self
            .multi
            .add(pb.with_prefix(config.desc.clone().unwrap_or_default()));

        debug!(desc = ?config.desc, total = ?config.total, leave = config.leave, "acquired bar");

        Bar {
            pb,
            leave: config.leave,
        }
    }

    fn write(&self, text: &str) {
        self.multi.suspend(|| println!("{text}"));
    }
}

/// One indicatif bar. Finishes on drop, keeping or clearing its line
/// according to the config it was acquired with.
pub struct Bar {
    pb: ProgressBar,
    leave: bool,
}

/// Read-only inspection of the underlying bar, for callers checking what a
/// hidden console would have drawn.
impl Bar {
    /// The declared total, if any.
    pub fn length(&self) -> Option<u64> {
        self.pb.length()
    }

    pub fn is_finished(&self) -> bool {
        self.pb.is_finished()
    }

    /// The rendered postfix, including its leading `", "`.
    pub fn message(&self) -> String {
        self.pb.message()
    }
}

impl Tracker for Bar {
    fn step(&self, n: u64) -> &Self {
        self.pb.inc(clip(n, self.pb.position(), self.pb.length()));
        self
    }

    fn set_postfix(&self, postfix: Postfix) {
        self.pb.set_message(postfix.suffix());
    }

    fn position(&self) -> u64 {
        self.pb.position()
    }

    fn finish(&self) {
        if self.pb.is_finished() {
            return;
        }
        if self.leave {
            self.pb.finish();
        } else {
            self.pb.finish_and_clear();
        }
        debug!(prefix = %self.pb.prefix(), position = self.pb.position(), "finished bar");
    }
}

impl Drop for Bar {
    fn drop(&mut self) {
        self.finish();
    }
}
