//! A renderer that records what would have been drawn.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::ProgressConfig;
use crate::postfix::Postfix;
use crate::tracker::{Renderer, Tracker, clip};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Acquire { id: usize, config: ProgressConfig },
    Step { id: usize, n: u64 },
    Postfix { id: usize, postfix: Postfix },
    Finish { id: usize, position: u64, leave: bool },
    Write(String),
}

#[derive(Debug, Default)]
struct Log {
    events: Vec<Event>,
    next_id: usize,
}

/// Records every acquisition, step, postfix, finish and written line.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Arc<Mutex<Log>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.log
            .lock()
            .map(|log| log.events.clone())
            .unwrap_or_default()
    }

    /// Configs of all acquired trackers, in acquisition order.
    pub fn acquired(&self) -> Vec<(usize, ProgressConfig)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Acquire { id, config } => Some((id, config)),
                _ => None,
            })
            .collect()
    }

    /// Step sizes applied to tracker `id`, after clipping.
    pub fn steps(&self, id: usize) -> Vec<u64> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Step { id: step_id, n } if step_id == id => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Write(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    /// Id of the first tracker acquired with the given description.
    pub fn find(&self, desc: &str) -> Option<usize> {
        self.acquired()
            .into_iter()
            .find(|(_, config)| config.desc.as_deref() == Some(desc))
            .map(|(id, _)| id)
    }

    pub fn is_empty(&self) -> bool {
        self.log.lock().map(|log| log.events.is_empty()).unwrap_or(true)
    }

    fn push(&self, event: Event) {
        if let Ok(mut log) = self.log.lock() {
            log.events.push(event);
        }
    }
}

impl Renderer for Recorder {
    type Tracker = RecordedBar;

    fn acquire(&self, config: ProgressConfig) -> RecordedBar {
        let id = match self.log.lock() {
            Ok(mut log) => {
                let id = log.next_id;
                log.next_id += 1;
                id
            }
            Err(_) => usize::MAX,
        };

        let bar = RecordedBar {
            id,
            total: config.total,
            leave: config.leave,
            position: AtomicU64::new(0),
            finished: AtomicBool::new(false),
            recorder: self.clone(),
        };
        self.push(Event::Acquire { id, config });
        bar
    }

    fn write(&self, text: &str) {
        self.push(Event::Write(text.to_string()));
    }
}

pub struct RecordedBar {
    id: usize,
    total: Option<u64>,
    leave: bool,
    position: AtomicU64,
    finished: AtomicBool,
    recorder: Recorder,
}

impl RecordedBar {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Tracker for RecordedBar {
    fn step(&self, n: u64) -> &Self {
        let n = clip(n, self.position(), self.total);
        self.position.fetch_add(n, Ordering::Relaxed);
        self.recorder.push(Event::Step { id: self.id, n });
        self
    }

    fn set_postfix(&self, postfix: Postfix) {
        self.recorder.push(Event::Postfix {
            id: self.id,
            postfix,
        });
    }

    fn position(&self) -> u64 {
        self.position.load(Ordering::Relaxed)
    }

    fn finish(&self) {
        if self.finished.swap(true, Ordering::Relaxed) {
            return;
        }
        self.recorder.push(Event::Finish {
            id: self.id,
            position: self.position(),
            leave: self.leave,
        });
    }
}

impl Drop for RecordedBar {
    fn drop(&mut self) {
        self.finish();
    }
}
