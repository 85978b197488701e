use crate::config::ProgressConfig;
use crate::postfix::Postfix;

/// A live progress display acquired from a [`Renderer`].
///
/// Implementations finish themselves when dropped, so a display is
/// finalized on every exit path of the scope that owns it.
pub trait Tracker {
    /// Advances by `n`, clipped so the position never passes a declared total.
    fn step(&self, n: u64) -> &Self;

    /// Replaces the postfix shown after the bar.
    fn set_postfix(&self, postfix: Postfix);

    fn position(&self) -> u64;

    /// Finalizes the display. Later calls have no effect.
    fn finish(&self);
}

/// Hands out trackers and writes lines without tearing the bars.
pub trait Renderer {
    type Tracker: Tracker;

    fn acquire(&self, config: ProgressConfig) -> Self::Tracker;

    /// Prints a line above the live bars.
    fn write(&self, text: &str);

    /// Wraps an iterator so each completed element advances a new tracker.
    ///
    /// When `config` declares no total, the iterator's exact size hint is used.
    fn track<I>(&self, iter: I, config: ProgressConfig) -> Tracked<I::IntoIter, Self::Tracker>
    where
        I: IntoIterator,
        Self: Sized,
    {
        let iter = iter.into_iter();
        let total = match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower as u64),
            _ => None,
        };
        let tracker = self.acquire(config.or_total(total));
        Tracked::new(iter, tracker)
    }
}

/// Iterator adapter that yields the inner elements unchanged.
///
/// An element counts once the caller comes back for the next one, so
/// breaking out of a loop leaves the interrupted element uncounted. The
/// tracker is finished when the inner iterator is exhausted, or when the
/// adapter is dropped.
pub struct Tracked<I, T: Tracker> {
    iter: I,
    tracker: T,
    pending: bool,
}

impl<I, T: Tracker> Tracked<I, T> {
    pub fn new(iter: I, tracker: T) -> Self {
        Self {
            iter,
            tracker,
            pending: false,
        }
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }
}

impl<I: Iterator, T: Tracker> Iterator for Tracked<I, T> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending {
            self.tracker.step(1);
            self.pending = false;
        }

        match self.iter.next() {
            Some(item) => {
                self.pending = true;
                Some(item)
            }
            None => {
                self.tracker.finish();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// The largest step from `position` that stays within `total`.
pub(crate) fn clip(n: u64, position: u64, total: Option<u64>) -> u64 {
    match total {
        Some(total) => n.min(total.saturating_sub(position)),
        None => n,
    }
}
