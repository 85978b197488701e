//! Illustrative loops run from the menu.

pub mod advanced;
pub mod basic;

use pacer_progress::{ProgressConfig, Renderer};

use crate::pace::Pace;

const RULE_WIDTH: usize = 50;

/// What every demo routine needs: where to draw, how fast to go and the
/// base bar config each acquisition starts from.
pub struct Demo<'a, R: Renderer> {
    pub renderer: &'a R,
    pub pace: Pace,
    ascii: bool,
}

impl<'a, R: Renderer> Demo<'a, R> {
    pub fn new(renderer: &'a R, pace: Pace) -> Self {
        Self {
            renderer,
            pace,
            ascii: false,
        }
    }

    pub fn ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    pub fn config(&self) -> ProgressConfig {
        ProgressConfig::new().ascii(self.ascii)
    }

    pub fn line(&self, text: &str) {
        self.renderer.write(text);
    }

    fn section(&self, n: usize, title: &str) {
        self.line(&format!("\n{n}. {title}"));
        self.line(&"-".repeat(RULE_WIDTH));
    }

    fn banner(&self, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        self.line(&rule);
        self.line(title);
        self.line(&rule);
    }

    fn footer(&self, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        self.line(&format!("\n{rule}"));
        self.line(title);
        self.line(&rule);
    }
}
