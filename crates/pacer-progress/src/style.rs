use std::fmt::Write;

use indicatif::{ProgressState, ProgressStyle};

use crate::config::ProgressConfig;
use crate::error::Result;
use crate::template;

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

const PB_CHARS_ASCII: &str = "#>-";

/// Builds the indicatif style for a config, using its `bar_format` when set.
pub fn build(config: &ProgressConfig) -> Result<ProgressStyle> {
    let layout = match &config.bar_format {
        Some(layout) => layout.clone(),
        None => template::default_layout(config),
    };
    with_layout(config, &layout)
}

/// Builds the style from the default layout, ignoring `bar_format`.
pub fn build_default(config: &ProgressConfig) -> Result<ProgressStyle> {
    with_layout(config, &template::default_layout(config))
}

fn with_layout(config: &ProgressConfig, layout: &str) -> Result<ProgressStyle> {
    let chars = if config.ascii { PB_CHARS_ASCII } else { PB_CHARS };

    let n_cfg = config.clone();
    let total_cfg = config.clone();
    let rate_cfg = config.clone();
    let unit = config.unit.clone();

    let style = ProgressStyle::with_template(&template::translate(layout)?)?
        .tick_chars(TICK)
        .progress_chars(chars)
        .with_key("n_fmt", move |state: &ProgressState, w: &mut dyn Write| {
            let _ = w.write_str(&n_cfg.format_count(state.pos()));
        })
        .with_key("total_fmt", move |state: &ProgressState, w: &mut dyn Write| {
            let total = match state.len() {
                Some(len) => total_cfg.format_count(len),
                None => "?".to_string(),
            };
            let _ = w.write_str(&total);
        })
        .with_key("rate_fmt", move |state: &ProgressState, w: &mut dyn Write| {
            let _ = w.write_str(&rate_cfg.format_rate(state.per_sec()));
        })
        .with_key("unit", move |_: &ProgressState, w: &mut dyn Write| {
            let _ = w.write_str(&unit);
        });

    Ok(style)
}
