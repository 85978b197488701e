//! Bar layout templates.
//!
//! Layouts are written with named fields such as `{desc}` or
//! `{percentage:3.0f}` and translated to indicatif's template keys. The
//! default layout is expressed in the same vocabulary.

use crate::config::ProgressConfig;
use crate::error::{ProgressError, Result};

const LAYOUT_TOTAL: &str =
    "{percentage:3.0f}%|{bar}| {n_fmt}/{total_fmt} [{elapsed}<{remaining}, {rate_fmt}{postfix}]";

const LAYOUT_OPEN: &str = "{n_fmt} [{elapsed}, {rate_fmt}{postfix}]";

/// The layout used when a config carries no `bar_format`.
pub fn default_layout(config: &ProgressConfig) -> String {
    let body = if config.total.is_some() {
        LAYOUT_TOTAL
    } else {
        LAYOUT_OPEN
    };
    match config.desc {
        Some(_) => format!("{{desc}}: {body}"),
        None => body.to_string(),
    }
}

/// Translates a layout into an indicatif template string.
pub fn translate(layout: &str) -> Result<String> {
    let mut out = String::with_capacity(layout.len() + 16);
    let mut rest = layout;
    let mut offset = 0;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('}') else {
            return Err(ProgressError::Unterminated(offset + open));
        };
        let field = &rest[open + 1..open + close];
        out.push_str(&key(field)?);

        let consumed = open + close + 1;
        rest = &rest[consumed..];
        offset += consumed;
    }
    out.push_str(rest);

    Ok(out)
}

fn key(field: &str) -> Result<String> {
    let (name, spec) = match field.split_once(':') {
        Some((name, spec)) => (name, Some(spec)),
        None => (field, None),
    };

    let key = match name {
        "desc" => "{prefix}",
        "bar" => "{wide_bar}",
        "n" => "{pos}",
        "total" => "{len}",
        "n_fmt" => "{n_fmt}",
        "total_fmt" => "{total_fmt}",
        "rate_fmt" => "{rate_fmt}",
        "unit" => "{unit}",
        "elapsed" => "{elapsed_precise}",
        "remaining" => "{eta_precise}",
        "postfix" => "{msg}",
        "spinner" => "{spinner}",
        "percentage" => return Ok(percent(spec)),
        _ => return Err(ProgressError::UnknownField(field.to_string())),
    };

    Ok(key.to_string())
}

// Only the width of a numeric spec survives; indicatif prints whole percents.
fn percent(spec: Option<&str>) -> String {
    let width: String = spec
        .unwrap_or_default()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    if width.is_empty() {
        "{percent}".to_string()
    } else {
        format!("{{percent:>{width}}}")
    }
}
