//! Presentation helpers exposed to the templates as filters.

use chrono::{DateTime, Utc};
use minijinja::{Error, ErrorKind};

/// Color used for unknown or unlisted languages.
pub const DEFAULT_LANG_COLOR: &str = "#8b949e";

const LANG_COLORS: &[(&str, &str)] = &[
    ("Go", "#00ADD8"),
    ("Python", "#3572A5"),
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#3178c6"),
    ("Rust", "#dea584"),
    ("Ruby", "#701516"),
    ("Java", "#b07219"),
    ("C", "#555555"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
    ("Swift", "#F05138"),
    ("Kotlin", "#A97BFF"),
    ("Shell", "#89e051"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Vim Script", "#199f4b"),
    ("Lua", "#000080"),
    ("Zig", "#ec915c"),
];

/// Swatch color for a language label.
pub fn lang_color(language: &str) -> &'static str {
    LANG_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANG_COLOR)
}

/// Compact counter: `1500` -> `1.5k`, `999` -> `999`.
pub fn format_num(n: u64) -> String {
    if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}

/// Coarse relative age of `then` as seen from `now`, e.g. `3d ago`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).max(chrono::Duration::zero());
    let hours = elapsed.num_hours();
    let days = hours / 24;
    match hours {
        h if h < 1 => format!("{}m ago", elapsed.num_minutes()),
        h if h < 24 => format!("{h}h ago"),
        _ if days < 30 => format!("{days}d ago"),
        _ if days < 365 => format!("{}mo ago", days / 30),
        _ => format!("{}y ago", days / 365),
    }
}

pub(crate) fn time_ago_filter(value: &str) -> Result<String, Error> {
    let then = DateTime::parse_from_rfc3339(value).map_err(|e| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("time_ago expects an RFC 3339 timestamp, got {value:?}: {e}"),
        )
    })?;
    Ok(time_ago(then.with_timezone(&Utc), Utc::now()))
}

pub(crate) fn format_num_filter(n: u64) -> String {
    format_num(n)
}

pub(crate) fn lang_color_filter(language: &str) -> String {
    lang_color(language).to_string()
}
