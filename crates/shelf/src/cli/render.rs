//! # Rendering
//!
//! Turns library types into terminal text. Every function returns a
//! `String`; printing is left to `commands.rs`.
//!
//! Two output modes:
//! - **Terminal**: aligned columns, colors (via `colored`, which honors
//!   `NO_COLOR`), relative timestamps.
//! - **JSON** (`--json`): the library types serialized as-is, so a page
//!   renders as `{"source": {...}}`.

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use shelfapp::model::{Label, Source, Tag};
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 32;
const TIME_WIDTH: usize = 14;

pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn labels(labels: &[Label]) -> String {
    if labels.is_empty() {
        return "No labels.".dimmed().to_string();
    }
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{:>3}. {}", i + 1, label.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tags(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "No tags.".dimmed().to_string();
    }
    tags.iter().map(tag_row).collect::<Vec<_>>().join("\n")
}

fn tag_row(tag: &Tag) -> String {
    format!(
        "{}  {}  {}  {}",
        tag.id.to_string().dimmed(),
        pad_to_width(&tag.name, NAME_WIDTH),
        tag.color,
        format_time_ago(tag.updated_at).dimmed()
    )
}

pub fn sources(sources: &[Source]) -> String {
    if sources.is_empty() {
        return "No sources.".dimmed().to_string();
    }
    sources.iter().map(source_row).collect::<Vec<_>>().join("\n")
}

fn source_row(source: &Source) -> String {
    format!(
        "{}  {}  {:>9}  {:>4}  {}",
        source.id.to_string().dimmed(),
        pad_to_width(&source.name, NAME_WIDTH),
        format!("{}/{}", source.n_fragments, source.n_pages),
        format_percent(source.completion),
        format_time_ago(source.updated_at).dimmed()
    )
}

/// Full view of one source.
pub fn source_detail(source: &Source) -> String {
    let tags = if source.tags.is_empty() {
        "-".to_string()
    } else {
        source.tags.join(", ")
    };
    [
        source.name.bold().to_string(),
        "--------------------------------".to_string(),
        format!("id         {}", source.id),
        format!(
            "progress   {} of {} pages ({})",
            source.n_fragments,
            source.n_pages,
            format_percent(source.completion)
        ),
        format!("tags       {}", tags),
        format!("created    {}", source.created_at.to_rfc3339()),
        format!("updated    {}", source.updated_at.to_rfc3339()),
    ]
    .join("\n")
}

/// Full view of one tag.
pub fn tag_detail(tag: &Tag) -> String {
    [
        tag.name.bold().to_string(),
        "--------------------------------".to_string(),
        format!("id         {}", tag.id),
        format!("color      {}", tag.color),
        format!("created    {}", tag.created_at.to_rfc3339()),
        format!("updated    {}", tag.updated_at.to_rfc3339()),
    ]
    .join("\n")
}

pub fn success(text: &str) -> String {
    text.green().to_string()
}

pub fn warning(text: &str) -> String {
    text.yellow().to_string()
}

/// One line per store notification under `--watch`.
pub fn watch_line(store: &str, len: usize) -> String {
    format!("[watch] {}: {} record{}", store, len, if len == 1 { "" } else { "s" })
        .dimmed()
        .to_string()
}

fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn pad_to_width(text: &str, width: usize) -> String {
    let current = text.width();
    if current >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - current))
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
