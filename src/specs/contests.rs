// src/specs/contests.rs
//! Scraping *spec* for the contest archive listing.
//!
//! Purpose:
//! - Parse the **remote HTML** of `/contests/archive` and extract one record
//!   per contest: slug, display name, start time, duration.
//! - Rows live in the first `<tbody>` (fall back to the first `<table>`):
//!   cell 1 holds a `<time>` element (`2021-03-06 15:00:00+0900`), cell 2 an
//!   anchor to `/contests/<slug>` whose text is the display name, cell 3 the
//!   duration as `H…H:MM` (long contests exceed two hour digits, e.g.
//!   `216:00`).
//!
//! Non-Responsibilities (by design):
//! - **No rated-slug filtering** — the aggregator decides which contests
//!   matter.
//! - **No caching / persistence.**

use chrono::{DateTime, FixedOffset};

use crate::core::html::{next_tag_block_ci, strip_tags, to_lower};
use crate::core::{net, sanitize};
use crate::error::Result;
use crate::params::ARCHIVE_PATH;

/// One contest as listed in the archive.
#[derive(Debug, Clone)]
pub struct Contest {
    pub slug: String,
    pub name: String,
    pub start_time: DateTime<FixedOffset>,
    pub duration_minutes: i64,
}

impl Contest {
    /// Contest end as a Unix timestamp: start time + duration.
    pub fn end_time_unix(&self) -> i64 {
        self.start_time.timestamp() + self.duration_minutes * 60
    }
}

/// Fetch the archive listing and parse it. One blocking request, no retry;
/// a non-2xx response aborts the run.
pub fn fetch() -> Result<Vec<Contest>> {
    let doc = net::http_get(ARCHIVE_PATH)?;
    parse_archive(&doc)
}

/// Parse archive markup into contest records, in page order.
pub fn parse_archive(doc: &str) -> Result<Vec<Contest>> {
    // Prefer <tbody>: the page wraps header rows in <thead>, which saves us
    // from skipping them one by one.
    let body = match next_tag_block_ci(doc, "<tbody", "</tbody>", 0) {
        Some((s, e)) => &doc[s..e],
        None => match next_tag_block_ci(doc, "<table", "</table>", 0) {
            Some((s, e)) => &doc[s..e],
            None => return Ok(Vec::new()),
        },
    };

    let mut out = Vec::new();
    let mut at = 0usize;
    while let Some((ts, te)) = next_tag_block_ci(body, "<tr", "</tr>", at) {
        at = te;
        match parse_row(&body[ts..te]) {
            Some(c) => out.push(c),
            None => logd!("archive: skipping row without time/slug/duration"),
        }
    }
    Ok(out)
}

// One <tr> → one contest, or None for rows that don't carry all three cells.
fn parse_row(row: &str) -> Option<Contest> {
    let (ts, te) = next_tag_block_ci(row, "<time", "</time>", 0)?;
    let stamp = strip_tags(&row[ts..te]);
    let start_time = DateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M:%S%z").ok()?;

    let (slug, name) = contest_anchor(row)?;
    let duration_minutes = duration_minutes(row)?;

    Some(Contest { slug, name, start_time, duration_minutes })
}

/// First `<a href="/contests/<slug>">NAME</a>` in the row.
fn contest_anchor(row: &str) -> Option<(String, String)> {
    let lc = to_lower(row);
    let marker = "href=\"/contests/";
    let hp = lc.find(marker)?;
    let start = hp + marker.len();
    let end = row[start..].find('"')? + start;
    let slug = row[start..end].trim_matches('/').to_string();

    let gt = row[end..].find('>')? + end + 1;
    let close = lc[gt..].find("</a>")? + gt;
    let name = sanitize::normalize_entities(&strip_tags(&row[gt..close]));

    if slug.is_empty() || name.is_empty() {
        return None;
    }
    Some((slug, name))
}

/// First cell whose text reads `H…H:MM`. The timestamp cell also contains
/// colons but its hour part is not a bare integer, so it never matches.
fn duration_minutes(row: &str) -> Option<i64> {
    let mut at = 0usize;
    while let Some((ts, te)) = next_tag_block_ci(row, "<td", "</td>", at) {
        at = te;
        let text = strip_tags(&row[ts..te]);
        if let Some((h, m)) = text.split_once(':') {
            if let (Ok(h), Ok(m)) = (h.trim().parse::<i64>(), m.trim().parse::<i64>()) {
                return Some(h * 60 + m);
            }
        }
    }
    None
}
