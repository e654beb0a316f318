// src/results.rs
//! Per-contest result tables.
//!
//! One `result_<slug>.csv` per contest, exported from the standings page.
//! Required columns: `Rank`, `Name`, `Score`, `Performance`, `Old Rating`,
//! `Change`, `New Rating` (the rating columns also appear with the site's
//! `(β)` suffix in older exports). `Provisional Rank` / `Provisional Score`
//! only exist for contests whose system-test rejudge ran after the contest
//! closed; their absence is a valid configuration, not an error.
//!
//! Tables are fully materialized — rosters are hundreds to low-thousands of
//! rows, not worth streaming.

use std::{collections::HashMap, fs, path::Path, str::FromStr};

use crate::csv::{column_index, parse_rows};
use crate::error::{Error, Result};

/// One participant's result row for one contest.
/// Built once when the table loads; immutable afterwards.
#[derive(Debug, Clone)]
pub struct RankEntry {
    pub rank: u32,
    pub name: String,
    pub score: i64,
    pub provisional_rank: Option<u32>,
    pub provisional_score: Option<i64>,
    pub performance: i32,
    pub old_rating: i32,
    pub change: i32,
    pub new_rating: i32,
}

/// A contest's rows keyed by participant name, plus the side index of
/// participants that carry a provisional score. Every key of
/// `provisional_scores` is a key of `entries`.
#[derive(Debug, Default)]
pub struct ResultTable {
    pub entries: HashMap<String, RankEntry>,
    pub provisional_scores: HashMap<String, i64>,
}

// Resolved header positions for one file.
struct Columns {
    rank: usize,
    name: usize,
    score: usize,
    performance: usize,
    old_rating: usize,
    change: usize,
    new_rating: usize,
    provisional_rank: Option<usize>,
    provisional_score: Option<usize>,
}

impl Columns {
    fn resolve(header: &[String], file: &str) -> Result<Self> {
        let required = |names: &[&str]| -> Result<usize> {
            column_index(header, names)
                .ok_or_else(|| Error::malformed(file, format!("missing column {:?}", names[0])))
        };
        Ok(Self {
            rank: required(&["Rank"])?,
            name: required(&["Name"])?,
            score: required(&["Score"])?,
            performance: required(&["Performance"])?,
            old_rating: required(&["Old Rating", "Old Rating(β)"])?,
            change: required(&["Change"])?,
            new_rating: required(&["New Rating", "New Rating(β)"])?,
            provisional_rank: column_index(header, &["Provisional Rank"]),
            provisional_score: column_index(header, &["Provisional Score"]),
        })
    }
}

impl ResultTable {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_csv(&text, &path.to_string_lossy())
    }

    /// Parse a result export. `file` is only used for error context.
    pub fn from_csv(text: &str, file: &str) -> Result<Self> {
        let mut rows = parse_rows(text).into_iter();
        let header = rows
            .next()
            .ok_or_else(|| Error::malformed(file, "empty result table"))?;
        let cols = Columns::resolve(&header, file)?;

        let mut table = ResultTable::default();
        for (i, row) in rows.enumerate() {
            let line = i + 2; // 1-based, after the header
            let name = cell(&row, cols.name, "Name", file, line)?.to_string();
            let entry = RankEntry {
                rank: int_cell(&row, cols.rank, "Rank", file, line)?,
                score: int_cell(&row, cols.score, "Score", file, line)?,
                provisional_rank: opt_int_cell(&row, cols.provisional_rank, "Provisional Rank", file, line)?,
                provisional_score: opt_int_cell(&row, cols.provisional_score, "Provisional Score", file, line)?,
                performance: int_cell(&row, cols.performance, "Performance", file, line)?,
                old_rating: int_cell(&row, cols.old_rating, "Old Rating", file, line)?,
                change: int_cell(&row, cols.change, "Change", file, line)?,
                new_rating: int_cell(&row, cols.new_rating, "New Rating", file, line)?,
                name: name.clone(),
            };
            if let Some(p) = entry.provisional_score {
                table.provisional_scores.insert(name.clone(), p);
            }
            // Duplicate names should not happen; last row wins if they do.
            table.entries.insert(name, entry);
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn cell<'a>(row: &'a [String], idx: usize, col: &str, file: &str, line: usize) -> Result<&'a str> {
    row.get(idx)
        .map(|s| s.trim())
        .ok_or_else(|| Error::malformed(file, format!("row {}: missing {:?} cell", line, col)))
}

fn int_cell<T: FromStr>(row: &[String], idx: usize, col: &str, file: &str, line: usize) -> Result<T> {
    let raw = cell(row, idx, col, file, line)?;
    raw.parse().map_err(|_| {
        Error::malformed(file, format!("row {}: {:?} is not an integer: {:?}", line, col, raw))
    })
}

// Optional column: absent column or empty cell → None. A present non-empty
// cell still has to parse.
fn opt_int_cell<T: FromStr>(
    row: &[String],
    idx: Option<usize>,
    col: &str,
    file: &str,
    line: usize,
) -> Result<Option<T>> {
    let Some(idx) = idx else { return Ok(None) };
    match row.get(idx).map(|s| s.trim()) {
        None | Some("") => Ok(None),
        Some(_) => int_cell(row, idx, col, file, line).map(Some),
    }
}
