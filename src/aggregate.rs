// src/aggregate.rs
//! Contest aggregation: archive listing → per-contest JSON artifacts.
//!
//! Thin orchestration over the real work done elsewhere: `specs::contests`
//! reads the archive page, `results::ResultTable` loads the local CSV
//! exports, and this module filters by the rated-slug pattern, shapes one
//! record per participant, and writes the compact JSON documents the
//! rating-history front end consumes.

use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;

use crate::{
    error::Result,
    params::{Params, RATED_SLUG_PATTERN},
    progress::Progress,
    results::{RankEntry, ResultTable},
    specs::contests::{self, Contest},
};

static RATED_SLUGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RATED_SLUG_PATTERN).expect("rated slug pattern compiles"));

/// One participant's record in a per-contest artifact. Field names are the
/// front end's contract, hence the mixed casing. `low`/`high` are
/// display-only rating-band placeholders.
#[derive(Debug, Serialize)]
pub struct ResultRecord {
    #[serde(rename = "EndTime")]
    pub end_time: i64,
    #[serde(rename = "NewRating")]
    pub new_rating: i32,
    #[serde(rename = "OldRating")]
    pub old_rating: i32,
    #[serde(rename = "Place")]
    pub place: u32,
    #[serde(rename = "ContestName")]
    pub contest_name: String,
    #[serde(rename = "StandingsUrl")]
    pub standings_url: String,
    #[serde(rename = "StandingsPath")]
    pub standings_path: String,
    pub low: i32,
    pub high: i32,
    pub performance: i32,
    pub change: i32,
    pub slug: String,
}

impl ResultRecord {
    fn build(contest: &Contest, entry: &RankEntry, end_time: i64) -> Self {
        let standings_path = format!(
            "/contests/{}/standings?watching={}",
            contest.slug, entry.name
        );
        Self {
            end_time,
            new_rating: entry.new_rating,
            old_rating: entry.old_rating,
            place: entry.rank,
            contest_name: contest.name.clone(),
            standings_url: format!("https://atcoder.jp{}", standings_path),
            standings_path,
            low: 0,
            high: 10000,
            performance: entry.performance,
            change: entry.change,
            slug: contest.slug.clone(),
        }
    }
}

/// One entry in the contest index document.
#[derive(Debug, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub endtime: i64,
    pub slug: String,
}

/// Summary of what was produced, in write order.
#[derive(Debug)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: fetch the archive, then aggregate.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(params: &Params, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    logf!("fetching contest archive from {}", crate::params::HOST);
    let contests = contests::fetch()?;
    logf!("archive listed {} contests", contests.len());
    run_with_contests(params, &contests, progress)
}

/// Aggregate an already-parsed contest list. Split out of `run` so tests
/// (and any caller with a captured listing) stay offline.
pub fn run_with_contests(
    params: &Params,
    contests: &[Contest],
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let rated: Vec<&Contest> = contests
        .iter()
        .filter(|c| RATED_SLUGS.is_match(&c.slug))
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(rated.len());
    }

    fs::create_dir_all(&params.results_dir)?;
    fs::create_dir_all(&params.contests_dir)?;

    let mut written = Vec::with_capacity(rated.len() + 1);
    let mut index = Vec::with_capacity(rated.len());

    for contest in rated {
        let csv_path = params.csv_dir.join(format!("result_{}.csv", contest.slug));
        let table = ResultTable::load(&csv_path)?;
        let end_time = contest.end_time_unix();

        // BTreeMap: keys serialize sorted, so artifacts are byte-stable
        // across runs.
        let records: BTreeMap<&str, ResultRecord> = table
            .entries
            .iter()
            .map(|(name, entry)| (name.as_str(), ResultRecord::build(contest, entry, end_time)))
            .collect();

        let path = params.results_dir.join(format!("{}.json", contest.slug));
        fs::write(&path, serde_json::to_string(&records)?)?;
        logf!("wrote {} ({} participants)", path.display(), records.len());

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&contest.slug, &path);
        }
        written.push(path);
        index.push(IndexEntry {
            name: contest.name.clone(),
            endtime: end_time,
            slug: contest.slug.clone(),
        });
    }

    // Index is emitted in reverse encounter order, matching what the
    // front end expects.
    index.reverse();
    let index_path = params.contests_dir.join("contests.json");
    fs::write(&index_path, serde_json::to_string(&index)?)?;
    logf!("wrote {} ({} contests)", index_path.display(), index.len());
    written.push(index_path);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(RunSummary { files_written: written })
}
