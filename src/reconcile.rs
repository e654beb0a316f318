// src/reconcile.rs
//! Score reconciliation.
//!
//! During a marathon contest the standings show a *provisional* score from a
//! subset of test cases; the full system test after the contest rewrites the
//! final submission's score, and late rejudges can leave that literal score
//! field unreliable. The provisional snapshot taken at contest end is
//! authoritative for the final submission — *unless* the user's own history
//! shows they had already reached at least that score with an earlier,
//! correctly-scored submission, in which case forcing the snapshot would be
//! a regression and the final submission is invalidated instead.
//!
//! The submission stream is supplied by an external collaborator and must be
//! ordered by submission time ascending. No defensive reordering happens
//! here; a record that breaks the pass-1 bookkeeping is an
//! `InvariantViolation`.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::results::ResultTable;

/// A submission's score, or the explicit "no contribution" marker a stale
/// provisional snapshot collapses to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Points(i64),
    Invalidated,
}

impl Score {
    pub fn points(self) -> Option<i64> {
        match self {
            Score::Points(p) => Some(p),
            Score::Invalidated => None,
        }
    }
}

/// Judge outcome. Carried through for consumers of the corrected stream;
/// never consulted by the reconciliation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ac,
    Wa,
    Tle,
    Re,
    Ce,
}

/// One submission event, time-ordered within the stream.
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub submission_id: u64,
    pub contest: String,
    pub time_unix: i64,
    pub user_name: String,
    pub score: Score,
    pub verdict: Verdict,
}

/// Correct final-submission scores in place.
///
/// Pass 1 builds, per user, the running best score — one entry per
/// submission, in stream order. The whole sequence is kept (not a rolling
/// scalar) because pass 2 needs the value *before* the last submission, and
/// "no prior history" must stay distinguishable from "prior history with
/// some maximum".
///
/// Pass 2 then visits every record in `final_ids`: if the user has a
/// provisional score in `table` and either has no prior submissions or the
/// snapshot strictly beats their best before the final submission, the
/// snapshot wins; otherwise the record is invalidated as stale. Exact
/// equality discards the snapshot — the user had already reached it.
/// Records outside `final_ids`, and users without a provisional score, are
/// never touched.
pub fn reconcile(
    records: &mut [SubmissionRecord],
    final_ids: &HashSet<u64>,
    table: &ResultTable,
) -> Result<()> {
    // Pass 1: per-user running maxima.
    let mut best_history: HashMap<String, Vec<i64>> = HashMap::new();
    for rec in records.iter() {
        let Some(points) = rec.score.points() else {
            return Err(Error::InvariantViolation(format!(
                "submission {} entered reconciliation already invalidated",
                rec.submission_id
            )));
        };
        match best_history.get_mut(&rec.user_name) {
            Some(seq) => {
                let best = points.max(seq[seq.len() - 1]);
                seq.push(best);
            }
            None => {
                best_history.insert(rec.user_name.clone(), vec![points]);
            }
        }
    }

    // Pass 2: correction.
    for rec in records.iter_mut() {
        if !final_ids.contains(&rec.submission_id) {
            continue;
        }
        let Some(&provisional) = table.provisional_scores.get(&rec.user_name) else {
            continue;
        };
        let seq = best_history.get(&rec.user_name).ok_or_else(|| {
            Error::InvariantViolation(format!(
                "final submission {} references unseen user {:?}",
                rec.submission_id, rec.user_name
            ))
        })?;

        if seq.len() == 1 || provisional > seq[seq.len() - 2] {
            rec.score = Score::Points(provisional);
        } else {
            rec.score = Score::Invalidated;
        }
    }

    Ok(())
}
