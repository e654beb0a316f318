// tests/reconcile.rs
//
// Properties of the score reconciliation pass.
//
use std::collections::{HashMap, HashSet};

use ahc_history::reconcile::{reconcile, Score, SubmissionRecord, Verdict};
use ahc_history::results::{RankEntry, ResultTable};

fn entry(name: &str, provisional_score: Option<i64>) -> RankEntry {
    RankEntry {
        rank: 1,
        name: name.into(),
        score: 0,
        provisional_rank: provisional_score.map(|_| 1),
        provisional_score,
        performance: 2000,
        old_rating: 0,
        change: 0,
        new_rating: 0,
    }
}

// Table with the given provisional scores; every listed user also gets a
// plain entry so the provisional index stays a subset of entries.
fn table(provisional: &[(&str, i64)], plain: &[&str]) -> ResultTable {
    let mut entries = HashMap::new();
    let mut provisional_scores = HashMap::new();
    for (name, p) in provisional {
        entries.insert(name.to_string(), entry(name, Some(*p)));
        provisional_scores.insert(name.to_string(), *p);
    }
    for name in plain {
        entries.insert(name.to_string(), entry(name, None));
    }
    ResultTable { entries, provisional_scores }
}

fn rec(id: u64, user: &str, score: i64) -> SubmissionRecord {
    SubmissionRecord {
        submission_id: id,
        contest: "ahc001".into(),
        time_unix: id as i64 * 60,
        user_name: user.into(),
        score: Score::Points(score),
        verdict: Verdict::Ac,
    }
}

#[test]
fn users_without_provisional_score_are_untouched() {
    let table = table(&[], &["chokudai"]);
    let mut records = vec![rec(1, "chokudai", 10), rec(2, "chokudai", 20), rec(3, "chokudai", 5)];
    let finals: HashSet<u64> = [3].into();

    reconcile(&mut records, &finals, &table).unwrap();

    assert_eq!(records[0].score, Score::Points(10));
    assert_eq!(records[1].score, Score::Points(20));
    assert_eq!(records[2].score, Score::Points(5));
}

#[test]
fn first_ever_submission_takes_provisional() {
    // No prior history: the snapshot is authoritative even when it is lower
    // than the submission's own score.
    let table = table(&[("wata", 18)], &[]);
    let mut records = vec![rec(1, "wata", 50)];
    let finals: HashSet<u64> = [1].into();

    reconcile(&mut records, &finals, &table).unwrap();

    assert_eq!(records[0].score, Score::Points(18));
}

#[test]
fn stale_provisional_is_invalidated() {
    // [10, 20, 15(final)], provisional 18: best before the final is 20,
    // 18 <= 20 → the snapshot is stale.
    let table = table(&[("tourist", 18)], &[]);
    let mut records = vec![rec(1, "tourist", 10), rec(2, "tourist", 20), rec(3, "tourist", 15)];
    let finals: HashSet<u64> = [3].into();

    reconcile(&mut records, &finals, &table).unwrap();

    assert_eq!(records[2].score, Score::Invalidated);
    // Earlier records stay as submitted.
    assert_eq!(records[0].score, Score::Points(10));
    assert_eq!(records[1].score, Score::Points(20));
}

#[test]
fn improving_provisional_overrides_final_score() {
    // [10, 12, 15(final)], provisional 18: best before the final is 12,
    // 18 > 12 → the snapshot wins.
    let table = table(&[("snuke", 18)], &[]);
    let mut records = vec![rec(1, "snuke", 10), rec(2, "snuke", 12), rec(3, "snuke", 15)];
    let finals: HashSet<u64> = [3].into();

    reconcile(&mut records, &finals, &table).unwrap();

    assert_eq!(records[2].score, Score::Points(18));
}

#[test]
fn equal_provisional_is_discarded() {
    // Strict > only: provisional equal to the prior best is treated as stale.
    let table = table(&[("rng_58", 20)], &[]);
    let mut records = vec![rec(1, "rng_58", 20), rec(2, "rng_58", 15)];
    let finals: HashSet<u64> = [2].into();

    reconcile(&mut records, &finals, &table).unwrap();

    assert_eq!(records[1].score, Score::Invalidated);
}

#[test]
fn non_final_records_are_never_modified() {
    let table = table(&[("yosupo", 99)], &[]);
    let mut records = vec![rec(1, "yosupo", 10), rec(2, "yosupo", 20)];
    let finals: HashSet<u64> = HashSet::new();

    reconcile(&mut records, &finals, &table).unwrap();

    assert_eq!(records[0].score, Score::Points(10));
    assert_eq!(records[1].score, Score::Points(20));
}

#[test]
fn users_are_tracked_independently() {
    // Interleaved streams: each user's running best is their own.
    let table = table(&[("a", 18), ("b", 18)], &[]);
    let mut records = vec![
        rec(1, "a", 10),
        rec(2, "b", 25),
        rec(3, "a", 12),
        rec(4, "b", 5),
        rec(5, "a", 15),
        rec(6, "b", 7),
    ];
    let finals: HashSet<u64> = [5, 6].into();

    reconcile(&mut records, &finals, &table).unwrap();

    // a: best before final is 12 → 18 wins.
    assert_eq!(records[4].score, Score::Points(18));
    // b: best before final is 25 → 18 is stale.
    assert_eq!(records[5].score, Score::Invalidated);
}

#[test]
fn invalidated_input_is_an_invariant_violation() {
    let table = table(&[("a", 18)], &[]);
    let mut records = vec![rec(1, "a", 10)];
    records[0].score = Score::Invalidated;
    let finals: HashSet<u64> = [1].into();

    let err = reconcile(&mut records, &finals, &table).unwrap_err();
    assert!(err.to_string().contains("invariant"), "got: {err}");
}
