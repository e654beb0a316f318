// tests/result_table.rs
//
// Loader behavior for per-contest result CSVs.
//
use ahc_history::error::Error;
use ahc_history::results::ResultTable;

const WITH_PROVISIONAL: &str = "\
Rank,Name,Score,Provisional Rank,Provisional Score,Performance,Old Rating,Change,New Rating
1,wleite,98348,2,97603,3539,0,1128,1128
2,iehn,97810,1,97824,3249,0,1053,1053
3,takumi152,97353,4,96922,3062,0,992,992
";

const WITHOUT_PROVISIONAL: &str = "\
Rank,Name,Score,Performance,Old Rating,Change,New Rating
1,wleite,98348,3539,0,1128,1128
2,iehn,97810,3249,0,1053,1053
";

#[test]
fn participant_count_matches_distinct_names() {
    let table = ResultTable::from_csv(WITH_PROVISIONAL, "test.csv").unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.entries.contains_key("wleite"));
    assert!(table.entries.contains_key("iehn"));
    assert!(table.entries.contains_key("takumi152"));
}

#[test]
fn provisional_columns_are_populated() {
    let table = ResultTable::from_csv(WITH_PROVISIONAL, "test.csv").unwrap();

    let e = &table.entries["wleite"];
    assert_eq!(e.rank, 1);
    assert_eq!(e.score, 98348);
    assert_eq!(e.provisional_rank, Some(2));
    assert_eq!(e.provisional_score, Some(97603));
    assert_eq!(e.performance, 3539);
    assert_eq!(e.change, 1128);
    assert_eq!(e.new_rating, 1128);

    assert_eq!(table.provisional_scores["iehn"], 97824);
    assert_eq!(table.provisional_scores.len(), 3);
}

#[test]
fn missing_provisional_columns_are_a_valid_configuration() {
    let table = ResultTable::from_csv(WITHOUT_PROVISIONAL, "test.csv").unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.provisional_scores.is_empty());
    assert_eq!(table.entries["wleite"].provisional_score, None);
    assert_eq!(table.entries["wleite"].provisional_rank, None);
}

#[test]
fn provisional_index_is_subset_of_entries() {
    let table = ResultTable::from_csv(WITH_PROVISIONAL, "test.csv").unwrap();
    for name in table.provisional_scores.keys() {
        assert!(table.entries.contains_key(name), "{name} missing from entries");
    }
}

#[test]
fn beta_suffixed_rating_headers_are_accepted() {
    let csv = "\
Rank,Name,Score,Performance,Old Rating(β),Change,New Rating(β)
1,wleite,98348,3539,100,1028,1128
";
    let table = ResultTable::from_csv(csv, "test.csv").unwrap();
    assert_eq!(table.entries["wleite"].old_rating, 100);
    assert_eq!(table.entries["wleite"].new_rating, 1128);
}

#[test]
fn missing_required_column_is_malformed() {
    let csv = "\
Rank,Name,Performance,Old Rating,Change,New Rating
1,wleite,3539,0,1128,1128
";
    let err = ResultTable::from_csv(csv, "broken.csv").unwrap_err();
    match err {
        Error::MalformedRow { file, reason } => {
            assert_eq!(file, "broken.csv");
            assert!(reason.contains("Score"), "got: {reason}");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn non_integer_score_is_malformed() {
    let csv = "\
Rank,Name,Score,Performance,Old Rating,Change,New Rating
1,wleite,not-a-number,3539,0,1128,1128
";
    let err = ResultTable::from_csv(csv, "broken.csv").unwrap_err();
    match err {
        Error::MalformedRow { reason, .. } => {
            assert!(reason.contains("Score"), "got: {reason}");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn quoted_names_parse() {
    let csv = "\
Rank,Name,Score,Performance,Old Rating,Change,New Rating
1,\"last, first\",100,3539,0,1128,1128
";
    let table = ResultTable::from_csv(csv, "test.csv").unwrap();
    assert!(table.entries.contains_key("last, first"));
}
