//! Integration tests for reconcile-core

use std::collections::HashSet;

use reconcile_core::{
    into_rows, ledger_from_rows, reconcile, AnnotatedTransaction, LedgerBuilder, LedgerSide,
    MatchStatus, ReconcileError, ReconciliationEngine, Transaction,
};

use MatchStatus::{Found, Missing};

fn statuses(ledger: &[AnnotatedTransaction]) -> Vec<MatchStatus> {
    ledger.iter().map(|entry| entry.status).collect()
}

#[test]
fn test_earliest_date_scenario() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-01-09", "A", "100", "X")
        .transaction("2024-01-11", "A", "100", "X")
        .build();

    let (out1, out2) = reconcile(&first, &second).unwrap();

    assert_eq!(statuses(&out1), vec![Found]);
    assert_eq!(statuses(&out2), vec![Found, Missing]);
}

#[test]
fn test_differing_category_never_matches() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-01-10", "B", "100", "X")
        .build();

    let (out1, out2) = reconcile(&first, &second).unwrap();

    assert_eq!(statuses(&out1), vec![Missing]);
    assert_eq!(statuses(&out2), vec![Missing]);
}

#[test]
fn test_first_in_input_order_wins_contested_match() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("2024-01-10", "A", "100", "X")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();

    let (out1, out2) = reconcile(&first, &second).unwrap();

    assert_eq!(statuses(&out1), vec![Found, Missing]);
    assert_eq!(statuses(&out2), vec![Found]);
}

#[test]
fn test_order_sensitivity_of_greedy_assignment() {
    // 01-09 can only pair with the 01-10 candidate; 01-11 could take either.
    let second = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("2024-01-12", "A", "100", "X")
        .build();

    let forward = LedgerBuilder::new()
        .transaction("2024-01-09", "A", "100", "X")
        .transaction("2024-01-11", "A", "100", "X")
        .build();
    let (out1, out2) = reconcile(&forward, &second).unwrap();
    assert_eq!(statuses(&out1), vec![Found, Found]);
    assert_eq!(statuses(&out2), vec![Found, Found]);

    let reversed: Vec<Transaction> = forward.iter().rev().cloned().collect();
    let (out1, out2) = reconcile(&reversed, &second).unwrap();
    assert_eq!(statuses(&out1), vec![Found, Missing]);
    assert_eq!(statuses(&out2), vec![Found, Missing]);
}

#[test]
fn test_one_to_one_consumption() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("2024-01-11", "A", "100", "X")
        .transaction("2024-01-12", "A", "100", "X")
        .transaction("2024-01-10", "B", "100", "X")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-01-11", "A", "100", "X")
        .transaction("2024-01-09", "A", "100", "X")
        .transaction("2024-01-10", "B", "100", "X")
        .transaction("2024-01-10", "B", "100", "X")
        .build();

    let result = ReconciliationEngine::new()
        .reconcile(&first, &second)
        .unwrap();

    let consumed: HashSet<usize> = result.matches.iter().map(|pair| pair.second).collect();
    assert_eq!(consumed.len(), result.matches.len());

    let claimed: HashSet<usize> = result.matches.iter().map(|pair| pair.first).collect();
    assert_eq!(claimed.len(), result.matches.len());

    let found_second = result.second.iter().filter(|entry| entry.is_found()).count();
    let found_first = result.first.iter().filter(|entry| entry.is_found()).count();
    assert_eq!(found_second, result.matches.len());
    assert_eq!(found_first, result.matches.len());

    assert_eq!(
        statuses(&result.first),
        vec![Found, Found, Missing, Missing, Found]
    );
    assert_eq!(statuses(&result.second), vec![Found, Found, Found, Missing]);
}

#[test]
fn test_no_cross_key_bleed() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("2024-01-10", "A", "100", "Y")
        .transaction("2024-01-10", "A", "100.00", "X")
        .transaction("2024-01-10", "a", "100", "X")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();

    let result = ReconciliationEngine::new()
        .reconcile(&first, &second)
        .unwrap();

    for pair in &result.matches {
        assert_eq!(
            first[pair.first].match_key(),
            second[pair.second].match_key()
        );
    }
    assert_eq!(statuses(&result.first), vec![Found, Missing, Missing, Missing]);
}

#[test]
fn test_same_date_duplicates_match_in_insertion_order() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("2024-01-10", "A", "100", "X")
        .build();

    let (_, out2) = reconcile(&first, &second).unwrap();
    assert_eq!(statuses(&out2), vec![Found, Missing, Missing]);
}

#[test]
fn test_reconciliation_is_repeatable() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("2024-01-31", "B", "7", "Y")
        .transaction("2024-02-01", "B", "7", "Y")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-02-01", "B", "7", "Y")
        .transaction("2024-01-11", "A", "100", "X")
        .transaction("2024-01-09", "A", "100", "X")
        .build();

    let engine = ReconciliationEngine::new();
    let a = engine.reconcile(&first, &second).unwrap();
    let b = engine.reconcile(&first, &second).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_inputs_are_not_modified() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();
    let first_before = first.clone();
    let second_before = second.clone();

    let (out1, out2) = reconcile(&first, &second).unwrap();

    assert_eq!(first, first_before);
    assert_eq!(second, second_before);
    assert_eq!(out1[0].transaction, first[0]);
    assert_eq!(out2[0].transaction, second[0]);
}

#[test]
fn test_month_and_year_boundaries() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-01", "A", "1", "X")
        .transaction("2024-03-01", "B", "2", "Y")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2023-12-31", "A", "1", "X")
        .transaction("2024-02-29", "B", "2", "Y")
        .build();

    let result = ReconciliationEngine::new()
        .reconcile(&first, &second)
        .unwrap();
    assert!(result.summary().is_fully_reconciled());
}

#[test]
fn test_invalid_date_is_fatal() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("2024-1-11", "A", "100", "X")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();

    let err = reconcile(&first, &second).unwrap_err();
    assert_eq!(
        err,
        ReconcileError::InvalidDateFormat {
            side: LedgerSide::First,
            position: 1,
            value: "2024-1-11".to_string(),
        }
    );
}

#[test]
fn test_invalid_date_in_second_ledger_is_fatal() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("", "Z", "0", "Z")
        .build();

    let err = reconcile(&first, &second).unwrap_err();
    assert!(matches!(
        err,
        ReconcileError::InvalidDateFormat {
            side: LedgerSide::Second,
            position: 1,
            ..
        }
    ));
}

#[test]
fn test_raw_rows_round_trip_through_engine() {
    let first = ledger_from_rows(&[
        vec!["2024-01-10", "A", "100", "X"],
        vec!["2024-01-20", "", "", ""],
    ])
    .unwrap();
    let second = ledger_from_rows(&[vec!["2024-01-21", "", "", ""]]).unwrap();

    let (out1, out2) = reconcile(&first, &second).unwrap();

    assert_eq!(
        into_rows(out1),
        vec![
            vec!["2024-01-10", "A", "100", "X", "MISSING"],
            vec!["2024-01-20", "", "", "", "FOUND"],
        ]
    );
    assert_eq!(into_rows(out2), vec![vec!["2024-01-21", "", "", "", "FOUND"]]);
}

#[test]
fn test_serialized_status_literals() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();

    let (out1, _) = reconcile(&first, &[]).unwrap();
    let json = serde_json::to_value(&out1[0]).unwrap();

    assert_eq!(json["status"], "MISSING");
    assert_eq!(json["transaction"]["date"], "2024-01-10");
    assert_eq!(json["transaction"]["value"], "100");
}

#[test]
fn test_summary_serializes() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .build();
    let second = first.clone();

    let result = ReconciliationEngine::new()
        .reconcile(&first, &second)
        .unwrap();
    let summary = serde_json::to_value(result.summary()).unwrap();

    assert_eq!(summary["matched"], 1);
    assert_eq!(summary["first_missing"], 0);
    assert_eq!(summary["second_missing"], 0);
}

#[test]
fn test_very_wide_window_stays_cheap() {
    let first = LedgerBuilder::new()
        .transaction("2024-01-10", "A", "100", "X")
        .transaction("2024-01-10", "B", "7", "Y")
        .build();
    let second = LedgerBuilder::new()
        .transaction("2024-01-12", "A", "100", "X")
        .transaction("1900-01-01", "B", "7", "Y")
        .build();

    for window in [50_000_000, u32::MAX] {
        let result = ReconciliationEngine::with_window(window)
            .reconcile(&first, &second)
            .unwrap();
        assert!(result.summary().is_fully_reconciled());
    }
}
