//! Reference scenarios over the seed dataset.

use approx::assert_relative_eq;
use depositwatch_core::chart::truncate_label;
use depositwatch_core::prelude::*;
use depositwatch_core::view::filter_records;

fn run(store: &RecordStore, params: ViewParams) -> View {
    derive_view(store, &params, &ViewSettings::default())
}

/// Seed sorted by rank ascending yields 37..=43.
#[test]
fn test_seed_rank_ascending() {
    let view = run(&RecordStore::seed(), ViewParams::default());
    let ranks: Vec<u32> = view.records.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![37, 38, 39, 40, 41, 42, 43]);
}

/// The reference rank window keeps every seed record.
#[test]
fn test_seed_rank_window_retains_all() {
    let store = RecordStore::seed();
    let kept = filter_records(store.records(), FilterMode::RankWindow, RankWindow::new(35, 45));
    assert_eq!(kept.len(), 7);

    let view = run(&store, ViewParams::default().with_filter(FilterMode::RankWindow));
    assert_eq!(view.caption(), "Showing 7 institutions");
}

/// Updating the protocol touches only its deposits.
#[test]
fn test_update_protocol_deposits() {
    let seed = RecordStore::seed();
    let updated = seed.update_deposits("Aave", 75.5);

    let aave = updated.find("Aave").unwrap();
    assert_relative_eq!(aave.deposits, 75.5);

    for (before, after) in seed.iter().zip(updated.iter()) {
        if before.name != "Aave" {
            assert_eq!(before.deposits.to_bits(), after.deposits.to_bits());
        }
    }
}

/// Deposits descending puts UMB first and Pinnacle last.
#[test]
fn test_seed_deposits_descending() {
    let params = ViewParams::default().with_sort(SortField::Deposits, SortDirection::Descending);
    let view = run(&RecordStore::seed(), params);

    assert_eq!(view.rows.first().unwrap().name, "UMB BK NA/UMB FC");
    assert_eq!(view.rows.first().unwrap().deposits, "$69.014B");
    assert_eq!(view.rows.last().unwrap().name, "Pinnacle BK/Pinnacle FNCL PTNR");
    assert_eq!(view.rows.last().unwrap().deposits, "$54.473B");
}

/// Labels truncate only past fifteen characters.
#[test]
fn test_label_truncation_boundary() {
    let fifteen = "Synovus BK/Syno";
    let sixteen = "Synovus BK/Synov";
    assert_eq!(fifteen.chars().count(), 15);

    assert_eq!(truncate_label(fifteen, 15), fifteen);
    assert_eq!(truncate_label(sixteen, 15), "Synovus BK/Syno...");
}

/// Chart follows the table order and highlights the protocol.
#[test]
fn test_chart_head_of_sorted_view() {
    let params = ViewParams::default().with_sort(SortField::Deposits, SortDirection::Ascending);
    let view = run(&RecordStore::seed(), params);

    let labels: Vec<&str> = view.chart.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Pinnacle BK/Pin...",
            "Synovus BK/Syno...",
            "CIBC BK USA/CIB...",
            "Valley NB/Valle...",
            "SouthState BK N...",
        ]
    );
    assert!(view.chart.iter().all(|p| !p.highlight));
}

/// Raising the protocol's deposits reorders the deposits sort but not its rank.
#[test]
fn test_update_then_sort_keeps_stale_rank() {
    let store = RecordStore::seed().update_deposits("Aave", 100.0);
    let params = ViewParams::default().with_sort(SortField::Deposits, SortDirection::Descending);
    let view = run(&store, params);

    assert_eq!(view.rows[0].name, "Aave");
    assert_eq!(view.rows[0].rank_label, "#38");
    assert!(view.chart[0].highlight);
    assert_relative_eq!(view.chart[0].value, 100.0);
}

/// A session driven through a full interaction sequence.
#[test]
fn test_session_walkthrough() {
    let mut session = Session::default();

    session.set_input("not a number");
    assert!(session.submit_deposits().is_err());
    assert_eq!(session.input(), "not a number");

    session.set_input("75.5");
    assert!(session.submit_deposits().is_ok());
    assert_eq!(session.input(), "");

    session.click_sort(SortField::Deposits);
    session.click_sort(SortField::Deposits);
    session.toggle_filter();

    let view = session.view();
    assert_eq!(view.rows[0].name, "Aave");
    assert_eq!(view.rows[0].deposits, "$75.500B");

    let stats = session.summary();
    assert_eq!(stats.deposits_label(), "$75.500B");
    assert_eq!(stats.rank_label(), "#38");
    assert_eq!(stats.institution_count, 6);
}
