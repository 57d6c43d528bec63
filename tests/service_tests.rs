//! Library-level tests for the orchestration core, using a small lot and a
//! deterministic clock.

use carpark::core::reconcile;
use carpark::core::service::ParkingService;
use carpark::errors::AppError;
use carpark::store::ledger::HistoryLedger;
use carpark::store::spots::SpotTable;
use std::env;
use std::fs;
use std::path::PathBuf;

const RATE: f64 = 0.03;

fn setup(name: &str, capacity: u32) -> (ParkingService, PathBuf) {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_carpark_svc", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();

    let spots = SpotTable::new(dir.join("parking_spots.txt"), capacity);
    let ledger = HistoryLedger::new(dir.join("parking_history.txt"));
    (ParkingService::from_parts(spots, ledger, RATE), dir)
}

#[test]
fn check_in_then_status_reports_exactly_one_occupied() {
    let (svc, _dir) = setup("one_occupied", 3);

    svc.check_in("Alice", "XYZ1", "1234567890", "12 High St", 2, 1000)
        .unwrap();

    let spots = svc.status().unwrap();
    assert!(!spots[0].occupied);
    assert!(spots[1].occupied);
    assert_eq!(spots[1].plate, "XYZ1");
    assert_eq!(spots[1].entry_time, 1000);
    assert!(!spots[2].occupied);
}

#[test]
fn status_is_idempotent() {
    let (svc, _dir) = setup("idempotent", 3);
    svc.check_in("Alice", "XYZ1", "1234567890", "12 High St", 1, 1000)
        .unwrap();

    assert_eq!(svc.status().unwrap(), svc.status().unwrap());
}

#[test]
fn full_cycle_matches_the_fee_formula() {
    // Lot of 3, check in to spot 2, check out 100 seconds later at 0.03/s.
    let (svc, _dir) = setup("full_cycle", 3);

    svc.check_in("Alice", "XYZ1", "1234567890", "12 High St", 2, 1000)
        .unwrap();
    assert_eq!(SpotTable::count_occupied(&svc.status().unwrap()), 1);

    let receipt = svc.check_out("xyz1", 1100).unwrap();
    assert_eq!(receipt.spot_id, 2);
    assert_eq!(receipt.duration_secs, 100);
    assert!((receipt.fee - 3.00).abs() < 1e-9);
    assert!(receipt.ledger_amended);

    let spots = svc.status().unwrap();
    assert_eq!(SpotTable::count_occupied(&spots), 0);
    assert_eq!(spots[1].plate, "EMPTY");
    assert_eq!(spots[1].entry_time, 0);

    let sessions = svc.ledger().load_all().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].exit_time, 1100);
    assert!((sessions[0].fee - 3.00).abs() < 1e-9);
}

#[test]
fn checkout_on_empty_lot_fails_before_any_lookup() {
    let (svc, dir) = setup("empty_lot", 3);
    svc.status().unwrap(); // initialize the table

    match svc.check_out("XYZ1", 1000) {
        Err(AppError::NothingParked) => {}
        other => panic!("expected NothingParked, got {:?}", other.map(|r| r.plate)),
    }
    assert!(!dir.join("parking_history.txt").exists());
}

#[test]
fn checkout_of_absent_plate_keeps_table_byte_identical() {
    let (svc, dir) = setup("absent_plate", 3);
    svc.check_in("Alice", "XYZ1", "1234567890", "12 High St", 1, 1000)
        .unwrap();
    let before = fs::read_to_string(dir.join("parking_spots.txt")).unwrap();

    match svc.check_out("NOPE", 2000) {
        Err(AppError::PlateNotFound(p)) => assert_eq!(p, "NOPE"),
        other => panic!("expected PlateNotFound, got {:?}", other.map(|r| r.plate)),
    }
    assert_eq!(
        fs::read_to_string(dir.join("parking_spots.txt")).unwrap(),
        before
    );
}

#[test]
fn duplicate_plate_collides_case_insensitively() {
    let (svc, _dir) = setup("dup", 3);
    svc.check_in("Alice", "ABC123", "1234567890", "12 High St", 1, 1000)
        .unwrap();

    match svc.check_in("Bob", "abc123", "0987654321", "Elm Rd", 2, 1001) {
        Err(AppError::DuplicatePlate(p)) => assert_eq!(p, "abc123"),
        other => panic!("expected DuplicatePlate, got {:?}", other.map(|s| s.plate)),
    }
}

#[test]
fn occupied_and_out_of_range_spots_are_invalid() {
    let (svc, _dir) = setup("bad_spot", 3);
    svc.check_in("Alice", "AA1", "1234567890", "12 High St", 2, 1000)
        .unwrap();

    assert!(matches!(
        svc.check_in("Bob", "BB2", "0987654321", "Elm Rd", 2, 1001),
        Err(AppError::InvalidSpot(2))
    ));
    assert!(matches!(
        svc.check_in("Bob", "BB2", "0987654321", "Elm Rd", 9, 1001),
        Err(AppError::InvalidSpot(9))
    ));
}

#[test]
fn clock_skew_clamps_fee_to_zero() {
    let (svc, _dir) = setup("skew", 3);
    svc.check_in("Alice", "AA1", "1234567890", "12 High St", 1, 5000)
        .unwrap();

    let receipt = svc.check_out("AA1", 4000).unwrap();
    assert_eq!(receipt.fee, 0.0);
    assert_eq!(receipt.duration_secs, 0);
}

#[test]
fn checkout_without_ledger_match_is_flagged_not_swallowed() {
    let (svc, dir) = setup("ledger_gap", 3);
    svc.check_in("Alice", "AA1", "1234567890", "12 High St", 1, 1000)
        .unwrap();
    // Lose the ledger behind the service's back.
    fs::remove_file(dir.join("parking_history.txt")).unwrap();

    let receipt = svc.check_out("AA1", 1100).unwrap();
    assert!(!receipt.ledger_amended);

    // The spot was still freed.
    assert_eq!(SpotTable::count_occupied(&svc.status().unwrap()), 0);
}

#[test]
fn owner_search_after_two_checkins_and_one_checkout() {
    let (svc, _dir) = setup("owner_search", 3);
    svc.check_in("Alice", "XYZ1", "1234567890", "12 High St", 1, 1000)
        .unwrap();
    svc.check_in("Alice", "QQ77", "1234567890", "12 High St", 2, 1010)
        .unwrap();
    svc.check_out("XYZ1", 1100).unwrap();

    let history = svc.search_by_owner("Alice").unwrap();
    assert_eq!(history.total_entries, 2);
    assert_eq!(history.plates, vec!["XYZ1".to_string(), "QQ77".to_string()]);
}

#[test]
fn reconcile_is_quiet_on_consistent_stores() {
    let (svc, _dir) = setup("reconcile_ok", 3);
    svc.check_in("Alice", "AA1", "1234567890", "12 High St", 1, 1000)
        .unwrap();

    assert!(reconcile::scan(&svc).unwrap().is_empty());
}

#[test]
fn reconcile_reports_both_directions() {
    let (svc, dir) = setup("reconcile_bad", 3);
    svc.check_in("Alice", "AA1", "1234567890", "12 High St", 1, 1000)
        .unwrap();

    // Free the spot directly in the table; the open session now dangles.
    let path = dir.join("parking_spots.txt");
    let table = fs::read_to_string(&path).unwrap();
    fs::write(&path, table.replace("1 AA1 1 1000", "1 EMPTY 0 0")).unwrap();

    let findings = reconcile::scan(&svc).unwrap();
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("AA1"));
    assert!(findings[0].contains("empty"));

    // Now the opposite direction: occupied spot without an open session.
    let table = fs::read_to_string(&path).unwrap();
    fs::write(&path, table.replace("2 EMPTY 0 0", "2 GHOST 1 2000")).unwrap();

    let findings = reconcile::scan(&svc).unwrap();
    assert_eq!(findings.len(), 2);
    assert!(findings.iter().any(|f| f.contains("GHOST")));
}
