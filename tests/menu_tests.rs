use predicates::str::contains;

mod common;
use common::{carpark, init_lot, init_lot_with_two_cars, setup_data_dir};

#[test]
fn menu_quits_cleanly_on_exit_choice() {
    let dir = setup_data_dir("menu_quit");
    init_lot(&dir);

    carpark()
        .args(["--data-dir", &dir, "menu"])
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(contains("CAR PARK SYSTEM"))
        .stdout(contains("Goodbye."));
}

#[test]
fn menu_quits_cleanly_on_eof() {
    let dir = setup_data_dir("menu_eof");
    init_lot(&dir);

    carpark()
        .args(["--data-dir", &dir, "menu"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Goodbye."));
}

#[test]
fn menu_drives_a_full_checkin_and_checkout() {
    let dir = setup_data_dir("menu_cycle");
    init_lot(&dir);

    // 2 = check in (name, plate, phone, address, spot), 1 = status,
    // 3 = check out (plate), 6 = exit.
    let script = "2\nAlice Smith\nXYZ1\n1234567890\n12 High St\n2\n1\n3\nxyz1\n6\n";

    carpark()
        .args(["--data-dir", &dir, "menu"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("checked in to spot 2"))
        .stdout(contains("Cars parked: 1"))
        .stdout(contains("released from spot 2"))
        .stdout(contains("Goodbye."));
}

#[test]
fn menu_reprompts_on_invalid_phone() {
    let dir = setup_data_dir("menu_rephone");
    init_lot(&dir);

    let script = "2\nAlice Smith\nXYZ1\n12ab\n1234567890\n12 High St\n3\n6\n";

    carpark()
        .args(["--data-dir", &dir, "menu"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("10 digits required"))
        .stdout(contains("checked in to spot 3"));
}

#[test]
fn menu_checkout_on_empty_lot_returns_to_menu() {
    let dir = setup_data_dir("menu_empty_checkout");
    init_lot(&dir);

    carpark()
        .args(["--data-dir", &dir, "menu"])
        .write_stdin("3\n6\n")
        .assert()
        .success()
        .stderr(contains("No cars parked"))
        .stdout(contains("Goodbye."));
}

#[test]
fn menu_surfaces_service_errors_and_continues() {
    let dir = setup_data_dir("menu_dup");
    init_lot_with_two_cars(&dir);

    // Duplicate plate: error is printed, then the loop accepts Exit.
    let script = "2\nMallory\nxyz1\n1234567890\nNowhere 1\n9\n6\n";

    carpark()
        .args(["--data-dir", &dir, "menu"])
        .write_stdin(script)
        .assert()
        .success()
        .stderr(contains("already parked"))
        .stdout(contains("Goodbye."));
}

#[test]
fn menu_search_by_owner() {
    let dir = setup_data_dir("menu_search");
    init_lot_with_two_cars(&dir);

    carpark()
        .args(["--data-dir", &dir, "menu"])
        .write_stdin("4\nalice smith\n6\n")
        .assert()
        .success()
        .stdout(contains("Total times parked: 1"))
        .stdout(contains("1. XYZ1"));
}
