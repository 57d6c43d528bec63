#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command with the global --test flag preset so no invocation ever reads
/// (or writes) the operator's real config file.
pub fn carpark() -> Command {
    let mut cmd = cargo_bin_cmd!("carpark");
    cmd.arg("--test");
    cmd
}

/// Create a unique test data dir inside the system temp dir and remove any
/// leftover state from a previous run.
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_carpark_data", name));
    fs::remove_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path and ensure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize an empty lot in the given data dir.
pub fn init_lot(data_dir: &str) {
    carpark()
        .args(["--data-dir", data_dir, "init"])
        .assert()
        .success();
}

/// Check one car in via the CLI.
pub fn checkin(data_dir: &str, name: &str, plate: &str, phone: &str, address: &str, spot: &str) {
    carpark()
        .args([
            "--data-dir",
            data_dir,
            "checkin",
            "--name",
            name,
            "--plate",
            plate,
            "--phone",
            phone,
            "--address",
            address,
            "--spot",
            spot,
        ])
        .assert()
        .success();
}

/// Initialize a lot and park two cars, a dataset many tests start from.
pub fn init_lot_with_two_cars(data_dir: &str) {
    init_lot(data_dir);
    checkin(data_dir, "Alice Smith", "XYZ1", "1234567890", "12 High St", "2");
    checkin(data_dir, "Bob Jones", "AB99", "0987654321", "3 Elm Rd", "5");
}

pub fn spots_file(data_dir: &str) -> PathBuf {
    PathBuf::from(data_dir).join("parking_spots.txt")
}

pub fn history_file(data_dir: &str) -> PathBuf {
    PathBuf::from(data_dir).join("parking_history.txt")
}
