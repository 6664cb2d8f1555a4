#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a scratch directory so no real
/// configuration is read.
pub fn mlog() -> Command {
    let mut cmd = cargo_bin_cmd!("marinerlog");
    cmd.env("HOME", test_home("shared"));
    cmd
}

/// Same as [`mlog`], with a HOME of its own (for config-file tests).
pub fn mlog_with_home(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("marinerlog");
    cmd.env("HOME", home);
    cmd
}

pub fn test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("marinerlog_home_{}", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_marinerlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    mlog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    // completed
    mlog()
        .args([
            "--db",
            db_path,
            "rotation",
            "add",
            "--vessel",
            "Skandi Açu",
            "--company",
            "DOF",
            "--position",
            "2nd Officer",
            "--start",
            "2025-01-01",
            "--end",
            "2025-01-28",
            "--regime",
            "28x28",
        ])
        .assert()
        .success();

    // upcoming
    mlog()
        .args([
            "--db",
            db_path,
            "rotation",
            "add",
            "--vessel",
            "Normand Flower",
            "--start",
            "2025-09-01",
            "--regime",
            "14x14",
        ])
        .assert()
        .success();

    mlog()
        .args([
            "--db",
            db_path,
            "seatime",
            "add",
            "--vessel",
            "Far Sailor",
            "--start",
            "2020-01-01",
            "--end",
            "2020-01-10",
        ])
        .assert()
        .success();
}

/// Full ids of a collection, read back through the library.
pub fn stored_ids<T: marinerlog::db::store::Record>(db_path: &str) -> Vec<String> {
    let pool = marinerlog::db::pool::DbPool::open(db_path).expect("open db");
    marinerlog::db::store::CollectionStore::<T>::new(&pool)
        .list()
        .expect("list")
        .iter()
        .map(|r| r.id().to_string())
        .collect()
}
