use marinerlog::models::Rotation;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, mlog, setup_test_db, stored_ids};

#[test]
fn test_rotation_list_shows_only_active_queue() {
    let db_path = setup_test_db("rotation_list_active");
    init_db_with_data(&db_path);

    mlog()
        .args(["--db", &db_path, "--today", "2025-06-01", "rotation", "list"])
        .assert()
        .success()
        .stdout(contains("Normand Flower"))
        .stdout(contains("planned"))
        .stdout(contains("Skandi Açu").not());

    mlog()
        .args(["--db", &db_path, "--today", "2025-06-01", "rotation", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Normand Flower"))
        .stdout(contains("Skandi Açu"))
        .stdout(contains("completed"));
}

#[test]
fn test_rotation_add_prefills_end_from_regime() {
    let db_path = setup_test_db("rotation_prefill_end");
    init_db(&db_path);

    mlog()
        .args([
            "--db",
            &db_path,
            "rotation",
            "add",
            "--vessel",
            "Siem Diamond",
            "--start",
            "2025-03-01",
            "--regime",
            "21x21",
        ])
        .assert()
        .success()
        .stdout(contains("2025-03-22").or(contains("22/03/2025")));
}

#[test]
fn test_rotation_repeat_generates_schedule() {
    let db_path = setup_test_db("rotation_repeat");
    init_db(&db_path);

    mlog()
        .args([
            "--db",
            &db_path,
            "rotation",
            "add",
            "--vessel",
            "Bourbon Orca",
            "--start",
            "2025-01-01",
            "--regime",
            "14x14",
            "--repeat",
        ])
        .assert()
        .success()
        .stdout(contains("12 rotations scheduled (14x14)"));

    assert_eq!(stored_ids::<Rotation>(&db_path).len(), 12);
}

#[test]
fn test_rotation_rejects_end_before_start() {
    let db_path = setup_test_db("rotation_reversed");
    init_db(&db_path);

    mlog()
        .args([
            "--db",
            &db_path,
            "rotation",
            "add",
            "--vessel",
            "Backwards",
            "--start",
            "2025-03-10",
            "--end",
            "2025-03-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));

    assert!(stored_ids::<Rotation>(&db_path).is_empty());
}

#[test]
fn test_rotation_rejects_bad_date() {
    let db_path = setup_test_db("rotation_bad_date");
    init_db(&db_path);

    mlog()
        .args([
            "--db",
            &db_path,
            "rotation",
            "add",
            "--vessel",
            "Nowhere",
            "--start",
            "2025-02-30",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_rotation_edit_and_delete_by_prefix() {
    let db_path = setup_test_db("rotation_edit_del");
    init_db_with_data(&db_path);

    let ids = stored_ids::<Rotation>(&db_path);
    assert_eq!(ids.len(), 2);
    let target = &ids[0]; // most recent start: Normand Flower

    mlog()
        .args([
            "--db",
            &db_path,
            "rotation",
            "edit",
            &target[..8],
            "--position",
            "Chief Officer",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    mlog()
        .args(["--db", &db_path, "--today", "2025-06-01", "rotation", "list"])
        .assert()
        .success()
        .stdout(contains("Chief Officer"));

    mlog()
        .args(["--db", &db_path, "rotation", "del", &target[..8]])
        .assert()
        .success()
        .stdout(contains("Normand Flower"));

    assert_eq!(stored_ids::<Rotation>(&db_path).len(), 1);

    mlog()
        .args(["--db", &db_path, "rotation", "del", "ffffffff-none"])
        .assert()
        .failure()
        .stderr(contains("No rotations record matches"));
}

#[test]
fn test_rotation_clear_needs_confirmation() {
    let db_path = setup_test_db("rotation_clear");
    init_db_with_data(&db_path);

    mlog()
        .args(["--db", &db_path, "rotation", "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
    assert_eq!(stored_ids::<Rotation>(&db_path).len(), 2);

    mlog()
        .args(["--db", &db_path, "rotation", "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 rotation(s) deleted."));
    assert!(stored_ids::<Rotation>(&db_path).is_empty());
}

#[test]
fn test_dashboard_while_onboard() {
    let db_path = setup_test_db("dashboard_onboard");
    init_db_with_data(&db_path);

    // Skandi Açu runs 2025-01-01..2025-01-28, plus 10 historical days
    mlog()
        .args(["--db", &db_path, "--today", "2025-01-10", "dashboard"])
        .assert()
        .success()
        .stdout(contains("Onboard"))
        .stdout(contains("Skandi Açu"))
        .stdout(contains("10 days"))
        .stdout(contains("20 days"))
        .stdout(contains("19 days left"));
}

#[test]
fn test_dashboard_ashore() {
    let db_path = setup_test_db("dashboard_ashore");
    init_db(&db_path);

    mlog()
        .args(["--db", &db_path, "--today", "2025-01-10", "dashboard"])
        .assert()
        .success()
        .stdout(contains("ashore, nothing planned"))
        .stdout(contains("0 days"));
}

#[test]
fn test_calendar_month() {
    let db_path = setup_test_db("calendar_month");
    init_db_with_data(&db_path);

    mlog()
        .args([
            "--db",
            &db_path,
            "--today",
            "2025-01-10",
            "calendar",
            "--month",
            "2025-01",
        ])
        .assert()
        .success()
        .stdout(contains("2025-01"))
        .stdout(contains("Skandi Açu"));

    mlog()
        .args(["--db", &db_path, "calendar", "--month", "2025-13"])
        .assert()
        .failure();
}
