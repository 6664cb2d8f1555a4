use marinerlog::models::TrainingDocument;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, mlog, setup_test_db, stored_ids, temp_out};

fn add_doc(db_path: &str, name: &str, expires: Option<&str>) {
    let mut args = vec![
        "--db", db_path, "doc", "add", "--name", name, "--issued", "2020-01-01",
    ];
    if let Some(e) = expires {
        args.extend(["--expires", e]);
    }
    mlog().args(&args).assert().success();
}

#[test]
fn test_doc_list_shows_status() {
    let db_path = setup_test_db("doc_status");
    init_db(&db_path);

    add_doc(&db_path, "STCW Basic Safety", Some("2025-07-01"));
    add_doc(&db_path, "GMDSS GOC", Some("2025-05-01"));
    add_doc(&db_path, "Master 3000GT", Some("2030-01-01"));
    add_doc(&db_path, "Seaman's Book", None);

    mlog()
        .args(["--db", &db_path, "--today", "2025-06-01", "doc", "list"])
        .assert()
        .success()
        .stdout(contains("expiring"))
        .stdout(contains("expired"))
        .stdout(contains("valid"))
        .stdout(contains("Seaman's Book"));

    mlog()
        .args(["--db", &db_path, "--today", "2025-06-01", "dashboard"])
        .assert()
        .success()
        .stdout(contains("GMDSS GOC"))
        .stdout(contains("STCW Basic Safety"));
}

#[test]
fn test_doc_list_filters_by_type() {
    let db_path = setup_test_db("doc_filter");
    init_db(&db_path);

    mlog()
        .args([
            "--db", &db_path, "doc", "add", "--name", "Passport", "--type", "document",
            "--issued", "2022-05-05", "--expires", "2032-05-04",
        ])
        .assert()
        .success();
    add_doc(&db_path, "Advanced Fire Fighting", Some("2027-01-01"));

    mlog()
        .args(["--db", &db_path, "doc", "list", "--type", "document"])
        .assert()
        .success()
        .stdout(contains("Passport"))
        .stdout(contains("Advanced Fire Fighting").not());

    mlog()
        .args(["--db", &db_path, "doc", "list", "--type", "diploma"])
        .assert()
        .failure()
        .stderr(contains("Invalid category"));
}

#[test]
fn test_doc_attachment_round_trip() {
    let db_path = setup_test_db("doc_attachment");
    init_db(&db_path);

    let src = temp_out("doc_attachment_src", "pdf");
    fs::write(&src, b"%PDF-1.4 certificate scan").unwrap();

    mlog()
        .args([
            "--db", &db_path, "doc", "add", "--name", "Medical", "--issued", "2024-01-01",
            "--expires", "2026-01-01", "--attach", &src,
        ])
        .assert()
        .success();

    let ids = stored_ids::<TrainingDocument>(&db_path);
    let out = temp_out("doc_attachment_dst", "pdf");

    mlog()
        .args(["--db", &db_path, "doc", "attachment", &ids[0], "--out", &out])
        .assert()
        .success()
        .stdout(contains("written to"));

    assert_eq!(fs::read(&out).unwrap(), b"%PDF-1.4 certificate scan");
}

#[test]
fn test_doc_oversized_attachment_is_rejected() {
    let db_path = setup_test_db("doc_big_attachment");
    init_db(&db_path);

    let src = temp_out("doc_big_attachment", "bin");
    fs::write(&src, vec![0u8; 1_572_865]).unwrap();

    mlog()
        .args([
            "--db", &db_path, "doc", "add", "--name", "Huge scan", "--issued", "2024-01-01",
            "--attach", &src,
        ])
        .assert()
        .failure()
        .stderr(contains("Attachment too large"));

    assert!(stored_ids::<TrainingDocument>(&db_path).is_empty());
}

#[test]
fn test_doc_edit_and_missing_attachment() {
    let db_path = setup_test_db("doc_edit");
    init_db(&db_path);
    add_doc(&db_path, "Tanker Familiarization", Some("2025-07-01"));

    let id = stored_ids::<TrainingDocument>(&db_path).remove(0);

    mlog()
        .args(["--db", &db_path, "doc", "edit", &id[..8], "--no-expiry"])
        .assert()
        .success();

    mlog()
        .args(["--db", &db_path, "--today", "2025-06-01", "doc", "list"])
        .assert()
        .success()
        .stdout(contains("valid"))
        .stdout(contains("expiring").not());

    mlog()
        .args(["--db", &db_path, "doc", "attachment", &id[..8], "--out", "/tmp/never.bin"])
        .assert()
        .failure()
        .stderr(contains("has no attachment"));
}

#[test]
fn test_doc_expiry_before_issue_is_rejected() {
    let db_path = setup_test_db("doc_reversed");
    init_db(&db_path);

    mlog()
        .args([
            "--db", &db_path, "doc", "add", "--name", "Backwards", "--issued", "2024-01-01",
            "--expires", "2023-01-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));
}
