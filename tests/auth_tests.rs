use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{init_db, mlog, mlog_with_home, setup_test_db, test_home};

#[test]
fn test_register_login_logout_cycle() {
    let db_path = setup_test_db("auth_cycle");
    init_db(&db_path);

    mlog()
        .args(["--db", &db_path, "register", "--email", "mate@example.com", "--password", "pw"])
        .assert()
        .success()
        .stdout(contains("Registration completed!"));

    mlog()
        .args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("mate@example.com"));

    // recoverable outcome: warning, exit code 0
    mlog()
        .args(["--db", &db_path, "register", "--email", "mate@example.com", "--password", "x"])
        .assert()
        .success()
        .stdout(contains("This email is already registered."));

    mlog()
        .args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out."));

    mlog()
        .args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("Not logged in."));

    mlog()
        .args(["--db", &db_path, "login", "--email", "mate@example.com", "--password", "bad"])
        .assert()
        .success()
        .stdout(contains("Wrong email or password."));

    mlog()
        .args(["--db", &db_path, "login", "--email", "mate@example.com", "--password", "pw"])
        .assert()
        .success()
        .stdout(contains("Logged in!"));
}

#[test]
fn test_reset_password_checks_account() {
    let db_path = setup_test_db("auth_reset");
    init_db(&db_path);

    mlog()
        .args(["--db", &db_path, "register", "--email", "cook@example.com", "--password", "pw"])
        .assert()
        .success();

    mlog()
        .args(["--db", &db_path, "reset-password", "--email", "cook@example.com"])
        .assert()
        .success()
        .stdout(contains("recovery link"));

    mlog()
        .args(["--db", &db_path, "reset-password", "--email", "ghost@example.com"])
        .assert()
        .success()
        .stdout(contains("Email not found."));
}

#[test]
fn test_require_login_gates_data_commands() {
    let home = test_home("require_login");
    let db_path = setup_test_db("auth_require_login");

    let conf_dir = PathBuf::from(&home).join(".marinerlog");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("marinerlog.conf"),
        format!("database: {db_path}\nrequire_login: true\n"),
    )
    .unwrap();

    mlog_with_home(&home)
        .args(["rotation", "list"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));

    mlog_with_home(&home)
        .args(["register", "--email", "master@example.com", "--password", "pw"])
        .assert()
        .success();

    mlog_with_home(&home)
        .args(["rotation", "list"])
        .assert()
        .success()
        .stdout(contains("No upcoming or ongoing rotations."));
}
