use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db, rwd, setup_test_db, temp_out, test_home};

fn today_dotted() -> String {
    chrono::Local::now().format("%d.%m.%Y").to_string()
}

fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rwd("cli_init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(Path::new(&db_path).exists());

    rwd("cli_init")
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Days:"))
        .stdout(contains("20240101_0002_add_updated_at"));
}

#[test]
fn test_action_flow_for_today() {
    let name = "cli_actions";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    rwd(name)
        .args(["--db", &db_path, "end-work"])
        .assert()
        .failure()
        .stderr(contains("'end-work' is not available while not started"));

    rwd(name)
        .args(["--db", &db_path, "start-transfer"])
        .assert()
        .success()
        .stdout(contains("now commuting to work"));

    rwd(name)
        .args(["--db", &db_path, "start-work"])
        .assert()
        .success()
        .stdout(contains("now at work"));

    rwd(name)
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("at work"))
        .stdout(contains("Running"));

    rwd(name)
        .args(["--db", &db_path, "start-transfer"])
        .assert()
        .success()
        .stdout(contains("now commuting home"));

    rwd(name)
        .args(["--db", &db_path, "end-transfer"])
        .assert()
        .success()
        .stdout(contains("now finished"));

    rwd(name)
        .args(["--db", &db_path, "start-work"])
        .assert()
        .failure()
        .stderr(contains("not available while finished"));

    rwd(name)
        .args(["--db", &db_path, "history"])
        .assert()
        .success()
        .stdout(contains(today_dotted()));

    rwd(name)
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("start-transfer").and(contains("end-transfer")));
}

#[test]
fn test_status_watch_stops_after_limit() {
    let name = "cli_watch";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    rwd(name)
        .args(["--db", &db_path, "start-transfer"])
        .assert()
        .success();

    rwd(name)
        .args(["--db", &db_path, "status", "--watch", "--for", "1"])
        .assert()
        .success()
        .stdout(contains("⏱"));
}

#[test]
fn test_export_csv_to_file() {
    let name = "cli_export";
    let db_path = setup_test_db(name);
    let out = temp_out(name, "csv");
    init_db(name, &db_path);

    rwd(name)
        .args(["--db", &db_path, "start-transfer"])
        .assert()
        .success();

    rwd(name)
        .args(["--db", &db_path, "export", "--file", &out, "--range", "all", "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("Date,Transfer-out,Work,Transfer-back,Work-hours,Transfer-hours")
    );
    assert!(lines.next().unwrap().starts_with(&format!("{},", today_dotted())));
}

#[test]
fn test_export_without_days_warns() {
    let name = "cli_export_empty";
    let db_path = setup_test_db(name);
    let out = temp_out(name, "csv");
    init_db(name, &db_path);

    rwd(name)
        .args(["--db", &db_path, "export", "--file", &out, "--range", "2001"])
        .assert()
        .success()
        .stdout(contains("No days found"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_rejects_bad_separator() {
    let name = "cli_export_sep";
    let db_path = setup_test_db(name);
    let out = temp_out(name, "csv");
    init_db(name, &db_path);

    rwd(name)
        .args(["--db", &db_path, "start-transfer"])
        .assert()
        .success();

    rwd(name)
        .args(["--db", &db_path, "export", "--file", &out, "--separator", ";;"])
        .assert()
        .failure()
        .stderr(contains("single ASCII character"));
}

#[test]
fn test_export_into_configured_dir() {
    let name = "cli_export_dir";
    let home = test_home(name);
    let export_dir = home.join("exports");
    fs::remove_dir_all(&export_dir).ok();

    let conf_dir = home.join(".rworkday");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("rworkday.conf"),
        format!(
            "export_dir: '{}'\ncsv_separator: ';'\n",
            export_dir.to_string_lossy()
        ),
    )
    .unwrap();

    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    rwd(name)
        .args(["--db", &db_path, "start-transfer"])
        .assert()
        .success();

    rwd(name)
        .args(["--db", &db_path, "export"])
        .assert()
        .success();

    let stamp = chrono::Local::now().format("%Y_%m_%d").to_string();
    let file = export_dir.join(format!("worktimes_{stamp}-{stamp}.csv"));
    let content = fs::read_to_string(file).unwrap();
    assert!(content.starts_with("Date;Transfer-out;"));
}

#[test]
fn test_chart_writes_svg() {
    let name = "cli_chart";
    let db_path = setup_test_db(name);
    let out = temp_out(name, "svg");
    init_db(name, &db_path);

    rwd(name)
        .args(["--db", &db_path, "start-transfer"])
        .assert()
        .success();

    rwd(name)
        .args(["--db", &db_path, "chart", "--file", &out, "--days", "3"])
        .assert()
        .success()
        .stdout(contains("Chart written"));

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains(&today_dotted()));
}

#[test]
fn test_del_asks_for_confirmation() {
    let name = "cli_del";
    let db_path = setup_test_db(name);
    init_db(name, &db_path);

    rwd(name)
        .args(["--db", &db_path, "start-transfer"])
        .assert()
        .success();

    rwd(name)
        .args(["--db", &db_path, "del", &today_iso()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rwd(name)
        .args(["--db", &db_path, "del", &today_iso()])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rwd(name)
        .args(["--db", &db_path, "del", &today_iso()])
        .assert()
        .failure()
        .stderr(contains("No work day stored"));
}

#[test]
fn test_backup_compressed() {
    let name = "cli_backup";
    let db_path = setup_test_db(name);
    let out = temp_out(name, "sqlite");
    let zipped = temp_out(name, "zip");
    init_db(name, &db_path);

    rwd(name)
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&zipped).exists());
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_config_check_and_migrate() {
    let name = "cli_config";
    let home = test_home(name);
    let conf_dir = home.join(".rworkday");
    fs::create_dir_all(&conf_dir).unwrap();
    let conf = conf_dir.join("rworkday.conf");
    fs::write(&conf, "csv_separator: ';'\n").unwrap();

    rwd(name)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields").and(contains("chart_window_start")));

    rwd(name)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    let content = fs::read_to_string(&conf).unwrap();
    assert!(content.contains("chart_window_start"));
    assert!(content.contains("csv_separator:"));
    assert!(content.contains(';'));

    rwd(name)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}
