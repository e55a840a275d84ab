mod common;
use common::{SAMPLE_LOGS, hl, missing_config, temp_out, write_logs};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_path_for_single_log() {
    let cfg = missing_config("path_single");
    let logs = write_logs("path_single", SAMPLE_LOGS);

    let x = (480.0 / 1440.0) * 920.0;
    hl().args(["--config", &cfg, "path", &logs, "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "M 0,25 L {x},25 L {x},125 L 920,125"
        )));
}

#[test]
fn test_path_for_all_logs_with_custom_domain() {
    let cfg = missing_config("path_all");
    let logs = write_logs("path_all", SAMPLE_LOGS);

    let off_at = (510.0 / 1440.0) * 1440.0;
    let dr_at = (480.0 / 1440.0) * 1440.0;

    hl().args([
        "--config",
        &cfg,
        "path",
        &logs,
        "--width",
        "1440",
        "--row-height",
        "30",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(format!(
        "1\tM 0,15 L 0,15 L 0,105 L 360,105 L 360,75 L {off_at},75 L {off_at},15 L 1440,15"
    )))
    .stdout(predicate::str::contains(format!(
        "2\tM 0,15 L {dr_at},15 L {dr_at},75 L 1440,75"
    )));
}

#[test]
fn test_path_unknown_id_fails() {
    let cfg = missing_config("path_unknown_id");
    let logs = write_logs("path_unknown_id", SAMPLE_LOGS);

    hl().args(["--config", &cfg, "path", &logs, "--id", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No log found with id 99"));
}

#[test]
fn test_path_unknown_status_fails() {
    let cfg = missing_config("path_bad_status");
    let logs = write_logs(
        "path_bad_status",
        r#"[{"id": "a1", "date": "2025-03-01", "status_changes": [
            {"status": "PC", "timestamp": "2025-03-01T05:00:00"}
        ]}]"#,
    );

    hl().args(["--config", &cfg, "path", &logs, "--id", "a1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown status code: PC"));
}

#[test]
fn test_cycle_reports_total_and_percentage() {
    let cfg = missing_config("cycle_total");
    let logs = write_logs("cycle_total", SAMPLE_LOGS);

    hl().args(["--config", &cfg, "cycle", &logs])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 hrs 30 mins (10.6%)"))
        .stdout(predicate::str::contains("Logs counted: 1 of 2"));
}

#[test]
fn test_cycle_warns_about_skipped_logs() {
    let cfg = missing_config("cycle_skipped");
    let logs = write_logs(
        "cycle_skipped",
        r#"[{"id": 5, "date": "2025-03-01", "status_changes": [
            {"status": "ON", "timestamp": "2025-03-01T05:00:00"},
            {"status": "OFF", "timestamp": "not-a-time"}
        ]}]"#,
    );

    hl().args(["--config", &cfg, "cycle", &logs])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 hrs 0 mins (0.0%)"))
        .stderr(predicate::str::contains("Skipped log 5"));
}

#[test]
fn test_travel_advisory() {
    let cfg = missing_config("travel_advisory");

    hl().args(["--config", &cfg, "travel", "--from", "0,0", "--to", "1,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "It will take 133 minutes at avg speed of 50 km/h.",
        ));
}

#[test]
fn test_travel_zero_speed_fails() {
    let cfg = missing_config("travel_zero_speed");

    hl().args([
        "--config", &cfg, "travel", "--from", "0,0", "--to", "1,0", "--speed", "0",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid average speed"));
}

#[test]
fn test_sheet_written_to_file() {
    let cfg = missing_config("sheet_file");
    let logs = write_logs("sheet_file", SAMPLE_LOGS);
    let out = temp_out("sheet_file", "svg");

    hl().args(["--config", &cfg, "sheet", &logs, "--id", "1", "--out", &out])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("viewBox=\"0 0 1000 220\""));
    assert!(svg.contains("transform=\"translate(80,0)\""));
    for label in [">OFF<", ">SB<", ">DR<", ">ON<"] {
        assert!(svg.contains(label), "missing lane label {label}");
    }
}

#[test]
fn test_list_shows_logs() {
    let cfg = missing_config("list_logs");
    let logs = write_logs("list_logs", SAMPLE_LOGS);

    hl().args(["--config", &cfg, "list", &logs])
        .assert()
        .success()
        .stdout(predicate::str::contains("Log Updates"))
        .stdout(predicate::str::contains("2025-03-01"))
        .stdout(predicate::str::contains("08:30"));
}

#[test]
fn test_init_then_print_config() {
    let cfg = missing_config("init_print");

    hl().args(["--config", &cfg, "init"]).assert().success();
    assert!(fs::metadata(&cfg).is_ok());

    // second init without --force refuses to overwrite
    hl().args(["--config", &cfg, "init"]).assert().failure();

    hl().args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("row_height"))
        .stdout(predicate::str::contains("average_speed_kmh"));
}

#[test]
fn test_config_speed_is_used_for_travel() {
    let cfg = missing_config("config_speed");
    fs::write(&cfg, "average_speed_kmh: 100.0\n").expect("write config");

    hl().args(["--config", &cfg, "travel", "--from", "0,0", "--to", "1,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("It will take 67 minutes at avg speed of 100 km/h."));
}

#[test]
fn test_piped_output_has_no_color_codes() {
    let cfg = missing_config("piped_no_color");
    let logs = write_logs("piped_no_color", SAMPLE_LOGS);

    hl().args(["--config", &cfg, "cycle", &logs])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Current Cycle Used ==="))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_nan_row_height_in_config_fails() {
    let cfg = missing_config("config_nan_row");
    fs::write(&cfg, "row_height: .nan\n").expect("write config");
    let logs = write_logs("config_nan_row", SAMPLE_LOGS);

    hl().args(["--config", &cfg, "path", &logs, "--id", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("row_height must be positive"));
}
