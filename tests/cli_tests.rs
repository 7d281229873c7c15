mod common;

use common::{add_event, dd, dial_point, init_catalog, setup_test_catalog, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn init_creates_empty_catalog() {
    let catalog = setup_test_catalog("cli_init");

    dd().args(["--catalog", &catalog, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Empty catalog created"));

    let raw = fs::read_to_string(&catalog).expect("catalog written");
    assert!(raw.contains("\"events\""));

    dd().args(["--catalog", &catalog, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog already present"));
}

#[test]
fn add_then_list_shows_event_and_spill_over() {
    let catalog = setup_test_catalog("cli_list");
    init_catalog(&catalog);
    let id = add_event(&catalog, "2024-01-01", "Night shift", "23:00", "01:00", &[]);
    assert!(!id.is_empty());

    dd().args(["--catalog", &catalog, "--test", "list", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Night shift"))
        .stdout(predicate::str::contains("23:00-24:00"))
        .stdout(predicate::str::contains("1 event(s)"));

    dd().args(["--catalog", &catalog, "--test", "list", "2024-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00-01:00"));

    dd().args(["--catalog", &catalog, "--test", "list", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events"));
}

#[test]
fn add_rejects_invalid_input() {
    let catalog = setup_test_catalog("cli_invalid");
    init_catalog(&catalog);

    dd().args([
        "--catalog", &catalog, "--test", "add", "2024-01-01", "--title", "Bad", "--start", "25:00",
        "--end", "26:00",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid time format"));

    dd().args([
        "--catalog", &catalog, "--test", "add", "2024-13-01", "--title", "Bad", "--start", "08:00",
        "--end", "09:00",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid date format"));

    dd().args([
        "--catalog", &catalog, "--test", "add", "2024-01-01", "--title", "Bad", "--start", "08:00",
        "--end", "09:00", "--recurrence", "yearly",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid recurrence"));
}

#[test]
fn dial_prints_ring_tables() {
    let catalog = setup_test_catalog("cli_dial");
    init_catalog(&catalog);
    add_event(&catalog, "2024-01-01", "Dinner", "22:00", "23:00", &[]);
    add_event(&catalog, "2024-01-01", "Gym", "08:00", "09:00", &["--recurrence", "weekly"]);

    dd().args(["--catalog", &catalog, "--test", "dial", "2024-01-08", "--no-sleep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("240.0°–270.0°"))
        .stdout(predicate::str::contains("Gym"))
        .stdout(predicate::str::contains("Dinner").not());

    dd().args(["--catalog", &catalog, "--test", "dial", "2024-01-01", "--no-sleep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("300.0°–330.0°"))
        .stdout(predicate::str::contains("Dinner"))
        .stdout(predicate::str::contains("2 event(s)"))
        .stdout(predicate::str::contains("Busy").not());
}

#[test]
fn done_and_edit_update_the_record() {
    let catalog = setup_test_catalog("cli_edit");
    init_catalog(&catalog);
    let id = add_event(&catalog, "2024-02-01", "Review", "14:00", "15:00", &[]);

    dd().args(["--catalog", &catalog, "--test", "edit", &id, "--title", "Code review", "--end", "15:30"])
        .assert()
        .success();
    dd().args(["--catalog", &catalog, "--test", "done", &id])
        .assert()
        .success();

    let raw = fs::read_to_string(&catalog).expect("catalog");
    assert!(raw.contains("Code review"));
    assert!(raw.contains("15:30"));
    assert!(raw.contains("\"completed\": true"));

    dd().args(["--catalog", &catalog, "--test", "edit", "missing-id", "--title", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Event not found"));
}

#[test]
fn pointer_tap_and_drag() {
    let catalog = setup_test_catalog("cli_pointer");
    init_catalog(&catalog);

    let down = dial_point(85.0, 88.0);
    let up = dial_point(85.0, 92.0);
    dd().args([
        "--catalog", &catalog, "--test", "pointer", "2024-01-01", "--down", &down, "--up", &up,
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Selected hour 2"));

    let down = dial_point(85.0, 240.0);
    let mid = dial_point(85.0, 260.0);
    let up = dial_point(85.0, 285.0);
    dd().args([
        "--catalog", &catalog, "--test", "pointer", "2024-01-01", "--down", &down, "--move", &mid,
        "--up", &up, "--add", "Focus block",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Selected range 08:00-09:30"))
    .stdout(predicate::str::contains("Added 'Focus block'"));

    // The new arc now sits under a tap at 08:30.
    let on_arc = dial_point(85.0, 255.0);
    dd().args([
        "--catalog", &catalog, "--test", "pointer", "2024-01-01", "--down", &on_arc, "--up", &on_arc,
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Selected event 'Focus block'"));
}

#[test]
fn pointer_on_locked_dial_selects_nothing() {
    let catalog = setup_test_catalog("cli_pointer_locked");
    init_catalog(&catalog);
    let p = dial_point(150.0, 45.0);

    dd().args([
        "--catalog", &catalog, "--test", "pointer", "2024-01-01", "--down", &p, "--up", &p,
        "--locked",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("locked"));

    dd().args(["--catalog", &catalog, "--test", "pointer", "--down", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pointer coordinates"));
}

#[test]
fn export_svg_and_json() {
    let catalog = setup_test_catalog("cli_export");
    init_catalog(&catalog);
    let id = add_event(&catalog, "2024-01-01", "Lunch", "11:30", "12:30", &[]);

    let svg = temp_out("cli_export_svg", "svg");
    dd().args([
        "--catalog", &catalog, "--test", "export", "2024-01-01", "--format", "svg", "--file", &svg,
        "--focus", &id,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&svg).expect("svg written");
    assert!(content.starts_with("<svg"));
    assert_eq!(content.matches("class=\"event\"").count(), 2);
    assert!(content.contains(&format!("data-id=\"{}\"", id)));
    assert!(content.contains("FOCUS MODE"));

    let json = temp_out("cli_export_json", "json");
    dd().args([
        "--catalog", &catalog, "--test", "export", "2024-01-01", "--format", "json", "--file", &json,
    ])
    .assert()
    .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).expect("json written")).expect("valid json");
    assert_eq!(value["date"], "2024-01-01");
    assert_eq!(value["rings"].as_array().map(|r| r.len()), Some(2));

    // Existing file with --force is overwritten without prompting.
    dd().args([
        "--catalog", &catalog, "--test", "export", "2024-01-01", "--format", "json", "--file", &json,
        "--force",
    ])
    .assert()
    .success();
}

#[test]
fn delete_and_cleanup() {
    let catalog = setup_test_catalog("cli_delete");
    init_catalog(&catalog);
    let id = add_event(&catalog, "2024-01-01", "Temp", "10:00", "11:00", &[]);
    add_event(&catalog, "2024-01-01", "Other", "12:00", "13:00", &[]);

    dd().args(["--catalog", &catalog, "--test", "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    dd().args(["--catalog", &catalog, "--test", "cleanup", "--months", "0", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 event(s) removed"));

    dd().args(["--catalog", &catalog, "--test", "list", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events"));
}

#[test]
fn config_print_shows_defaults() {
    let catalog = setup_test_catalog("cli_config");

    dd().args(["--catalog", &catalog, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sleep_start"))
        .stdout(predicate::str::contains("am_base_radius"))
        .stdout(predicate::str::contains(catalog.as_str()));
}
