use chrono::NaiveDate;
use daydial::core::add::AddLogic;
use daydial::core::cleanup::CleanupLogic;
use daydial::core::del::DeleteLogic;
use daydial::core::edit::EditLogic;
use daydial::errors::AppError;
use daydial::models::event::Event;
use daydial::models::recurrence::Recurrence;
use daydial::store::{EventStore, JsonStore};
use std::fs;
use tempfile::tempdir;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

#[test]
fn missing_or_empty_catalog_loads_as_empty() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    let store = JsonStore::new(&path);
    assert!(store.load().expect("load missing").is_empty());

    fs::write(&path, "  \n").expect("write");
    assert!(store.load().expect("load blank").is_empty());
}

#[test]
fn init_creates_parent_dirs_once() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("catalog.json");
    let store = JsonStore::new(&path);

    assert!(store.init().expect("first init"));
    assert!(path.exists());
    assert!(!store.init().expect("second init"));
}

#[test]
fn add_assigns_unique_ids_and_persists() {
    let dir = tempdir().expect("tempdir");
    let store = JsonStore::new(dir.path().join("catalog.json"));

    let a = AddLogic::apply(&store, Event::new("Standup", day("2024-01-01"), "09:00", "09:15"))
        .expect("add a");
    let b = AddLogic::apply(&store, Event::new("Standup", day("2024-01-02"), "09:00", "09:15"))
        .expect("add b");

    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);

    let loaded = store.load().expect("load");
    assert_eq!(loaded, vec![a.clone(), b]);
    assert_eq!(store.find(&a.id).expect("find").title, "Standup");
}

#[test]
fn add_keeps_a_caller_supplied_id() {
    let dir = tempdir().expect("tempdir");
    let store = JsonStore::new(dir.path().join("catalog.json"));
    let stored = AddLogic::apply(
        &store,
        Event::new("Gym", day("2024-01-01"), "18:00", "19:00").with_id("gym-1"),
    )
    .expect("add");
    assert_eq!(stored.id, "gym-1");
}

#[test]
fn replace_rewrites_the_whole_record() {
    let dir = tempdir().expect("tempdir");
    let store = JsonStore::new(dir.path().join("catalog.json"));
    let mut ev = AddLogic::apply(&store, Event::new("Draft", day("2024-01-01"), "10:00", "11:00"))
        .expect("add");

    ev.title = "Final".to_string();
    ev.end = "12:30".to_string();
    ev.recurrence = Recurrence::Weekly;
    EditLogic::replace(&store, ev.clone()).expect("replace");

    assert_eq!(store.find(&ev.id).expect("find"), ev);

    let done = EditLogic::set_completed(&store, &ev.id, true).expect("done");
    assert!(done.completed);
    assert!(store.find(&ev.id).expect("find").completed);
}

#[test]
fn unknown_ids_are_reported() {
    let dir = tempdir().expect("tempdir");
    let store = JsonStore::new(dir.path().join("catalog.json"));

    let ghost = Event::new("Ghost", day("2024-01-01"), "10:00", "11:00").with_id("nope");
    assert!(matches!(
        EditLogic::replace(&store, ghost),
        Err(AppError::EventNotFound(id)) if id == "nope"
    ));
    assert!(matches!(
        DeleteLogic::apply(&store, "nope"),
        Err(AppError::EventNotFound(_))
    ));
}

#[test]
fn delete_removes_only_the_target() {
    let dir = tempdir().expect("tempdir");
    let store = JsonStore::new(dir.path().join("catalog.json"));
    let a = AddLogic::apply(&store, Event::new("A", day("2024-01-01"), "08:00", "09:00")).expect("a");
    let b = AddLogic::apply(&store, Event::new("B", day("2024-01-01"), "10:00", "11:00")).expect("b");

    let removed = DeleteLogic::apply(&store, &a.id).expect("delete");
    assert_eq!(removed.id, a.id);
    assert_eq!(store.load().expect("load"), vec![b]);
}

#[test]
fn reads_bare_arrays_and_writes_wrapped_object() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"[{"id":"x1","title":"Imported","date":"2024-03-01","start":"07:00","end":"08:00","recurrence":"daily"}]"#,
    )
    .expect("write");

    let store = JsonStore::new(&path);
    let events = store.load().expect("load bare");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].recurrence, Recurrence::Daily);
    assert!(!events[0].completed);
    assert!(events[0].color.is_empty());

    store.save(&events).expect("save");
    let raw = fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["events"][0]["id"], "x1");
    assert_eq!(value["events"][0]["date"], "2024-03-01");

    assert_eq!(store.load().expect("reload"), events);
}

#[test]
fn reads_object_with_extra_keys() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{"version":1,"events":[{"id":"y","date":"2024-03-01","start":"22:00","end":"01:00"}]}"#,
    )
    .expect("write");

    let events = JsonStore::new(&path).load().expect("load");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].recurrence, Recurrence::None);
    assert!(events[0].crosses_midnight());
}

#[test]
fn corrupt_catalog_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, "{ not json").expect("write");
    assert!(matches!(JsonStore::new(&path).load(), Err(AppError::Catalog(_))));
}

#[test]
fn cleanup_keeps_recent_and_recurring_events() {
    let events = vec![
        Event::new("old", day("2023-12-01"), "08:00", "09:00").with_id("old"),
        Event::new("recent", day("2024-03-01"), "08:00", "09:00").with_id("recent"),
        Event::new("habit", day("2020-05-05"), "07:00", "07:30")
            .with_id("habit")
            .with_recurrence(Recurrence::Weekly),
    ];

    let kept: Vec<String> = CleanupLogic::retained(events.clone(), 6, day("2024-07-01"))
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(kept, vec!["recent", "habit"]);

    assert!(CleanupLogic::retained(events, 0, day("2024-07-01")).is_empty());
}

#[test]
fn cleanup_reports_removed_count() {
    let dir = tempdir().expect("tempdir");
    let store = JsonStore::new(dir.path().join("catalog.json"));
    store
        .save(&[
            Event::new("a", day("2020-01-01"), "08:00", "09:00").with_id("a"),
            Event::new("b", day("2020-01-02"), "08:00", "09:00").with_id("b"),
            Event::new("c", day("2024-06-30"), "08:00", "09:00").with_id("c"),
        ])
        .expect("seed");

    let removed = CleanupLogic::apply(&store, 12, day("2024-07-01")).expect("cleanup");
    assert_eq!(removed, 2);
    assert_eq!(store.load().expect("load").len(), 1);
}
