//! Tests for the activity log

use tinyembed_application::ActivityLog;

#[test]
fn test_entries_in_order() {
    let mut log = ActivityLog::new(10);
    log.push("first");
    log.push("second");

    let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn test_capacity_drops_oldest() {
    let mut log = ActivityLog::new(2);
    log.push("a");
    log.push("b");
    log.push("c");

    assert_eq!(log.len(), 2);
    let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["b", "c"]);
}

#[test]
fn test_entry_display() {
    let mut log = ActivityLog::new(1);
    log.push("Model loaded");
    let entry = log.entries().next().unwrap();
    let rendered = entry.to_string();
    assert!(rendered.starts_with('['));
    assert!(rendered.ends_with("] Model loaded"));
    assert_eq!(entry.time_of_day().len(), 8);
}

#[test]
fn test_zero_capacity_keeps_one() {
    let mut log = ActivityLog::new(0);
    log.push("x");
    assert_eq!(log.capacity(), 1);
    assert!(!log.is_empty());
}
