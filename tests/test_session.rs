//! End-to-end menu sessions driven by scripted input

use course_manager::repository::CourseRepository;

mod support;
use support::harness::TestHarness;

// ============================================================================
// ADD / LIST
// ============================================================================

#[test]
fn test_add_then_list() {
    let run = TestHarness::new().run(&["3", "C01", "Intro", "3", "1", "0"]);

    assert_eq!(run.ids(), vec!["C01"]);
    let lines = run.lines();
    assert!(lines.contains(&"✓ Information of course has been added"));
    assert!(lines.contains(&"Course id  Course name          Course credit"));
    assert!(lines.contains(&"C01        Intro                3"));
    assert_eq!(lines.last(), Some(&"Exit program"));
}

#[test]
fn test_duplicate_add_is_reported_and_store_unchanged() {
    let run = TestHarness::new().run(&[
        "3", "C01", "Intro", "3", //
        "3", "c01", "Other", "2", //
        "0",
    ]);

    assert!(run.output.contains("✗ Course id 'c01' already exists"));
    let courses = run.store.list();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name(), "Intro");
    assert_eq!(courses[0].credit(), 3);
}

#[test]
fn test_add_reprompts_on_malformed_fields() {
    let run = TestHarness::new().run(&[
        "3", "C 01", "C01", "Intro Course", "Intro", "5", "0", "2", "0",
    ]);

    assert_eq!(run.ids(), vec!["C01"]);
    assert_eq!(run.store.find_by_id("C01").unwrap().credit(), 2);
    assert!(run
        .output
        .contains("Please input a string with format: [a-zA-Z0-9]+"));
    assert!(run
        .output
        .contains("Please input a string with format: [a-zA-Z0-9.+]+"));
    assert_eq!(
        run.output
            .matches("Please input an integer with format: [1-4]{1}")
            .count(),
        2
    );
}

#[test]
fn test_list_of_empty_store_shows_only_header() {
    let run = TestHarness::new().run(&["1", "0"]);
    let lines = run.lines();
    let header = lines
        .iter()
        .position(|l| *l == "Course id  Course name          Course credit")
        .unwrap();
    // Next thing printed is the menu again
    assert_eq!(lines[header + 1], "Course Management");
}

// ============================================================================
// FIND
// ============================================================================

#[test]
fn test_find_ignores_case() {
    let run = TestHarness::new()
        .with_course("C02", "Algo", 4)
        .run(&["2", "c02", "0"]);

    assert!(run.output.contains("C02        Algo                 4"));
    assert!(!run.output.contains("no course found"));
}

#[test]
fn test_find_missing_course() {
    let run = TestHarness::new()
        .with_course("C02", "Algo", 4)
        .run(&["2", "C03", "0"]);

    assert!(run.output.contains("⚠ no course found"));
}

// ============================================================================
// SORTED LIST
// ============================================================================

#[test]
fn test_sorted_listing_is_numbered_by_credit() {
    let run = TestHarness::new()
        .with_course("C03", "Data", 2)
        .with_course("C04", "OS", 1)
        .run(&["4", "0"]);

    let lines = run.lines();
    let first = lines.iter().position(|l| l.starts_with("1   C04")).unwrap();
    let second = lines.iter().position(|l| l.starts_with("2   C03")).unwrap();
    assert!(first < second);

    // Store order is untouched by sorting
    assert_eq!(run.ids(), vec!["C03", "C04"]);
}

// ============================================================================
// UPDATE CREDIT
// ============================================================================

#[test]
fn test_update_credit() {
    let run = TestHarness::new()
        .with_course("C01", "Intro", 3)
        .run(&["5", "c01", "1", "0"]);

    assert_eq!(run.store.find_by_id("C01").unwrap().credit(), 1);
    assert!(run
        .output
        .contains("✓ Credit of course c01 has been updated"));
}

#[test]
fn test_update_credit_missing_course() {
    let run = TestHarness::new()
        .with_course("C01", "Intro", 3)
        .run(&["5", "C09", "2", "0"]);

    assert!(run.output.contains("✗ Course id 'C09' does not exist"));
    assert_eq!(run.store.find_by_id("C01").unwrap().credit(), 3);
}

#[test]
fn test_update_credit_out_of_range_is_reprompted() {
    let run = TestHarness::new()
        .with_course("C01", "Intro", 3)
        .run(&["5", "C01", "7", "4", "0"]);

    assert_eq!(run.store.find_by_id("C01").unwrap().credit(), 4);
    assert!(run
        .output
        .contains("Please input an integer with format: [1-4]{1}"));
}

// ============================================================================
// MENU CONTROL
// ============================================================================

#[test]
fn test_menu_rejects_out_of_range_choice() {
    let run = TestHarness::new().run(&["9", "abc", "0"]);

    assert_eq!(
        run.output
            .matches("Please input an integer with format: [0-5]{1}")
            .count(),
        2
    );
    assert_eq!(run.lines().last(), Some(&"Exit program"));
}

#[test]
fn test_menu_lists_every_choice() {
    let run = TestHarness::new().run(&["0"]);
    for entry in [
        "1. Display all courses",
        "2. Find a course by id",
        "3. Add a course",
        "4. Display courses sorted by credit",
        "5. Update the credit of a course",
        "0. Exit",
    ] {
        assert!(run.output.contains(entry), "missing menu entry {}", entry);
    }
}

#[test]
fn test_end_of_input_mid_add_ends_session() {
    let run = TestHarness::new()
        .with_course("C01", "Intro", 3)
        .run(&["3", "C05", "Algo"]);

    assert_eq!(run.ids(), vec!["C01"]);
    assert_eq!(run.lines().last(), Some(&"Exit program"));
}

#[test]
fn test_end_of_input_at_menu_ends_session() {
    let run = TestHarness::new().run(&["1"]);
    assert_eq!(run.lines().last(), Some(&"Exit program"));
}

// ============================================================================
// JSON OUTPUT
// ============================================================================

#[test]
fn test_json_session_emits_one_event_per_line() {
    let run = TestHarness::new()
        .json()
        .run(&["3", "C01", "Intro", "3", "0"]);

    let events: Vec<serde_json::Value> = run
        .lines()
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert!(events
        .iter()
        .any(|e| e["level"] == "success" && e["msg"] == "Information of course has been added"));
    assert!(events
        .iter()
        .any(|e| e["level"] == "prompt" && e["msg"] == "Enter course name: "));
    assert_eq!(events.last().unwrap()["msg"], "Exit program");
}

#[test]
fn test_json_listings_carry_course_records() {
    let run = TestHarness::new()
        .json()
        .with_course("C03", "Data", 2)
        .with_course("C04", "OS", 1)
        .run(&["1", "4", "2", "c03", "0"]);

    let courses: Vec<serde_json::Value> = run
        .lines()
        .iter()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
        .filter_map(|e| e.get("course").cloned())
        .collect();

    // Listing, then sorted listing, then the lookup
    let ids: Vec<&str> = courses.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["C03", "C04", "C04", "C03", "C03"]);

    assert_eq!(courses[0]["name"], "Data");
    assert_eq!(courses[0]["credit"], 2);
    assert_eq!(courses[2]["name"], "OS");
    assert_eq!(courses[2]["credit"], 1);
}
