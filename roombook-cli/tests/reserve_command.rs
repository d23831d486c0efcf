//! Integration tests for the reserve command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn reserve_prints_id_and_decrements_capacity() {
    let env = TestEnv::new();

    let id = env.reserve_simple("Alice", "101", "2024-06-01", "10:00", "2");
    assert_eq!(id, 1);
    assert_eq!(env.capacity_of(101), 29);
}

#[test]
fn reserve_creates_snapshot_file() {
    let env = TestEnv::new();
    env.reserve_simple("Alice", "101", "2024-06-01", "10:00", "2");

    assert!(env.snapshot_path().exists());
    let raw = std::fs::read_to_string(env.snapshot_path()).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(snapshot["rooms"].as_array().unwrap().len(), 6);
}

#[test]
fn reserve_overlapping_window_exits_one() {
    let env = TestEnv::new();
    env.reserve_simple("Alice", "101", "2024-06-01", "10:00", "2");

    env.command()
        .args(["reserve", "--name", "Bob", "--room", "101"])
        .args(["--date", "2024-06-01", "--start", "11:00", "--hours", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Room is already booked or at capacity.",
        ));

    // The rejection changed nothing
    assert_eq!(env.capacity_of(101), 29);
}

#[test]
fn reserve_touching_window_accepted() {
    let env = TestEnv::new();
    env.reserve_simple("Alice", "101", "2024-06-01", "10:00", "2");

    // Starts exactly where the first ends
    env.command()
        .args(["reserve", "--name", "Bob", "--room", "101"])
        .args(["--date", "2024-06-01", "--start", "12:00", "--hours", "1"])
        .assert()
        .success();

    assert_eq!(env.capacity_of(101), 28);
}

#[test]
fn reserve_full_room_exits_one() {
    let env = TestEnv::new();

    // Room 103 seeds with zero capacity
    env.command()
        .args(["reserve", "--name", "Alice", "--room", "103"])
        .args(["--date", "2024-06-01", "--start", "10:00", "--hours", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Room is already booked or at capacity.",
        ));
}

#[test]
fn reserve_unknown_room_exits_one() {
    let env = TestEnv::new();

    env.command()
        .args(["reserve", "--name", "Alice", "--room", "999"])
        .args(["--date", "2024-06-01", "--start", "10:00", "--hours", "1"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn reserve_malformed_date_exits_four() {
    let env = TestEnv::new();

    env.command()
        .args(["reserve", "--name", "Alice", "--room", "101"])
        .args(["--date", "June 1st", "--start", "10:00", "--hours", "1"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn reserve_malformed_duration_exits_four() {
    let env = TestEnv::new();

    for bad in ["zero", "0", "-2", "1.5"] {
        env.command()
            .args(["reserve", "--name", "Alice", "--room", "101"])
            .args(["--date", "2024-06-01", "--start", "10:00", "--hours", bad])
            .assert()
            .failure()
            .code(4);
    }
}

#[test]
fn reserve_empty_name_exits_four() {
    let env = TestEnv::new();

    env.command()
        .args(["reserve", "--name", "  ", "--room", "101"])
        .args(["--date", "2024-06-01", "--start", "10:00", "--hours", "1"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn reserve_ids_are_sequential_across_invocations() {
    let env = TestEnv::new();

    let first = env.reserve_simple("Alice", "101", "2024-06-01", "08:00", "1");
    let second = env.reserve_simple("Bob", "102", "2024-06-01", "08:00", "1");
    let third = env.reserve_simple("Carol", "101", "2024-06-01", "09:00", "1");

    assert_eq!((first, second, third), (1, 2, 3));
}

#[test]
fn same_window_in_other_room_accepted() {
    let env = TestEnv::new();

    env.reserve_simple("Alice", "101", "2024-06-01", "10:00", "2");
    env.reserve_simple("Bob", "102", "2024-06-01", "10:00", "2");

    assert_eq!(env.capacity_of(101), 29);
    assert_eq!(env.capacity_of(102), 24);
}
