//! Runs the `confusion` binary against the built-in seed.

use std::process::Command;

fn confusion_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_confusion"));
    // Keep the user's config file out of the way.
    cmd.arg("--config").arg("/nonexistent/confusion/config.toml");
    cmd.env_remove("RUST_LOG").env_remove("CONFUSION_LOG");
    cmd
}

#[test]
fn menu_lists_dishes() {
    let output = confusion_cmd().arg("menu").output().expect("run menu");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Menu\n"));
    assert!(stdout.contains("Uthappizza"));
    assert!(stdout.contains("ElaiCheese Cake"));
}

#[test]
fn dish_shows_comments_with_short_dates() {
    let output = confusion_cmd().args(["dish", "0"]).output().expect("run dish");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Menu / Uthappizza"));
    assert!(stdout.contains("-- John Lemon, Oct 16, 2012"));
}

#[test]
fn unknown_dish_fails() {
    let output = confusion_cmd().args(["dish", "99"]).output().expect("run dish");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Dish 99 not found"));
}

#[test]
fn comment_is_appended_to_dish() {
    let output = confusion_cmd()
        .args(["comment", "3", "--rating", "5", "--author", "Alice", "--comment", "Great!"])
        .output()
        .expect("run comment");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Great!"));
    assert!(stdout.contains("-- Alice, "));
}

#[test]
fn short_author_is_rejected_with_field_message() {
    let output = confusion_cmd()
        .args(["comment", "3", "--author", "Al", "--comment", "Hi"])
        .output()
        .expect("run comment");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Must be greater than 2 characters"));
}

#[test]
fn out_of_range_rating_is_a_usage_error() {
    let output = confusion_cmd()
        .args(["comment", "0", "--rating", "6", "--author", "Alice", "--comment", "x"])
        .output()
        .expect("run comment");
    assert!(!output.status.success());
}

#[test]
fn state_dumps_json() {
    let output = confusion_cmd().arg("state").output().expect("run state");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["dishes"].as_array().map(Vec::len), Some(4));
    assert!(json["comments"]["errMessage"].is_null());
    assert_eq!(json["comments"]["comments"][0]["dishId"], 0);
}
