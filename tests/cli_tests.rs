//! Integration tests for the notes CLI

mod common;

use common::{notes, write_note};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    notes(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: notes"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("categories"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    notes(dir.path())
        .args(["--format", "invalid", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_usage_error_as_json() {
    let dir = tempdir().unwrap();
    notes(dir.path())
        .args(["--format", "json", "list", "--sort", "size"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

// ============================================================================
// new
// ============================================================================

#[test]
fn test_new_creates_note_and_prints_path() {
    let dir = tempdir().unwrap();
    let expected = dir.path().join("blog").join("first-post.md");

    notes(dir.path())
        .args(["new", "blog", "first post", "rust, cli", "--no-edit"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));

    let content = fs::read_to_string(&expected).unwrap();
    assert!(content.starts_with(
        "first-post\n==========\n- Category: blog\n- Tags: rust, cli\n- Created: "
    ));
    assert!(content.ends_with("\n\n"));
}

#[test]
fn test_new_with_title() {
    let dir = tempdir().unwrap();
    notes(dir.path())
        .args(["new", "memo", "todo", "--title", "Things to do", "--no-edit"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("memo/todo.md")).unwrap();
    assert!(content.starts_with("Things to do\n============\n"));
}

#[test]
fn test_new_existing_note_fails() {
    let dir = tempdir().unwrap();
    notes(dir.path())
        .args(["new", "blog", "post", "--no-edit"])
        .assert()
        .success();

    notes(dir.path())
        .args(["new", "blog", "post", "--no-edit"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists. Please edit it"));
}

#[test]
fn test_new_without_editor_is_config_error() {
    let dir = tempdir().unwrap();
    notes(dir.path())
        .args(["new", "blog", "post"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("editor is not set"));

    // The note is created before the editor is looked up
    assert!(dir.path().join("blog/post.md").exists());
}

#[cfg(unix)]
#[test]
fn test_new_runs_editor() {
    let dir = tempdir().unwrap();
    notes(dir.path())
        .env("NOTES_CLI_EDITOR", "true")
        .args(["new", "blog", "post"])
        .assert()
        .success();

    notes(dir.path())
        .env("NOTES_CLI_EDITOR", "false")
        .args(["new", "blog", "other"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exited with status 1"));
}

#[test]
fn test_new_json_output() {
    let dir = tempdir().unwrap();
    let output = notes(dir.path())
        .args(["--format", "json", "new", "blog", "post", "a,b", "--no-edit"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["category"], "blog");
    assert_eq!(json["file"], "post.md");
    assert_eq!(json["title"], "post");
    assert_eq!(json["tags"], serde_json::json!(["a", "b"]));
}

// ============================================================================
// list
// ============================================================================

#[test]
fn test_list_empty_store() {
    let dir = tempdir().unwrap();
    notes(&dir.path().join("missing"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_relative_sorted_by_created() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "blog", "old.md", "a", "2020-01-01T00:00:00Z", "");
    write_note(dir.path(), "memo", "new.md", "b", "2021-01-01T00:00:00Z", "");

    notes(dir.path())
        .args(["list", "--relative"])
        .assert()
        .success()
        .stdout("memo/new.md\nblog/old.md\n");
}

#[test]
fn test_list_filters_and_oneline() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "blog", "a.md", "rust, cli", "2020-01-01T00:00:00Z", "");
    write_note(dir.path(), "memo", "b.md", "go", "2020-01-02T00:00:00Z", "");

    notes(dir.path())
        .args(["list", "-r", "--tag", "^ru", "--oneline"])
        .assert()
        .success()
        .stdout("blog/a.md blog a.md rust,cli\n");

    notes(dir.path())
        .args(["list", "-r", "--category", "memo"])
        .assert()
        .success()
        .stdout("memo/b.md\n");
}

#[test]
fn test_list_full_shows_body() {
    let dir = tempdir().unwrap();
    write_note(
        dir.path(),
        "blog",
        "a.md",
        "x",
        "2020-01-01T00:00:00Z",
        "Hello body.\n",
    );

    notes(dir.path())
        .args(["list", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: blog"))
        .stdout(predicate::str::contains("Created:  2020-01-01T00:00:00Z"))
        .stdout(predicate::str::contains("Hello body."));
}

#[test]
fn test_list_nested_category_directory() {
    let dir = tempdir().unwrap();
    write_note(
        &dir.path().join("blog"),
        "drafts",
        "x.md",
        "",
        "2020-01-01T00:00:00Z",
        "Draft body\n",
    );

    notes(dir.path())
        .args(["list", "--relative"])
        .assert()
        .success()
        .stdout("blog/drafts/x.md\n");

    notes(dir.path())
        .args(["list", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            dir.path().join("blog/drafts/x.md").display().to_string(),
        ))
        .stdout(predicate::str::contains("Draft body"));
}

#[test]
fn test_new_rejects_category_with_separator() {
    let dir = tempdir().unwrap();
    notes(dir.path())
        .args(["new", "a/b", "post", "--no-edit"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path separators"));
}

#[test]
fn test_list_inconsistent_note_fails() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "blog", "a.md", "", "2020-01-01T00:00:00Z", "");
    fs::create_dir_all(dir.path().join("diary")).unwrap();
    fs::rename(dir.path().join("blog/a.md"), dir.path().join("diary/a.md")).unwrap();

    notes(dir.path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("category does not match"));
}

#[test]
fn test_list_json() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "blog", "a.md", "x", "2020-01-01T09:00:00+09:00", "");

    let output = notes(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["created"], "2020-01-01T09:00:00+09:00");
    assert_eq!(json[0]["category"], "blog");
}

// ============================================================================
// categories, tags, config
// ============================================================================

#[test]
fn test_categories_and_tags() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "blog", "a.md", "rust, cli", "2020-01-01T00:00:00Z", "");
    write_note(dir.path(), "memo", "b.md", "go", "2020-01-02T00:00:00Z", "");

    notes(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("blog\nmemo\n");

    notes(dir.path())
        .arg("tags")
        .assert()
        .success()
        .stdout("cli\ngo\nrust\n");

    notes(dir.path())
        .args(["tags", "memo"])
        .assert()
        .success()
        .stdout("go\n");
}

#[test]
fn test_tags_of_missing_category() {
    let dir = tempdir().unwrap();
    notes(dir.path())
        .args(["tags", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("directory for it may not exist"));
}

#[test]
fn test_config_prints_resolved_values() {
    let dir = tempdir().unwrap();
    notes(dir.path())
        .env("NOTES_CLI_EDITOR", "vim")
        .args(["config", "editor"])
        .assert()
        .success()
        .stdout("vim\n");

    notes(dir.path())
        .args(["config", "home"])
        .assert()
        .success()
        .stdout(format!("{}\n", dir.path().display()));
}

#[test]
fn test_config_file_supplies_editor() {
    let dir = tempdir().unwrap();
    let config_dir = dir.path().join(".config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "editor = \"nano\"\n").unwrap();

    notes(dir.path())
        .args(["config", "editor"])
        .assert()
        .success()
        .stdout("nano\n");
}
