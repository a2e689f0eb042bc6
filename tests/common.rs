use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// Command for the notes binary, isolated from the caller's configuration
pub fn notes(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("notes");
    cmd.env("NOTES_CLI_HOME", home)
        .env("NOTES_CLI_CONFIG_DIR", home.join(".config"))
        .env_remove("NOTES_CLI_EDITOR")
        .env_remove("EDITOR")
        .env_remove("NOTES_LOG");
    cmd
}

/// Write a note file directly, bypassing `notes new`
#[allow(dead_code)]
pub fn write_note(
    home: &Path,
    category: &str,
    file: &str,
    tags: &str,
    created: &str,
    body: &str,
) {
    let dir = home.join(category);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(file),
        format!(
            "{file}\n=====\n- Category: {category}\n- Tags: {tags}\n- Created: {created}\n\n{body}"
        ),
    )
    .unwrap();
}
