//! Integration tests for the itemdom binary
//!
//! Each test writes an `items.xml` into a fresh directory and runs the binary there.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn itemdom_in(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_itemdom"));
    cmd.current_dir(dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn with_items(xml: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("items.xml"), xml).unwrap();
    dir
}

#[test]
fn prints_the_six_groups() {
    let dir = with_items(r#"<items><item name="a">X</item><item name="b">Y</item></items>"#);

    itemdom_in(&dir)
        .assert()
        .success()
        .stdout("2\nb\na\nb\nY\nY\nX\nY\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn output_is_stable_across_runs() {
    let dir = with_items(
        r#"<?xml version="1.0"?>
<data>
    <items>
        <item name="item1">item1abc</item>
        <item name="item2">item2abc</item>
    </items>
</data>
"#,
    );

    let first = itemdom_in(&dir).assert().success().get_output().stdout.clone();
    let second = itemdom_in(&dir).assert().success().get_output().stdout.clone();

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        "2\nitem2\nitem1\nitem2\nitem2abc\nitem2abc\nitem1abc\nitem2abc\n"
    );
}

#[test]
fn fails_without_input_file() {
    let dir = TempDir::new().unwrap();

    itemdom_in(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no such file: items.xml"));
}

#[test]
fn fails_on_malformed_input() {
    let dir = with_items(r#"<items><item name="a">X</item>"#);

    itemdom_in(&dir)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn single_item_prints_count_then_fails() {
    let dir = with_items(r#"<items><item name="a">X</item></items>"#);

    itemdom_in(&dir)
        .assert()
        .code(1)
        .stdout("1\n")
        .stderr(predicate::str::contains("index 1 is out of range"));
}

#[test]
fn self_closing_item_fails_at_data() {
    let dir = with_items(r#"<items><item name="a">X</item><item name="b"/></items>"#);

    itemdom_in(&dir)
        .assert()
        .code(1)
        .stdout("2\nb\na\nb\n")
        .stderr(predicate::str::contains("has no child node"));
}
