use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::{fs, path::Path};
use tempfile::TempDir;

const TABLE: &str = r#"{
    "columns": ["Title", "Score", "Year"],
    "rows": [
        {"key": "tt0113277", "watched": true,  "cells": ["Heat", "87%", "1995"]},
        {"key": "tt5697572", "watched": false, "cells": ["Cats", "N/A", "2019"]},
        {"key": "tt0089881", "watched": false, "cells": ["Ran", "45%", "1985"]}
    ]
}"#;

/// Command running in an empty directory with no ambient configuration
fn isolated(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("cinelogctl");
    cmd.current_dir(dir)
        .env_remove("CINELOG_CONFIG_PATH")
        .env_remove("CINELOG_CONFIG_JSON")
        .env_remove("CINELOG_SERVER_URL")
        .env("RUST_LOG", "warn");
    cmd
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("table.json"), TABLE).unwrap();
    dir
}

fn titles(json: &[u8]) -> Vec<String> {
    let table: serde_json::Value = serde_json::from_slice(json).unwrap();
    table["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["cells"][0].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    let out = isolated(dir.path())
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    for command in ["sort", "filter", "search", "rating", "film", "entry"] {
        assert!(text.contains(command), "help missing '{command}'");
    }
}

#[test]
fn sort_toggles_persisted_state() {
    let dir = workspace();
    let sort = |dir: &Path| {
        isolated(dir)
            .args(["sort", "--input", "table.json", "--column", "Score"])
            .args(["--state", "state.json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let first = sort(dir.path());
    assert_eq!(titles(&first), vec!["Cats", "Ran", "Heat"]);
    let state = fs::read_to_string(dir.path().join("state.json")).unwrap();
    assert!(state.contains("\"ascending\": false"), "state was {state}");

    let second = sort(dir.path());
    assert_eq!(titles(&second), vec!["Heat", "Ran", "Cats"]);
}

#[test]
fn sort_writes_output_file() {
    let dir = workspace();
    isolated(dir.path())
        .args(["sort", "--input", "table.json", "--column", "2"])
        .args(["--output", "sorted.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let sorted = fs::read(dir.path().join("sorted.json")).unwrap();
    assert_eq!(titles(&sorted), vec!["Ran", "Heat", "Cats"]);
}

#[test]
fn sort_policy_from_config_file() {
    let dir = workspace();
    fs::write(
        dir.path().join("cinelog.toml"),
        "[sort]\ndefault = \"text\"\n",
    )
    .unwrap();

    let out = isolated(dir.path())
        .args(["sort", "--input", "table.json", "--column", "0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(titles(&out), vec!["Cats", "Heat", "Ran"]);
}

#[test]
fn sort_rejects_missing_column() {
    let dir = workspace();
    isolated(dir.path())
        .args(["sort", "--input", "table.json", "--column", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid column 7"));
}

#[test]
fn filter_hides_watched_rows() {
    let dir = workspace();
    isolated(dir.path())
        .args(["filter", "--input", "table.json", "--not-watched"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cats"))
        .stdout(predicate::str::contains("Ran"))
        .stdout(predicate::str::contains("Heat").not());
}

#[test]
fn search_resolves_film_page() {
    let dir = tempfile::tempdir().unwrap();
    isolated(dir.path())
        .args(["search", "tt0133093"])
        .assert()
        .success()
        .stdout("/films/tt0133093\n");

    isolated(dir.path())
        .args(["search", "The Matrix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid imdb id"));
}

#[test]
fn rating_shows_compact_form() {
    let dir = tempfile::tempdir().unwrap();
    isolated(dir.path())
        .args(["rating", "Rotten Tomatoes", "87%"])
        .assert()
        .success()
        .stdout("RT: 87% (87%)\n");
}

#[test]
fn film_delete_reports_unreachable_server() {
    let dir = tempfile::tempdir().unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    isolated(dir.path())
        .env("CINELOG_SERVER_URL", format!("http://{addr}"))
        .args(["film", "delete", "tt0133093"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to delete film tt0133093"));
}

#[test]
fn invalid_server_url_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    isolated(dir.path())
        .args(["--server", "not a url", "entry", "delete", "tt0133093"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid server URL"));
}
