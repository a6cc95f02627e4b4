//! Subcommand implementations
//!
//! Each command returns the text it wants printed on stdout; an empty string
//! prints nothing.

use crate::cli::{Command, EntryAction, FilmAction, SortArgs};
use crate::config::CtlConfig;
use anyhow::{Context, Result, anyhow};
use cinelog_core::model::{EntryPayload, ImdbId, Rating};
use cinelog_core::{
    FilmsApi, FilmsClient, Row, SortState, Table, TableSorter, WatchFilter,
    resolve_search,
};
use serde::{Serialize, de::DeserializeOwned};
use std::{fs, path::Path};
use tracing::info;

pub async fn run(command: Command, config: &CtlConfig) -> Result<String> {
    match command {
        Command::Sort(args) => sort_table(&args, config),
        Command::Filter { input, not_watched } => {
            filter_table(&input, WatchFilter::from_checkbox(not_watched))
        }
        Command::Search { input } => Ok(resolve_search(&input)?),
        Command::Rating { source, value } => Ok(format_rating(&source, &value)),
        Command::Film { action } => run_film(&client(config)?, action).await,
        Command::Entry { action } => run_entry(&client(config)?, action).await,
    }
}

fn client(config: &CtlConfig) -> Result<FilmsClient> {
    let timeout = config.request_timeout()?;
    Ok(FilmsClient::with_timeout(&config.server_url, timeout)?)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid JSON in {}", path.display()))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    fs::write(path, rendered)
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Column given as an index, or as a header name
fn resolve_column(table: &Table, column: &str) -> Result<usize> {
    let column = column.trim();
    if let Ok(index) = column.parse::<usize>() {
        return Ok(index);
    }
    table
        .column_index(column)
        .ok_or_else(|| anyhow!("unknown column '{column}'"))
}

pub fn sort_table(args: &SortArgs, config: &CtlConfig) -> Result<String> {
    let mut table: Table = read_json(&args.input)?;
    let column = resolve_column(&table, &args.column)?;
    let policy = match args.policy {
        Some(policy) => policy.policy(),
        None => config.sort.policy()?,
    };
    let state = match &args.state {
        Some(path) if path.exists() => read_json(path)?,
        _ => SortState::default(),
    };

    let next = TableSorter::new(policy)
        .sort(&mut table, column, state)
        .with_context(|| format!("failed to sort {}", args.input.display()))?;

    info!(
        rows = table.len(),
        column,
        ascending = state.ascending,
        "sorted table"
    );

    // Table first: the direction only flips once the sorted rows are saved
    let rendered = match &args.output {
        Some(path) => {
            write_json(path, &table)?;
            String::new()
        }
        None => serde_json::to_string_pretty(&table)?,
    };

    if let Some(path) = &args.state {
        write_json(path, &next)?;
    }
    Ok(rendered)
}

pub fn filter_table(input: &Path, filter: WatchFilter) -> Result<String> {
    let table: Table = read_json(input)?;
    let rows: Vec<&Row> = table.visible_rows(filter).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

pub fn format_rating(source: &str, value: &str) -> String {
    let rating = Rating::new(source, value);
    match rating.percent() {
        Some(percent) => format!("{} ({}%)", rating.display(), percent),
        None => rating.display(),
    }
}

pub async fn run_film(api: &dyn FilmsApi, action: FilmAction) -> Result<String> {
    match action {
        FilmAction::Delete { id } => {
            let id = ImdbId::new(&id)?;
            api.delete_film(&id)
                .await
                .with_context(|| format!("failed to delete film {id}"))?;
            Ok(format!("deleted {id}"))
        }
        FilmAction::Refresh { id } => {
            let id = ImdbId::new(&id)?;
            api.refresh_film(&id)
                .await
                .with_context(|| format!("failed to refresh film {id}"))?;
            Ok(format!("refreshed {id}"))
        }
    }
}

pub async fn run_entry(api: &dyn FilmsApi, action: EntryAction) -> Result<String> {
    match action {
        EntryAction::Update {
            id,
            name,
            comment,
            watched,
        } => {
            let id = ImdbId::new(&id)?;
            let payload = EntryPayload {
                name,
                comment,
                watched,
            };
            let entry = api
                .update_entry(&id, &payload)
                .await
                .with_context(|| format!("failed to update entry of {id}"))?;
            Ok(format!("{} {}", entry.label(), entry.quoted_comment()))
        }
        EntryAction::Delete { id } => {
            let id = ImdbId::new(&id)?;
            api.delete_entry(&id)
                .await
                .with_context(|| format!("failed to delete entry of {id}"))?;
            Ok(format!("deleted entry of {id}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cinelog_core::ApiError;
    use cinelog_core::model::Entry;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl FilmsApi for RecordingApi {
        async fn delete_film(&self, id: &ImdbId) -> Result<(), ApiError> {
            self.record(format!("delete {id}"));
            Ok(())
        }

        async fn refresh_film(&self, id: &ImdbId) -> Result<(), ApiError> {
            self.record(format!("refresh {id}"));
            Ok(())
        }

        async fn update_entry(
            &self,
            id: &ImdbId,
            payload: &EntryPayload,
        ) -> Result<Entry, ApiError> {
            self.record(format!("update {id}"));
            Ok(Entry::new(payload.name.clone(), payload.watched, payload.comment.clone())
                .with_id(3))
        }

        async fn delete_entry(&self, id: &ImdbId) -> Result<(), ApiError> {
            self.record(format!("delete entry {id}"));
            Ok(())
        }
    }

    #[test]
    fn rating_output() {
        assert_eq!(
            format_rating("Internet Movie Database", "8.1/10"),
            "IMDb: 8.1/10 (81%)"
        );
        assert_eq!(format_rating("Metacritic", "N/A"), "Metacritic: N/A");
    }

    #[test]
    fn failed_output_write_keeps_sort_state() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("table.json");
        let state = dir.path().join("state.json");
        fs::write(
            &input,
            r#"{"columns": ["Score"], "rows": [{"cells": ["87%"]}, {"cells": ["45%"]}]}"#,
        )
        .unwrap();
        write_json(&state, &SortState::ascending()).unwrap();

        let args = SortArgs {
            input,
            column: "0".into(),
            state: Some(state.clone()),
            policy: None,
            output: Some(dir.path().join("missing").join("sorted.json")),
        };

        assert!(sort_table(&args, &CtlConfig::default()).is_err());
        let persisted: SortState = read_json(&state).unwrap();
        assert_eq!(persisted, SortState::ascending());
    }

    #[test]
    fn column_by_index_or_name() {
        let table = Table::new(["Title", "Year"]);
        assert_eq!(resolve_column(&table, "1").unwrap(), 1);
        assert_eq!(resolve_column(&table, "title").unwrap(), 0);
        assert!(resolve_column(&table, "Runtime").is_err());
    }

    #[tokio::test]
    async fn film_actions_call_the_api() {
        let api = RecordingApi::default();

        let out = run_film(
            &api,
            FilmAction::Delete {
                id: "tt0133093".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(out, "deleted tt0133093");

        run_film(
            &api,
            FilmAction::Refresh {
                id: "tt0133093".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            *api.calls.lock().unwrap(),
            vec!["delete tt0133093", "refresh tt0133093"]
        );
    }

    #[tokio::test]
    async fn invalid_id_never_reaches_the_api() {
        let api = RecordingApi::default();
        let result = run_film(&api, FilmAction::Delete { id: "matrix".into() }).await;

        assert!(result.is_err());
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn entry_update_renders_stored_entry() {
        let api = RecordingApi::default();
        let out = run_entry(
            &api,
            EntryAction::Update {
                id: "tt0133093".into(),
                name: "Alice".into(),
                comment: "Loved it".into(),
                watched: true,
            },
        )
        .await
        .unwrap();

        assert_eq!(out, "Alice (✓): \"Loved it\"");

        run_entry(
            &api,
            EntryAction::Delete {
                id: "tt0133093".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(api.calls.lock().unwrap().len(), 2);
    }
}
