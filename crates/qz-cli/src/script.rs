//! Action scripts: a JSON array of builder actions replayed on a fresh draft.

use crate::error::{CliError, Result as CliResult};

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDateTime;
use qz_core::{BuilderAction, HistoryState, Respondent, parse_backend_timestamp};
use serde::Serialize;

pub(crate) fn load_actions(path: &Path) -> CliResult<Vec<BuilderAction>> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| CliError::Script {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Replay actions on the default draft
pub(crate) fn replay(actions: Vec<BuilderAction>) -> HistoryState {
    let mut history = HistoryState::default();
    history.dispatch_all(actions);
    history
}

/// What `draft apply` prints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DraftView<'a> {
    pub present: &'a qz_core::Questionary,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl<'a> DraftView<'a> {
    pub(crate) fn of(history: &'a HistoryState) -> Self {
        Self {
            present: &history.present,
            can_undo: history.can_undo(),
            can_redo: history.can_redo(),
        }
    }
}

/// Keep the department members whose ids were requested.
///
/// Returns the selection in department order plus the requested ids that
/// are not members of the department.
pub(crate) fn select_respondents(
    members: Vec<Respondent>,
    requested: &[i64],
) -> (Vec<Respondent>, Vec<i64>) {
    let wanted: HashSet<i64> = requested.iter().copied().collect();
    let selected: Vec<Respondent> = members
        .into_iter()
        .filter(|member| wanted.contains(&member.id))
        .collect();

    let found: HashSet<i64> = selected.iter().map(|member| member.id).collect();
    let mut unknown: Vec<i64> = wanted.difference(&found).copied().collect();
    unknown.sort_unstable();

    (selected, unknown)
}

/// clap value parser for `--start` / `--end`
pub(crate) fn parse_backend_datetime(value: &str) -> Result<NaiveDateTime, String> {
    parse_backend_timestamp(value)
        .map_err(|_| format!("invalid timestamp '{}', expected YYYY-MM-DDTHH:MM:SS", value))
}
