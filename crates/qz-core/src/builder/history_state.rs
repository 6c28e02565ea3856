use crate::{BuilderAction, Questionary, reduce};

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Linear undo/redo history around the current draft.
///
/// The most recent undo step is the last entry of `past`; the most recent
/// redo step is the first entry of `future`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryState {
    pub past: Vec<Questionary>,
    pub present: Questionary,
    pub future: VecDeque<Questionary>,
}

impl HistoryState {
    pub fn new(present: Questionary) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: VecDeque::new(),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Apply an action in place
    pub fn dispatch(&mut self, action: BuilderAction) {
        *self = reduce(self, action);
    }

    /// Apply a sequence of actions in order
    pub fn dispatch_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = BuilderAction>,
    {
        for action in actions {
            self.dispatch(action);
        }
    }
}
