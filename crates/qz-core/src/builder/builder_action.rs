use crate::{Question, QuestionType};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Every edit the questionnaire builder understands.
///
/// All variants except `Undo` and `Redo` are recorded in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuilderAction {
    SetTitle(String),
    AddQuestion,
    UpdateQuestionTitle {
        id: String,
        title: String,
    },
    UpdateQuestionType {
        id: String,
        #[serde(rename = "type")]
        question_type: QuestionType,
    },
    AddOption {
        id: String,
    },
    UpdateOption {
        id: String,
        index: usize,
        value: String,
    },
    RemoveOption {
        id: String,
        index: usize,
    },
    CloneQuestion {
        id: String,
    },
    RemoveQuestion {
        id: String,
    },
    /// Commit a drag-and-drop result as the complete new order
    ReorderQuestions(Vec<Question>),
    MoveQuestion {
        from: usize,
        to: usize,
    },
    SetDepartmentId(i64),
    SetValidity {
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    },
    SetAnswersLimit(Option<u32>),
    SetAnonymous(bool),
    Undo,
    Redo,
}

impl BuilderAction {
    /// Whether applying the action records an undo step
    pub fn is_tracked(&self) -> bool {
        !matches!(self, Self::Undo | Self::Redo)
    }
}
