use crate::QuestionType;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique within its draft only
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Meaning depends on the type; `None` for TEXT and BOOLEAN
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// Computed by the backend once answers exist
    #[serde(default)]
    pub statistics: Option<Value>,
}

impl Question {
    pub fn new(id: String, text: String, question_type: QuestionType) -> Self {
        Self {
            id,
            text,
            question_type,
            options: question_type.initial_options(),
            statistics: None,
        }
    }

    /// Switch type, resetting options and dropping stale statistics
    pub fn retype(&mut self, question_type: QuestionType) {
        self.question_type = question_type;
        self.options = question_type.initial_options();
        self.statistics = None;
    }

    pub fn option_count(&self) -> usize {
        self.options.as_ref().map_or(0, Vec::len)
    }
}
