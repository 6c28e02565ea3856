use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionaryOptions {
    /// Backend-local wall clock time
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub answers_limit: Option<u32>,
    /// Unset is treated as anonymous on submission
    pub anonymous: Option<bool>,
}

impl QuestionaryOptions {
    pub fn validity(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.start_date?, self.end_date?))
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous.unwrap_or(true)
    }
}
