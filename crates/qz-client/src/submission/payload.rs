use crate::ValidityWindow;

use chrono::NaiveDateTime;
use qz_core::{Question, Questionary, Respondent, format_backend_timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the questionnaire creation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionaryRequest {
    /// Department the questionnaire belongs to
    #[serde(rename = "id")]
    pub department_id: i64,
    pub title: String,
    pub created_at: String,
    pub options: QuestionaryOptionsPayload,
    pub questions: Vec<QuestionPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionaryOptionsPayload {
    pub start_date: String,
    pub end_date: String,
    pub answers_limit: Option<u32>,
    pub anonymous: bool,
    pub member_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: String,
    pub options: Option<Vec<String>>,
    pub statistics: Option<Value>,
}

impl From<&Question> for QuestionPayload {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            text: question.text.clone(),
            question_type: question.question_type.as_str().to_string(),
            options: question.options.clone(),
            statistics: question.statistics.clone(),
        }
    }
}

impl CreateQuestionaryRequest {
    /// Serialize a validated draft.
    ///
    /// `memberIds` lists the selected respondents, in selection order.
    pub fn build(
        draft: &Questionary,
        department_id: i64,
        respondents: &[Respondent],
        window: ValidityWindow,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            department_id,
            title: draft.title.clone(),
            created_at: format_backend_timestamp(&created_at),
            options: QuestionaryOptionsPayload {
                start_date: format_backend_timestamp(&window.start),
                end_date: format_backend_timestamp(&window.end),
                answers_limit: draft.options.answers_limit,
                anonymous: draft.options.is_anonymous(),
                member_ids: respondents.iter().map(|r| r.id).collect(),
            },
            questions: draft.questions.iter().map(QuestionPayload::from).collect(),
        }
    }
}
