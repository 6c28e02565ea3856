use serde::{Deserialize, Serialize};

/// A department member who can be the subject of a questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Respondent {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
}
