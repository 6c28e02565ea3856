use serde::{Deserialize, Serialize};

/// Paginated listing as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: PageInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_pages: u32,
    pub total_elements: u64,
}

/// The fields of a listed questionnaire this client relies on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionarySummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Filters for the questionnaire listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionaryQuery {
    pub department_id: i64,
    pub active: Option<bool>,
    /// Zero-based
    pub page: u32,
    pub size: u32,
}

impl QuestionaryQuery {
    pub fn for_department(department_id: i64, size: u32) -> Self {
        Self {
            department_id,
            active: None,
            page: 0,
            size,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn active(mut self, active: Option<bool>) -> Self {
        self.active = active;
        self
    }

    pub(crate) fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("departmentId={}", self.department_id),
            format!("page={}", self.page),
            format!("size={}", self.size),
        ];
        if let Some(active) = self.active {
            params.push(format!("active={}", active));
        }
        params.join("&")
    }
}
