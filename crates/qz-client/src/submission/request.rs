use crate::{SubmissionError, SubmissionResult};

use std::path::Path;

use chrono::NaiveDateTime;
use qz_core::{Questionary, Respondent};

/// Start and end of the answering period, in backend-local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ValidityWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }
}

/// Image to attach as the questionnaire header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl BannerImage {
    /// Content type is derived from the file extension
    pub fn new<S: Into<String>>(file_name: S, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Everything needed to commit a draft
#[derive(Debug, Clone)]
pub struct SubmissionRequest<'a> {
    pub draft: &'a Questionary,
    /// Respondents picked in the UI
    pub respondents: &'a [Respondent],
    /// Overrides the dates stored in the draft options
    pub validity: Option<ValidityWindow>,
    pub banner: Option<BannerImage>,
}

impl<'a> SubmissionRequest<'a> {
    pub fn new(draft: &'a Questionary, respondents: &'a [Respondent]) -> Self {
        Self {
            draft,
            respondents,
            validity: None,
            banner: None,
        }
    }

    pub fn validity(mut self, validity: ValidityWindow) -> Self {
        self.validity = Some(validity);
        self
    }

    pub fn banner(mut self, banner: BannerImage) -> Self {
        self.banner = Some(banner);
        self
    }

    /// Local preconditions; no network involved.
    pub fn validate(&self) -> SubmissionResult<ValidityWindow> {
        if self.respondents.is_empty() {
            return Err(SubmissionError::no_respondents());
        }

        let window = self
            .validity
            .or_else(|| {
                self.draft
                    .options
                    .validity()
                    .map(|(start, end)| ValidityWindow::new(start, end))
            })
            .ok_or_else(SubmissionError::missing_validity)?;

        if window.end < window.start {
            return Err(SubmissionError::invalid_validity(window.start, window.end));
        }

        Ok(window)
    }

    /// The draft binding wins; otherwise the department of the first respondent
    pub fn department_id(&self) -> Option<i64> {
        self.draft
            .department_id
            .or_else(|| self.respondents.first().map(|r| r.department_id))
    }
}
