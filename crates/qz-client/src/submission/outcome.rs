use serde::Serialize;

/// How far a successful submission got.
///
/// Every variant means the questionnaire exists on the backend; the banner
/// variants are warnings, not failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Created; no banner was attached to the request
    Created,
    CreatedWithBanner {
        questionary_id: i64,
        banner_id: String,
    },
    /// Created, but the new questionnaire could not be found to attach the banner
    BannerUnresolved { reason: String },
    /// Created and found, but the upload failed
    BannerFailed { questionary_id: i64, reason: String },
}

impl SubmissionOutcome {
    /// Message to surface as a non-blocking warning
    pub fn warning(&self) -> Option<String> {
        match self {
            SubmissionOutcome::Created | SubmissionOutcome::CreatedWithBanner { .. } => None,
            SubmissionOutcome::BannerUnresolved { reason } => Some(format!(
                "Questionnaire created, but its banner could not be attached: {}",
                reason
            )),
            SubmissionOutcome::BannerFailed { reason, .. } => Some(format!(
                "Questionnaire created, but the banner upload failed: {}",
                reason
            )),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.warning().is_none()
    }
}
