use crate::ClientError;

use std::panic::Location;

use chrono::NaiveDateTime;
use error_location::ErrorLocation;
use thiserror::Error;

/// Reasons a draft did not get created
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Select at least one respondent before submitting {location}")]
    NoRespondents { location: ErrorLocation },

    #[error("Choose a start and end date before submitting {location}")]
    MissingValidity { location: ErrorLocation },

    #[error("End date {end} is before start date {start} {location}")]
    InvalidValidity {
        start: NaiveDateTime,
        end: NaiveDateTime,
        location: ErrorLocation,
    },

    #[error("Failed to create questionnaire: {source} {location}")]
    Creation {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },
}

impl SubmissionError {
    #[track_caller]
    pub fn no_respondents() -> Self {
        SubmissionError::NoRespondents {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_validity() -> Self {
        SubmissionError::MissingValidity {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_validity(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        SubmissionError::InvalidValidity {
            start,
            end,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn creation(source: ClientError) -> Self {
        SubmissionError::Creation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Rejected before any network call
    pub fn is_local(&self) -> bool {
        !matches!(self, SubmissionError::Creation { .. })
    }

    /// The caller may offer to submit the same draft again
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::Creation { .. })
    }
}

pub type Result<T> = std::result::Result<T, SubmissionError>;
