use crate::{CoreError, CoreResult, RATING_SCALE};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of answer a question collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    /// Any number of the listed options may be picked
    MultipleChoice,
    /// Exactly one of the listed options may be picked
    Alternative,
    /// Free text answer
    Text,
    /// Yes / no
    Boolean,
    /// Five point satisfaction scale
    Rating,
}

impl QuestionType {
    /// Tag used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "MULTIPLE_CHOICE",
            Self::Alternative => "ALTERNATIVE",
            Self::Text => "TEXT",
            Self::Boolean => "BOOLEAN",
            Self::Rating => "RATING",
        }
    }

    /// Whether the editor lets the user append their own options
    pub fn accepts_custom_options(&self) -> bool {
        matches!(self, Self::MultipleChoice | Self::Alternative)
    }

    /// Option list a question gets when switched to this type.
    ///
    /// `None` means the type has no options at all.
    pub fn initial_options(&self) -> Option<Vec<String>> {
        match self {
            Self::MultipleChoice | Self::Alternative => Some(Vec::new()),
            Self::Rating => Some(RATING_SCALE.iter().map(|s| s.to_string()).collect()),
            Self::Text | Self::Boolean => None,
        }
    }
}

impl FromStr for QuestionType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "MULTIPLE_CHOICE" => Ok(Self::MultipleChoice),
            "ALTERNATIVE" => Ok(Self::Alternative),
            "TEXT" => Ok(Self::Text),
            "BOOLEAN" => Ok(Self::Boolean),
            "RATING" => Ok(Self::Rating),
            _ => Err(CoreError::InvalidQuestionType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
