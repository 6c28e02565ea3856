pub(crate) mod error;
pub(crate) mod outcome;
pub(crate) mod payload;
pub(crate) mod request;
pub(crate) mod resolver;
pub(crate) mod submitter;

pub use error::{Result as SubmissionResult, SubmissionError};
pub use outcome::SubmissionOutcome;
pub use payload::{CreateQuestionaryRequest, QuestionPayload, QuestionaryOptionsPayload};
pub use request::{BannerImage, SubmissionRequest, ValidityWindow};
pub use resolver::{CreatedQuestionaryResolver, TitleMatchResolver};
pub use submitter::DraftSubmitter;
