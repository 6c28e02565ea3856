//! REST access to the Questionize backend and the draft submission adapter.

pub mod client;
pub mod retry;
pub mod session;
pub mod submission;


pub use client::{
    ApiClient, ClientError, ClientResult, Page, PageInfo, QuestionaryApi, QuestionaryQuery,
    QuestionarySummary,
};
pub use retry::{IsRetryable, with_retry};
pub use session::Session;
pub use submission::{
    BannerImage, CreateQuestionaryRequest, CreatedQuestionaryResolver, DraftSubmitter,
    QuestionPayload, QuestionaryOptionsPayload, SubmissionError, SubmissionOutcome,
    SubmissionRequest, SubmissionResult, TitleMatchResolver, ValidityWindow,
};
