use crate::{
    BannerImage, ClientResult, CreateQuestionaryRequest, Page, QuestionaryQuery,
    QuestionarySummary,
};

use async_trait::async_trait;
use qz_core::Respondent;

/// The backend operations the builder depends on.
///
/// `ApiClient` is the HTTP implementation; tests and alternative transports
/// implement it directly.
#[async_trait]
pub trait QuestionaryApi: Send + Sync {
    /// Members of a department that can be selected as respondents
    async fn list_respondents(&self, department_id: i64) -> ClientResult<Vec<Respondent>>;

    /// Create a questionnaire; the backend does not return the created entity
    async fn create_questionary(&self, request: &CreateQuestionaryRequest) -> ClientResult<()>;

    async fn list_questionaries(
        &self,
        query: &QuestionaryQuery,
    ) -> ClientResult<Page<QuestionarySummary>>;

    /// Attach a banner image, returning the stored image id
    async fn upload_banner(&self, questionary_id: i64, image: &BannerImage)
    -> ClientResult<String>;
}
