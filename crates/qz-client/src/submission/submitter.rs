use crate::{
    CreateQuestionaryRequest, CreatedQuestionaryResolver, QuestionaryApi, SubmissionError,
    SubmissionOutcome, SubmissionRequest, SubmissionResult, TitleMatchResolver,
};

use chrono::{Local, NaiveDateTime};
use log::{info, warn};

/// Commits drafts: create first, then attach the banner.
///
/// The two steps are independent calls. A failure after creation leaves the
/// questionnaire without a banner and is reported, never rolled back.
pub struct DraftSubmitter<'a, A: QuestionaryApi> {
    api: &'a A,
    resolver: Box<dyn CreatedQuestionaryResolver + 'a>,
}

impl<'a, A: QuestionaryApi> DraftSubmitter<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            resolver: Box::new(TitleMatchResolver::default()),
        }
    }

    pub fn with_resolver<R>(mut self, resolver: R) -> Self
    where
        R: CreatedQuestionaryResolver + 'a,
    {
        self.resolver = Box::new(resolver);
        self
    }

    pub async fn submit(
        &self,
        request: SubmissionRequest<'_>,
    ) -> SubmissionResult<SubmissionOutcome> {
        self.submit_at(request, Local::now().naive_local()).await
    }

    /// Same as `submit` with an explicit creation timestamp
    pub async fn submit_at(
        &self,
        request: SubmissionRequest<'_>,
        created_at: NaiveDateTime,
    ) -> SubmissionResult<SubmissionOutcome> {
        let window = request.validate()?;
        let department_id = request
            .department_id()
            .ok_or_else(SubmissionError::no_respondents)?;

        let payload = CreateQuestionaryRequest::build(
            request.draft,
            department_id,
            request.respondents,
            window,
            created_at,
        );

        self.api
            .create_questionary(&payload)
            .await
            .map_err(SubmissionError::creation)?;
        info!(
            "Created questionnaire '{}' for department {} ({} questions, {} respondents)",
            payload.title,
            department_id,
            payload.questions.len(),
            payload.options.member_ids.len()
        );

        let Some(banner) = request.banner.as_ref() else {
            return Ok(SubmissionOutcome::Created);
        };

        let questionary_id = match self
            .resolver
            .resolve(self.api_dyn(), department_id, &payload.title)
            .await
        {
            Ok(Some(id)) => id,
            Ok(None) => {
                warn!("No questionnaire titled '{}' found after creation", payload.title);
                return Ok(SubmissionOutcome::BannerUnresolved {
                    reason: format!("no questionnaire titled '{}' was found", payload.title),
                });
            }
            Err(e) => {
                warn!("Lookup of '{}' failed: {}", payload.title, e);
                return Ok(SubmissionOutcome::BannerUnresolved {
                    reason: e.to_string(),
                });
            }
        };

        match self.api.upload_banner(questionary_id, banner).await {
            Ok(banner_id) => {
                info!(
                    "Attached banner {} to questionnaire {}",
                    banner_id, questionary_id
                );
                Ok(SubmissionOutcome::CreatedWithBanner {
                    questionary_id,
                    banner_id,
                })
            }
            Err(e) => {
                warn!("Banner upload for questionnaire {} failed: {}", questionary_id, e);
                Ok(SubmissionOutcome::BannerFailed {
                    questionary_id,
                    reason: e.to_string(),
                })
            }
        }
    }

    fn api_dyn(&self) -> &dyn QuestionaryApi {
        self.api
    }
}
