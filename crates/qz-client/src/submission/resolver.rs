use crate::{ClientResult, QuestionaryApi, QuestionaryQuery};

use async_trait::async_trait;
use log::{debug, warn};

const DEFAULT_PAGE_SIZE: u32 = 50;

/// Finds the id of a questionnaire that was just created.
///
/// The creation endpoint does not return the new entity, so the id has to be
/// recovered some other way. Swap the implementation if that ever changes.
#[async_trait]
pub trait CreatedQuestionaryResolver: Send + Sync {
    async fn resolve(
        &self,
        api: &dyn QuestionaryApi,
        department_id: i64,
        title: &str,
    ) -> ClientResult<Option<i64>>;
}

/// Walks the department listing and matches the exact title.
///
/// Duplicate titles resolve to the highest id, i.e. the most recent one.
#[derive(Debug, Clone, Copy)]
pub struct TitleMatchResolver {
    page_size: u32,
}

impl Default for TitleMatchResolver {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TitleMatchResolver {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[async_trait]
impl CreatedQuestionaryResolver for TitleMatchResolver {
    async fn resolve(
        &self,
        api: &dyn QuestionaryApi,
        department_id: i64,
        title: &str,
    ) -> ClientResult<Option<i64>> {
        let mut matches = Vec::new();
        let mut page = 0;

        loop {
            let query = QuestionaryQuery::for_department(department_id, self.page_size).page(page);
            let listing = api.list_questionaries(&query).await?;

            matches.extend(
                listing
                    .content
                    .iter()
                    .filter(|q| q.title == title)
                    .map(|q| q.id),
            );

            page += 1;
            if page >= listing.page.total_pages || listing.content.is_empty() {
                break;
            }
        }

        if matches.len() > 1 {
            warn!(
                "{} questionnaires titled '{}' in department {}; using the newest",
                matches.len(),
                title,
                department_id
            );
        }

        let resolved = matches.into_iter().max();
        debug!("Resolved '{}' to {:?}", title, resolved);
        Ok(resolved)
    }
}
