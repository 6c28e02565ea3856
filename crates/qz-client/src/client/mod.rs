pub(crate) mod api;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod page;

pub use api::QuestionaryApi;
pub use client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
pub use page::{Page, PageInfo, QuestionaryQuery, QuestionarySummary};
