use crate::{
    BannerImage, ClientError, ClientResult, CreateQuestionaryRequest, Page, QuestionaryApi,
    QuestionaryQuery, QuestionarySummary, Session, with_retry,
};

use async_trait::async_trait;
use qz_config::{ApiConfig, RetryConfig};
use qz_core::Respondent;
use reqwest::{
    Client as ReqwestClient, Method, Response,
    header::AUTHORIZATION,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

const MEMBERS_PATH: &str = "/api/members";
const QUESTIONARIES_PATH: &str = "/api/questionaries";
const BANNER_PATH: &str = "/api/images/questionaries";

/// HTTP client for the Questionize REST API
pub struct ApiClient {
    pub base_url: String,
    session: Session,
    retry: RetryConfig,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a client with default transport settings and no read retries
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:8080")
    /// * `session` - Authentication context sent with every request
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            retry: RetryConfig::disabled(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client honoring the configured timeout and retry policy
    pub fn from_config(api: &ApiConfig, retry: &RetryConfig, session: Session) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(api.timeout()).build()?;

        Ok(Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            session,
            retry: retry.clone(),
            client,
        })
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build a request carrying the session credentials
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(authorization) = self.session.authorization() {
            req = req.header(AUTHORIZATION, authorization);
        }

        req
    }

    /// Send and turn non-success statuses into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::api_error(status.as_u16(), error_message(&body, status.as_str())))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl QuestionaryApi for ApiClient {
    async fn list_respondents(&self, department_id: i64) -> ClientResult<Vec<Respondent>> {
        let path = format!("{}?departmentId={}", MEMBERS_PATH, department_id);
        let path = path.as_str();
        with_retry(&self.retry, "list_respondents", move || {
            self.get_json::<Vec<Respondent>>(path)
        })
        .await
    }

    async fn create_questionary(&self, request: &CreateQuestionaryRequest) -> ClientResult<()> {
        let req = self.request(Method::POST, QUESTIONARIES_PATH).json(request);
        self.execute(req).await?;
        Ok(())
    }

    async fn list_questionaries(
        &self,
        query: &QuestionaryQuery,
    ) -> ClientResult<Page<QuestionarySummary>> {
        let path = format!("{}?{}", QUESTIONARIES_PATH, query.to_query_string());
        let path = path.as_str();
        with_retry(&self.retry, "list_questionaries", move || {
            self.get_json::<Page<QuestionarySummary>>(path)
        })
        .await
    }

    async fn upload_banner(
        &self,
        questionary_id: i64,
        image: &BannerImage,
    ) -> ClientResult<String> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)?;
        let form = Form::new().part("file", part);

        let req = self
            .request(Method::POST, &format!("{}/{}", BANNER_PATH, questionary_id))
            .multipart(form);
        let response = self.execute(req).await?;
        let body = response.text().await?;

        stored_image_id(&body)
    }
}

/// Pull a human-readable message out of an error body
fn error_message(body: &str, fallback: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        let trimmed = body.trim();
        return if trimmed.is_empty() {
            fallback.to_string()
        } else {
            trimmed.to_string()
        };
    };

    value
        .get("message")
        .or_else(|| value.get("error").and_then(|e| e.get("message")))
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

/// The upload endpoint answers with a bare id, a JSON scalar, or `{ "id": .. }`
fn stored_image_id(body: &str) -> ClientResult<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ClientError::unexpected("banner upload returned an empty body"));
    }

    let id = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => map.get("id").and_then(scalar_to_string),
        Ok(value) => scalar_to_string(&value),
        Err(_) => Some(trimmed.to_string()),
    };

    id.ok_or_else(|| ClientError::unexpected(format!("banner upload returned no id: {}", trimmed)))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
