use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuestionWrapper, Response},
};

#[cfg(test)]
use mockall::automock;

/// The seam between quiz orchestration and the question service: exactly the
/// three question-bank operations the quiz side needs, one network round
/// trip each. Implementations surface the remote result or error verbatim
/// and add no business logic of their own.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuestionClient: Send + Sync {
    async fn sample_ids_for_quiz(&self, category: &str, num_questions: usize)
        -> AppResult<Vec<i32>>;
    async fn fetch_wrapped(&self, ids: &[i32]) -> AppResult<Vec<QuestionWrapper>>;
    async fn grade(&self, responses: &[Response]) -> AppResult<i32>;
}

/// Production client talking HTTP to the question service. Every request
/// carries the configured timeout; timing out or failing to connect yields
/// `RemoteCall` instead of hanging the caller.
pub struct HttpQuestionClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpQuestionClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|err| AppError::InternalError(format!("HTTP client: {}", err)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Maps a non-success status from the question service onto the error the
/// remote side raised, so orchestration callers see it unchanged.
fn remote_error(status: StatusCode, body: String) -> AppError {
    match status {
        StatusCode::FORBIDDEN => AppError::EmptyInput(body),
        StatusCode::NOT_FOUND => AppError::NotFound(body),
        StatusCode::BAD_REQUEST => AppError::InvalidResponse(body),
        StatusCode::NOT_ACCEPTABLE => AppError::ValidationError(body),
        _ => AppError::RemoteCall(format!("question service returned {}: {}", status, body)),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(remote_error(status, body));
    }

    let parsed = response.json::<T>().await?;
    Ok(parsed)
}

#[async_trait]
impl QuestionClient for HttpQuestionClient {
    async fn sample_ids_for_quiz(
        &self,
        category: &str,
        num_questions: usize,
    ) -> AppResult<Vec<i32>> {
        let response = self
            .http
            .get(self.url("/question/generate"))
            .query(&[
                ("categoryName", category),
                ("numQuestions", &num_questions.to_string()),
            ])
            .send()
            .await?;

        read_json(response).await
    }

    async fn fetch_wrapped(&self, ids: &[i32]) -> AppResult<Vec<QuestionWrapper>> {
        let response = self
            .http
            .post(self.url("/question/getQuestions"))
            .json(&ids)
            .send()
            .await?;

        read_json(response).await
    }

    async fn grade(&self, responses: &[Response]) -> AppResult<i32> {
        let response = self
            .http
            .post(self.url("/question/getScore"))
            .json(&responses)
            .send()
            .await?;

        read_json(response).await
    }
}
