use std::collections::HashSet;
use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, QuestionWrapper, Response},
    models::dto::AddQuestionRequest,
    repositories::QuestionRepository,
};

/// Owns the question bank: validates new questions, samples ids for quiz
/// assembly, redacts answers when exposing questions and grades response
/// batches.
pub struct QuestionBankService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuestionBankService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    /// Persists a new question. Only the title is validated; every other
    /// field is stored as received.
    pub async fn add_question(&self, request: AddQuestionRequest) -> AppResult<Question> {
        request.validate()?;
        self.repository.insert(request.into_question()).await
    }

    pub async fn list_all(&self) -> AppResult<Vec<Question>> {
        self.repository.find_all().await
    }

    /// Exact-string category filter. An unknown category is an empty list,
    /// not an error.
    pub async fn list_by_category(&self, category: &str) -> AppResult<Vec<Question>> {
        self.repository.find_by_category(category).await
    }

    /// Returns up to `count` distinct question ids from `category`, chosen
    /// uniformly at random. When `count` exceeds the category size every
    /// available id is returned (clamp, not an error).
    pub async fn sample_ids_for_quiz(&self, category: &str, count: usize) -> AppResult<Vec<i32>> {
        let ids = self
            .repository
            .sample_ids_by_category(category, count)
            .await?;

        // Mongo's $sample can emit the same document more than once on its
        // pseudo-random cursor path; sampled ids must be distinct, so only
        // the first occurrence of each id is kept.
        let mut seen = HashSet::with_capacity(ids.len());
        Ok(ids.into_iter().filter(|id| seen.insert(*id)).collect())
    }

    /// Resolves each id to its redacted projection, preserving input order.
    pub async fn fetch_wrapped(&self, ids: &[i32]) -> AppResult<Vec<QuestionWrapper>> {
        if ids.is_empty() {
            return Err(AppError::EmptyInput(
                "no question ids supplied".to_string(),
            ));
        }

        let mut wrappers = Vec::with_capacity(ids.len());
        for &id in ids {
            let question = self
                .repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("question {}", id)))?;
            wrappers.push(QuestionWrapper::from(&question));
        }

        Ok(wrappers)
    }

    /// Counts responses whose answer string exactly equals the referenced
    /// question's right answer. Fail-fast: the first non-positive id aborts
    /// the whole batch and nothing already counted is credited.
    pub async fn grade(&self, responses: &[Response]) -> AppResult<i32> {
        let mut right_answers = 0;

        for response in responses {
            if response.id <= 0 {
                return Err(AppError::InvalidResponse(format!(
                    "response id {} is not positive",
                    response.id
                )));
            }

            let question = self
                .repository
                .find_by_id(response.id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("question {}", response.id)))?;

            if response.response == question.right_answer {
                right_answers += 1;
            }
        }

        Ok(right_answers)
    }
}
