use std::sync::Arc;

use crate::{
    clients::QuestionClient,
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuestionWrapper, Response},
    repositories::QuizRepository,
};

/// Quiz lifecycle orchestration. Owns quiz identity locally and delegates
/// every question-bank operation to the question service through
/// [`QuestionClient`]; it never touches question records directly.
pub struct QuizOrchestrationService {
    repository: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionClient>,
}

impl QuizOrchestrationService {
    pub fn new(repository: Arc<dyn QuizRepository>, questions: Arc<dyn QuestionClient>) -> Self {
        Self {
            repository,
            questions,
        }
    }

    /// Samples question ids remotely, then persists the quiz locally. A
    /// remote failure propagates with nothing persisted. There is no
    /// compensating delete if the local insert fails after a successful
    /// sample; the sample has no remote side effects to undo.
    pub async fn create_quiz(
        &self,
        category: &str,
        num_questions: usize,
        title: &str,
    ) -> AppResult<Quiz> {
        let question_ids = self
            .questions
            .sample_ids_for_quiz(category, num_questions)
            .await?;

        let quiz = self.repository.insert(Quiz::new(title, question_ids)).await?;
        log::info!(
            "Created quiz {} ('{}') with {} questions",
            quiz.id,
            quiz.title,
            quiz.question_ids.len()
        );
        Ok(quiz)
    }

    /// Resolves a quiz to its redacted questions. Remote errors from the
    /// question service pass through unchanged.
    pub async fn get_quiz_questions(&self, quiz_id: i32) -> AppResult<Vec<QuestionWrapper>> {
        let quiz = self
            .repository
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("quiz {}", quiz_id)))?;

        self.questions.fetch_wrapped(&quiz.question_ids).await
    }

    /// Forwards a response batch for grading. The quiz id addresses the
    /// submission for logging; submitted response ids are not cross-checked
    /// against the quiz's stored ids.
    pub async fn submit_responses(&self, quiz_id: i32, responses: &[Response]) -> AppResult<i32> {
        let score = self.questions.grade(responses).await?;
        log::info!(
            "Quiz {} submission graded: {} of {} correct",
            quiz_id,
            score,
            responses.len()
        );
        Ok(score)
    }
}
