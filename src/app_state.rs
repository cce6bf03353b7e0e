use std::sync::Arc;
use std::time::Duration;

use crate::{
    clients::HttpQuestionClient,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuestionRepository, MongoQuizRepository},
    services::{QuestionBankService, QuizOrchestrationService},
};

/// Composition root for the question service binary.
#[derive(Clone)]
pub struct QuestionAppState {
    pub question_service: Arc<QuestionBankService>,
    pub config: Arc<Config>,
}

impl QuestionAppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;
        let question_service = Arc::new(QuestionBankService::new(question_repository));

        Ok(Self {
            question_service,
            config: Arc::new(config),
        })
    }
}

/// Composition root for the quiz service binary.
#[derive(Clone)]
pub struct QuizAppState {
    pub quiz_service: Arc<QuizOrchestrationService>,
    pub config: Arc<Config>,
}

impl QuizAppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let question_client = Arc::new(HttpQuestionClient::new(
            &config.question_service_url,
            Duration::from_secs(config.remote_timeout_secs),
        )?);
        let quiz_service = Arc::new(QuizOrchestrationService::new(
            quiz_repository,
            question_client,
        ));

        Ok(Self {
            quiz_service,
            config: Arc::new(config),
        })
    }
}
