use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Quiz,
};

/// Durable quiz store. A quiz is written once at creation and read
/// thereafter; there is no update operation.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Quiz>>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
    counters: Collection<Document>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_collection("quizzes"),
            counters: db.get_collection("counters"),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }

    async fn next_id(&self) -> AppResult<i32> {
        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": "quizzes" }, doc! { "$inc": { "seq": 1 } })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError("counter 'quizzes' missing after upsert".to_string())
            })?;

        counter
            .get_i32("seq")
            .map_err(|err| AppError::DatabaseError(format!("counter 'quizzes': {}", err)))
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn insert(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        quiz.id = self.next_id().await?;
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }
}
