use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// Durable question bank. Insert assigns the id; lookups are by id or by
/// exact category string. `sample_ids_by_category` returns ids in random
/// order, clamped to however many the category holds; backends are not
/// required to deliver each id at most once — [`QuestionBankService`]
/// enforces distinctness on top of this trait.
///
/// [`QuestionBankService`]: crate::services::QuestionBankService
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn insert(&self, question: Question) -> AppResult<Question>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Question>>;
    async fn find_all(&self) -> AppResult<Vec<Question>>;
    async fn find_by_category(&self, category: &str) -> AppResult<Vec<Question>>;
    async fn sample_ids_by_category(&self, category: &str, count: usize) -> AppResult<Vec<i32>>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
    counters: Collection<Document>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_collection("questions"),
            counters: db.get_collection("counters"),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

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

        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1 })
            .options(IndexOptions::builder().name("category".to_string()).build())
            .build();
        self.collection.create_index(category_index).await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }

    /// Atomically increments and returns the next id for `sequence`.
    async fn next_id(&self, sequence: &str) -> AppResult<i32> {
        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": sequence }, doc! { "$inc": { "seq": 1 } })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError(format!("counter '{}' missing after upsert", sequence))
            })?;

        counter
            .get_i32("seq")
            .map_err(|err| AppError::DatabaseError(format!("counter '{}': {}", sequence, err)))
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn insert(&self, mut question: Question) -> AppResult<Question> {
        question.id = self.next_id("questions").await?;
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Question> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn find_by_category(&self, category: &str) -> AppResult<Vec<Question>> {
        let cursor = self.collection.find(doc! { "category": category }).await?;
        let items: Vec<Question> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn sample_ids_by_category(&self, category: &str, count: usize) -> AppResult<Vec<i32>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        // $sample returns the whole match set when the requested size
        // exceeds it, which gives the clamp behavior. It can also emit the
        // same document more than once (pseudo-random cursor path), so the
        // ids collected here are not guaranteed distinct.
        let pipeline = vec![
            doc! { "$match": { "category": category } },
            doc! { "$sample": { "size": count as i64 } },
            doc! { "$project": { "_id": 0, "id": 1 } },
        ];

        let mut cursor = self.collection.aggregate(pipeline).await?;
        let mut ids = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            let id = document
                .get_i32("id")
                .map_err(|err| AppError::DatabaseError(format!("sampled id: {}", err)))?;
            ids.push(id);
        }

        Ok(ids)
    }
}
