//! HTTP surface tests for the question service routes, served over an
//! in-memory question store so no MongoDB instance is needed.

use std::{collections::HashMap, sync::Arc};

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;

use quizhub_server::{
    app_state::QuestionAppState,
    config::Config,
    errors::AppResult,
    handlers::question_handler,
    models::domain::{Question, QuestionWrapper, Response},
    models::dto::AddQuestionRequest,
    repositories::QuestionRepository,
    services::QuestionBankService,
};

struct InMemoryQuestionRepository {
    questions: RwLock<HashMap<i32, Question>>,
    next_id: RwLock<i32>,
}

impl InMemoryQuestionRepository {
    fn new() -> Self {
        Self {
            questions: RwLock::new(HashMap::new()),
            next_id: RwLock::new(0),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn insert(&self, mut question: Question) -> AppResult<Question> {
        let mut next_id = self.next_id.write().await;
        *next_id += 1;
        question.id = *next_id;
        self.questions
            .write()
            .await
            .insert(question.id, question.clone());
        Ok(question)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Question>> {
        Ok(self.questions.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let mut items: Vec<_> = self.questions.read().await.values().cloned().collect();
        items.sort_by_key(|q| q.id);
        Ok(items)
    }

    async fn find_by_category(&self, category: &str) -> AppResult<Vec<Question>> {
        let mut items: Vec<_> = self
            .questions
            .read()
            .await
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect();
        items.sort_by_key(|q| q.id);
        Ok(items)
    }

    async fn sample_ids_by_category(&self, category: &str, count: usize) -> AppResult<Vec<i32>> {
        let mut ids: Vec<i32> = self
            .questions
            .read()
            .await
            .values()
            .filter(|q| q.category == category)
            .map(|q| q.id)
            .collect();
        ids.shuffle(&mut rand::thread_rng());
        ids.truncate(count);
        Ok(ids)
    }
}

fn test_state() -> QuestionAppState {
    let repository = Arc::new(InMemoryQuestionRepository::new());
    QuestionAppState {
        question_service: Arc::new(QuestionBankService::new(repository)),
        config: Arc::new(Config::from_env()),
    }
}

fn question_request(title: &str, category: &str, right_answer: &str) -> AddQuestionRequest {
    AddQuestionRequest {
        category: category.to_string(),
        difficulty_level: "Easy".to_string(),
        question_title: title.to_string(),
        option1: right_answer.to_string(),
        option2: "wrong".to_string(),
        option3: "also wrong".to_string(),
        option4: "still wrong".to_string(),
        right_answer: right_answer.to_string(),
    }
}

macro_rules! question_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .service(question_handler::add_question)
                .service(question_handler::get_all_questions)
                .service(question_handler::get_questions_by_category)
                .service(question_handler::generate_questions_for_quiz)
                .service(question_handler::get_questions_from_ids)
                .service(question_handler::get_score),
        )
        .await
    };
}

#[actix_web::test]
async fn add_question_returns_created_success() {
    let state = test_state();
    let app = question_app!(state);

    let req = test::TestRequest::post()
        .uri("/question/add")
        .set_json(question_request("Supported platforms?", "Java", "32 and 64"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = test::read_body(resp).await;
    assert_eq!(body, "success");
}

#[actix_web::test]
async fn add_question_with_empty_title_is_not_acceptable() {
    let state = test_state();
    let app = question_app!(state);

    let req = test::TestRequest::post()
        .uri("/question/add")
        .set_json(question_request("", "Java", "x"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_ACCEPTABLE);
    let body = test::read_body(resp).await;
    assert_eq!(body, "failure");
}

#[actix_web::test]
async fn all_questions_lists_the_bank_with_answers() {
    let state = test_state();
    state
        .question_service
        .add_question(question_request("q1", "Java", "a"))
        .await
        .unwrap();
    let app = question_app!(state);

    let req = test::TestRequest::get()
        .uri("/question/allQuestions")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let questions: Vec<Question> = test::read_body_json(resp).await;
    assert_eq!(questions.len(), 1);
    // The admin-facing listing is the one place full records are returned
    assert_eq!(questions[0].right_answer, "a");
}

#[actix_web::test]
async fn category_listing_is_exact_match() {
    let state = test_state();
    state
        .question_service
        .add_question(question_request("q1", "Java", "a"))
        .await
        .unwrap();
    state
        .question_service
        .add_question(question_request("q2", "Python", "b"))
        .await
        .unwrap();
    let app = question_app!(state);

    let req = test::TestRequest::get()
        .uri("/question/category/Java")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let questions: Vec<Question> = test::read_body_json(resp).await;
    assert_eq!(questions.len(), 1);

    let req = test::TestRequest::get()
        .uri("/question/category/java")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let questions: Vec<Question> = test::read_body_json(resp).await;
    assert!(questions.is_empty());
}

#[actix_web::test]
async fn generate_returns_sampled_ids() {
    let state = test_state();
    for i in 0..4 {
        state
            .question_service
            .add_question(question_request(&format!("q{}", i), "Java", "a"))
            .await
            .unwrap();
    }
    let app = question_app!(state);

    let req = test::TestRequest::get()
        .uri("/question/generate?categoryName=Java&numQuestions=2")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let ids: Vec<i32> = test::read_body_json(resp).await;
    assert_eq!(ids.len(), 2);
}

#[actix_web::test]
async fn get_questions_redacts_answers() {
    let state = test_state();
    let stored = state
        .question_service
        .add_question(question_request("q1", "Java", "secret"))
        .await
        .unwrap();
    let app = question_app!(state);

    let req = test::TestRequest::post()
        .uri("/question/getQuestions")
        .set_json(vec![stored.id])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let wrappers: Vec<QuestionWrapper> = test::read_body_json(resp).await;
    assert_eq!(wrappers.len(), 1);
    assert_eq!(wrappers[0].id, stored.id);
    assert_eq!(wrappers[0].question_title, "q1");
}

#[actix_web::test]
async fn get_questions_with_empty_ids_is_forbidden() {
    let state = test_state();
    let app = question_app!(state);

    let req = test::TestRequest::post()
        .uri("/question/getQuestions")
        .set_json(Vec::<i32>::new())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn get_questions_with_unknown_id_is_not_found() {
    let state = test_state();
    let app = question_app!(state);

    let req = test::TestRequest::post()
        .uri("/question/getQuestions")
        .set_json(vec![777])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn get_score_counts_right_answers() {
    let state = test_state();
    let stored = state
        .question_service
        .add_question(question_request("q1", "Java", "32 and 64"))
        .await
        .unwrap();
    let app = question_app!(state);

    let responses = vec![Response {
        id: stored.id,
        response: "32 and 64".to_string(),
    }];
    let req = test::TestRequest::post()
        .uri("/question/getScore")
        .set_json(responses)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let score: i32 = test::read_body_json(resp).await;
    assert_eq!(score, 1);
}

#[actix_web::test]
async fn get_score_with_non_positive_id_reports_zero() {
    let state = test_state();
    let stored = state
        .question_service
        .add_question(question_request("q1", "Java", "right"))
        .await
        .unwrap();
    let app = question_app!(state);

    // The valid trailing answer must not be credited
    let responses = vec![
        Response {
            id: 0,
            response: "x".to_string(),
        },
        Response {
            id: stored.id,
            response: "right".to_string(),
        },
    ];
    let req = test::TestRequest::post()
        .uri("/question/getScore")
        .set_json(responses)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let score: i32 = test::read_body_json(resp).await;
    assert_eq!(score, 0);
}
