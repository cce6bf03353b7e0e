use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::QuestionAppState,
    errors::AppError,
    models::domain::{Question, Response},
    models::dto::{AddQuestionRequest, SampleQuery},
};

#[post("/question/add")]
pub async fn add_question(
    state: web::Data<QuestionAppState>,
    request: web::Json<AddQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    match state.question_service.add_question(request.into_inner()).await {
        Ok(_) => Ok(HttpResponse::Created().body("success")),
        Err(AppError::ValidationError(message)) => {
            log::warn!("Rejected question: {}", message);
            Ok(HttpResponse::NotAcceptable().body("failure"))
        }
        Err(err) => Err(err),
    }
}

#[get("/question/allQuestions")]
pub async fn get_all_questions(state: web::Data<QuestionAppState>) -> HttpResponse {
    match state.question_service.list_all().await {
        Ok(questions) => HttpResponse::Ok().json(questions),
        Err(err) => {
            log::error!("Listing questions failed: {}", err);
            HttpResponse::BadRequest().json(Vec::<Question>::new())
        }
    }
}

#[get("/question/category/{category}")]
pub async fn get_questions_by_category(
    state: web::Data<QuestionAppState>,
    category: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .question_service
        .list_by_category(&category.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[get("/question/generate")]
pub async fn generate_questions_for_quiz(
    state: web::Data<QuestionAppState>,
    query: web::Query<SampleQuery>,
) -> Result<HttpResponse, AppError> {
    let ids = state
        .question_service
        .sample_ids_for_quiz(&query.category_name, query.num_questions)
        .await?;
    Ok(HttpResponse::Ok().json(ids))
}

#[post("/question/getQuestions")]
pub async fn get_questions_from_ids(
    state: web::Data<QuestionAppState>,
    ids: web::Json<Vec<i32>>,
) -> Result<HttpResponse, AppError> {
    let wrappers = state.question_service.fetch_wrapped(&ids).await?;
    Ok(HttpResponse::Ok().json(wrappers))
}

#[post("/question/getScore")]
pub async fn get_score(
    state: web::Data<QuestionAppState>,
    responses: web::Json<Vec<Response>>,
) -> Result<HttpResponse, AppError> {
    match state.question_service.grade(&responses).await {
        Ok(score) => Ok(HttpResponse::Ok().json(score)),
        Err(AppError::InvalidResponse(message)) => {
            // Fail-fast contract: the whole batch is rejected and the
            // reported score is zero.
            log::warn!("Rejected score submission: {}", message);
            Ok(HttpResponse::BadRequest().json(0))
        }
        Err(err) => Err(err),
    }
}
