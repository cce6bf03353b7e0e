use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::QuizAppState,
    errors::AppError,
    models::domain::Response,
    models::dto::CreateQuizRequest,
};

#[post("/quiz/create")]
pub async fn create_quiz(
    state: web::Data<QuizAppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    state
        .quiz_service
        .create_quiz(&request.category_name, request.num_questions, &request.title)
        .await?;
    Ok(HttpResponse::Created().body("Success"))
}

#[get("/quiz/get/{id}")]
pub async fn get_quiz_questions(
    state: web::Data<QuizAppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let wrappers = state.quiz_service.get_quiz_questions(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(wrappers))
}

#[post("/quiz/submit/{id}")]
pub async fn submit_quiz(
    state: web::Data<QuizAppState>,
    id: web::Path<i32>,
    responses: web::Json<Vec<Response>>,
) -> Result<HttpResponse, AppError> {
    let score = state
        .quiz_service
        .submit_responses(id.into_inner(), &responses)
        .await?;
    Ok(HttpResponse::Ok().json(score))
}
