use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizhub_server::{
    app_state::QuestionAppState, config::Config, handlers::question_handler,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.question_server_port;

    let state = QuestionAppState::new(config)
        .await
        .expect("failed to initialize question service");

    log::info!("Starting question service on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(question_handler::add_question)
            .service(question_handler::get_all_questions)
            .service(question_handler::get_questions_by_category)
            .service(question_handler::generate_questions_for_quiz)
            .service(question_handler::get_questions_from_ids)
            .service(question_handler::get_score)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
