use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizhub_server::{app_state::QuizAppState, config::Config, handlers::quiz_handler};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.quiz_server_port;

    let state = QuizAppState::new(config)
        .await
        .expect("failed to initialize quiz service");

    log::info!("Starting quiz service on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(quiz_handler::create_quiz)
            .service(quiz_handler::get_quiz_questions)
            .service(quiz_handler::submit_quiz)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
