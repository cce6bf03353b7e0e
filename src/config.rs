use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub question_server_port: u16,
    pub quiz_server_port: u16,
    pub question_service_url: String,
    pub remote_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "quizhub-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            question_server_port: env::var("QUESTION_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            quiz_server_port: env::var("QUIZ_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8090),
            question_service_url: env::var("QUESTION_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            remote_timeout_secs: env::var("REMOTE_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(5),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "quizhub-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            question_server_port: 8080,
            quiz_server_port: 8090,
            question_service_url: "http://127.0.0.1:8080".to_string(),
            remote_timeout_secs: 1,
        }
    }
}
