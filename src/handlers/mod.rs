pub mod question_handler;
pub mod quiz_handler;
