pub mod question_client;

pub use question_client::{HttpQuestionClient, QuestionClient};

#[cfg(test)]
pub use question_client::MockQuestionClient;
