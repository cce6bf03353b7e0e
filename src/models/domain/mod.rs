pub mod question;
pub mod quiz;
pub mod response;

pub use question::{Question, QuestionWrapper};
pub use quiz::Quiz;
pub use response::Response;
