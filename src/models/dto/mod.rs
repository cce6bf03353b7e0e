pub mod request;

pub use request::{AddQuestionRequest, CreateQuizRequest, SampleQuery};
