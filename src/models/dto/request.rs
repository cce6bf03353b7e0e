use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Question;

/// Payload for adding a question to the bank. Only the title is validated;
/// category, options and the right answer are accepted as-is.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AddQuestionRequest {
    pub category: String,
    pub difficulty_level: String,
    #[validate(length(min = 1, message = "question title must not be empty"))]
    pub question_title: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub right_answer: String,
}

impl AddQuestionRequest {
    /// Builds the question record to persist. The store assigns the real id.
    pub fn into_question(self) -> Question {
        Question {
            id: 0,
            category: self.category,
            difficulty_level: self.difficulty_level,
            question_title: self.question_title,
            option1: self.option1,
            option2: self.option2,
            option3: self.option3,
            option4: self.option4,
            right_answer: self.right_answer,
        }
    }
}

/// Query parameters for `/question/generate`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SampleQuery {
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "numQuestions")]
    pub num_questions: usize,
}

/// Payload for creating a quiz from a sampled set of questions. The title is
/// accepted as-is; only the remote sample can fail quiz creation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateQuizRequest {
    #[serde(rename = "categoryName")]
    pub category_name: String,
    #[serde(rename = "numQuestions")]
    pub num_questions: usize,
    pub title: String,
}
