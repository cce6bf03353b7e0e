use serde::{Deserialize, Serialize};

/// A full question record, including its correct answer. Never returned to
/// a quiz-taking client as-is; expose a [`QuestionWrapper`] instead.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i32, // Assigned by the store on insert
    pub category: String,
    pub difficulty_level: String,
    pub question_title: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub right_answer: String,
}

/// The answer-redacted projection of a [`Question`] that is safe to hand to
/// quiz takers. Built on demand; has no lifecycle of its own.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionWrapper {
    pub id: i32,
    pub question_title: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
}

impl From<&Question> for QuestionWrapper {
    fn from(question: &Question) -> Self {
        QuestionWrapper {
            id: question.id,
            question_title: question.question_title.clone(),
            option1: question.option1.clone(),
            option2: question.option2.clone(),
            option3: question.option3.clone(),
            option4: question.option4.clone(),
        }
    }
}
