use serde::{Deserialize, Serialize};

/// A named, ordered list of question ids. The id list is set exactly once at
/// creation and never mutated. A quiz stores ids only, never question content
/// or answers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: i32, // Assigned by the store on insert
    pub title: String,
    pub question_ids: Vec<i32>,
}

impl Quiz {
    pub fn new(title: &str, question_ids: Vec<i32>) -> Self {
        Quiz {
            id: 0,
            title: title.to_string(),
            question_ids,
        }
    }
}
