use serde::{Deserialize, Serialize};

/// A test taker's submitted answer for one question. Transient: it only
/// exists for the duration of a scoring call and is never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Response {
    pub id: i32,
    pub response: String,
}
