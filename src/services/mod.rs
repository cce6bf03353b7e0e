pub mod question_bank_service;
pub mod quiz_service;

pub use question_bank_service::QuestionBankService;
pub use quiz_service::QuizOrchestrationService;
