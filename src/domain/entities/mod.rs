mod conversation;
mod document;
mod embedding;
mod quiz;
mod task;

pub use conversation::{Message, MessageRole};
pub use document::{chunk_windows, Chunk};
pub use embedding::Embedding;
pub use quiz::{extract_quiz, score_quiz, Quiz, QuizExtractError, QuizQuestion, ScoreResult};
pub use task::TaskCategory;
