use axum::Json;
use serde::Deserialize;

use crate::domain::{score_quiz, Quiz, ScoreResult};

/// The quiz round-trips through the client between generation and scoring,
/// so nothing about it is trusted; mismatched lengths are truncated by the
/// scorer.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub quiz: Quiz,
    pub answers: Vec<Option<String>>,
}

pub async fn score_handler(Json(request): Json<ScoreRequest>) -> Json<ScoreResult> {
    Json(score_quiz(&request.quiz, &request.answers))
}
