use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One multiple-choice question. Options are labelled A, B, C… by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

pub type Quiz = Vec<QuizQuestion>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: usize,
    pub total: usize,
    pub answers: Vec<String>,
}

/// Failure to locate or parse a quiz inside generated text. Both variants
/// keep the raw text so the caller can log or display it.
#[derive(Error, Debug)]
pub enum QuizExtractError {
    #[error("No quiz found in model output")]
    NoQuizFound { raw: String },

    #[error("Quiz output was not valid JSON: {reason}")]
    MalformedQuiz { raw: String, reason: String },
}

impl QuizExtractError {
    pub fn raw(&self) -> &str {
        match self {
            Self::NoQuizFound { raw } | Self::MalformedQuiz { raw, .. } => raw,
        }
    }
}

/// Pulls a quiz out of free-form model output.
///
/// The quiz is expected as a JSON array somewhere in the text; surrounding
/// prose is tolerated. The span runs from the first `[` to the last `]` so
/// nested arrays inside questions stay intact.
pub fn extract_quiz(raw: &str) -> Result<Quiz, QuizExtractError> {
    let start = raw.find('[');
    let end = raw.rfind(']');

    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if s < e => (s, e),
        _ => {
            return Err(QuizExtractError::NoQuizFound {
                raw: raw.to_string(),
            })
        }
    };

    serde_json::from_str(&raw[start..=end]).map_err(|e| QuizExtractError::MalformedQuiz {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Scores submitted answers against a quiz.
///
/// Pairs are matched positionally up to the shorter of the two sequences;
/// trailing entries on either side are ignored, so a tampered or truncated
/// submission can never score above `quiz.len()`. Empty submissions are
/// skipped.
pub fn score_quiz(quiz: &[QuizQuestion], submitted: &[Option<String>]) -> ScoreResult {
    let mut score = 0;

    for (question, given) in quiz.iter().zip(submitted.iter()) {
        let Some(given) = given.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            continue;
        };

        let correct = normalize_answer(&question.answer, &question.options);
        let chosen = normalize_answer(given, &question.options);

        if let (Some(correct), Some(chosen)) = (correct, chosen) {
            if correct == chosen {
                score += 1;
            }
        }
    }

    ScoreResult {
        score,
        total: quiz.len(),
        answers: quiz.iter().map(|q| q.answer.clone()).collect(),
    }
}

/// Resolves an answer to an option letter ('A', 'B', …).
///
/// Tried in order: a bare letter; a letter followed by `.` or a space; a
/// case-insensitive exact match against the option texts. Anything else is
/// unmatched and never scores.
fn normalize_answer(answer: &str, options: &[String]) -> Option<char> {
    let answer = answer.trim();
    let mut chars = answer.chars();

    match (chars.next(), chars.next()) {
        (Some(first), None) if first.is_ascii_alphabetic() => {
            return Some(first.to_ascii_uppercase());
        }
        (Some(first), Some(sep))
            if first.is_ascii_alphabetic() && (sep == '.' || sep == ' ') =>
        {
            return Some(first.to_ascii_uppercase());
        }
        _ => {}
    }

    options
        .iter()
        .position(|opt| opt.trim().eq_ignore_ascii_case(answer))
        .map(|idx| (b'A' + idx as u8) as char)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capitals_question() -> QuizQuestion {
        QuizQuestion {
            question: "Capital of France?".into(),
            options: vec!["Paris".into(), "London".into(), "Berlin".into(), "Madrid".into()],
            answer: "Paris".into(),
        }
    }

    #[test]
    fn test_extract_quiz_from_surrounding_prose() {
        let raw = "Here you go:\n[{\"question\":\"2+2?\",\"options\":[\"3\",\"4\"],\"answer\":\"4\"}]\nThanks";
        let quiz = extract_quiz(raw).unwrap();
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].question, "2+2?");
        assert_eq!(quiz[0].answer, "4");
    }

    #[test]
    fn test_extract_quiz_without_brackets_fails() {
        let err = extract_quiz("I cannot produce a quiz right now.").unwrap_err();
        assert!(matches!(err, QuizExtractError::NoQuizFound { .. }));
        assert_eq!(err.raw(), "I cannot produce a quiz right now.");
    }

    #[test]
    fn test_extract_quiz_malformed_span_keeps_raw() {
        let raw = "sure: [not json at all]";
        let err = extract_quiz(raw).unwrap_err();
        assert!(matches!(err, QuizExtractError::MalformedQuiz { .. }));
        assert_eq!(err.raw(), raw);
    }

    #[test]
    fn test_score_full_text_answer_matches_letter() {
        let quiz = vec![capitals_question()];

        let result = score_quiz(&quiz, &[Some("A".into())]);
        assert_eq!(result.score, 1);
        assert_eq!(result.total, 1);

        let result = score_quiz(&quiz, &[Some("B".into())]);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_score_accepts_letter_with_separator_and_case() {
        let quiz = vec![capitals_question()];
        assert_eq!(score_quiz(&quiz, &[Some("a.".into())]).score, 1);
        assert_eq!(score_quiz(&quiz, &[Some("a Paris".into())]).score, 1);
        assert_eq!(score_quiz(&quiz, &[Some("paris".into())]).score, 1);
        assert_eq!(score_quiz(&quiz, &[Some("rome".into())]).score, 0);
    }

    #[test]
    fn test_score_skips_empty_and_missing_answers() {
        let quiz = vec![capitals_question(), capitals_question()];
        let result = score_quiz(&quiz, &[None, Some("  ".into())]);
        assert_eq!(result.score, 0);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_score_truncates_mismatched_lengths() {
        let quiz = vec![capitals_question()];
        let submitted = vec![Some("A".into()), Some("A".into()), Some("A".into())];
        let result = score_quiz(&quiz, &submitted);
        assert_eq!(result.score, 1);
        assert_eq!(result.total, 1);

        let result = score_quiz(&quiz, &[]);
        assert_eq!(result.score, 0);
        assert_eq!(result.total, 1);
    }

    #[test]
    fn test_score_is_monotone_in_correct_answers() {
        let quiz = vec![capitals_question(), capitals_question(), capitals_question()];
        let mut submitted: Vec<Option<String>> = vec![None, None, None];
        let mut last = 0;
        for i in 0..3 {
            submitted[i] = Some("A".into());
            let score = score_quiz(&quiz, &submitted).score;
            assert!(score >= last);
            assert!(score <= quiz.len());
            last = score;
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn test_answers_echo_stored_correct_answers() {
        let quiz = vec![capitals_question()];
        let result = score_quiz(&quiz, &[Some("B".into())]);
        assert_eq!(result.answers, vec!["Paris"]);
    }
}
