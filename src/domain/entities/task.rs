use serde::{Deserialize, Serialize};

/// What the user is asking for, inferred from their message. Determines the
/// prompt shape and whether the reply is post-processed into a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Quiz,
    Practice,
    Review,
    General,
}

const QUIZ_KEYWORDS: &[&str] = &["quiz", "question", "test", "mcq"];
const PRACTICE_KEYWORDS: &[&str] = &["implement", "practice", "code", "program", "exercise"];
const REVIEW_KEYWORDS: &[&str] = &["review", "explain", "summarize", "summary"];

impl TaskCategory {
    /// Case-insensitive substring match against fixed keyword sets.
    ///
    /// Sets are checked in a fixed priority order (quiz, practice, review)
    /// and the first matching set wins, regardless of where in the input the
    /// keyword appears.
    pub fn classify(input: &str) -> Self {
        let input = input.to_lowercase();

        if QUIZ_KEYWORDS.iter().any(|k| input.contains(k)) {
            Self::Quiz
        } else if PRACTICE_KEYWORDS.iter().any(|k| input.contains(k)) {
            Self::Practice
        } else if REVIEW_KEYWORDS.iter().any(|k| input.contains(k)) {
            Self::Review
        } else {
            Self::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Practice => "practice",
            Self::Review => "review",
            Self::General => "general",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_category() {
        assert_eq!(TaskCategory::classify("Generate a quiz on Rust"), TaskCategory::Quiz);
        assert_eq!(
            TaskCategory::classify("give me an exercise to practice"),
            TaskCategory::Practice
        );
        assert_eq!(
            TaskCategory::classify("Explain lifetimes simply"),
            TaskCategory::Review
        );
        assert_eq!(TaskCategory::classify("hello there"), TaskCategory::General);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(TaskCategory::classify("MCQ me"), TaskCategory::Quiz);
        assert_eq!(TaskCategory::classify("REVIEW this"), TaskCategory::Review);
    }

    #[test]
    fn test_quiz_priority_beats_later_sets() {
        // "test" (quiz) and "code" (practice) both match; quiz is checked first.
        assert_eq!(
            TaskCategory::classify("test my code knowledge"),
            TaskCategory::Quiz
        );
        // Match position is irrelevant, only set priority counts.
        assert_eq!(
            TaskCategory::classify("explain this, then quiz me"),
            TaskCategory::Quiz
        );
    }

    #[test]
    fn test_classify_is_pure() {
        let input = "summarize chapter 3";
        assert_eq!(TaskCategory::classify(input), TaskCategory::classify(input));
    }
}
