use crate::domain::entities::TaskCategory;

/// Wraps retrieved context and the task instruction in the fixed envelope the
/// backends are prompted with.
pub fn build_prompt(task: TaskCategory, context: &str, input: &str) -> String {
    let instruction = task_instruction(task, input);
    format!("Context:\n{context}\n\nTask:\n{instruction}")
}

fn task_instruction(task: TaskCategory, input: &str) -> String {
    match task {
        TaskCategory::Review => {
            format!("Review the following material and explain it simply: {input}")
        }
        TaskCategory::Quiz => format!(
            "Create exactly 5 multiple-choice questions about: {input}. \
             Return ONLY a JSON array of objects with keys \"question\", \
             \"options\" (an array of 4 strings), and \"answer\". \
             Do not include any text before or after the JSON array."
        ),
        TaskCategory::Practice => format!(
            "Give one implementation exercise about: {input}. \
             Include a brief solution after the exercise."
        ),
        TaskCategory::General => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let prompt = build_prompt(TaskCategory::General, "some context", "hello");
        assert_eq!(prompt, "Context:\nsome context\n\nTask:\nhello");
    }

    #[test]
    fn test_general_passes_input_through_unmodified() {
        let prompt = build_prompt(TaskCategory::General, "", "what is rust?");
        assert!(prompt.ends_with("Task:\nwhat is rust?"));
    }

    #[test]
    fn test_quiz_instruction_demands_bare_json() {
        let prompt = build_prompt(TaskCategory::Quiz, "ctx", "ownership");
        assert!(prompt.contains("exactly 5 multiple-choice questions"));
        assert!(prompt.contains("JSON array"));
        assert!(prompt.contains("ownership"));
    }

    #[test]
    fn test_review_instruction_embeds_input() {
        let prompt = build_prompt(TaskCategory::Review, "", "chapter 2");
        assert!(prompt.contains("explain it simply: chapter 2"));
    }
}
