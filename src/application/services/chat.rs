use std::sync::Arc;
use tracing::instrument;

use crate::application::services::{ContextService, ModelDispatcher};
use crate::domain::{
    extract_quiz, ports::MessageLog, prompt::build_prompt, DomainError, Message, Quiz,
    TaskCategory,
};

/// What a chat turn hands back to the caller: a plain reply, or a structured
/// quiz for quiz tasks. Extraction failures become a plain reply carrying the
/// raw model output.
#[derive(Debug)]
pub enum ChatOutcome {
    Reply(String),
    Quiz(Quiz),
}

/// Orchestrates one chat turn: classify, retrieve, build the prompt,
/// dispatch, post-process quiz output, and record both sides of the exchange.
pub struct ChatService {
    context: Arc<ContextService>,
    dispatcher: Arc<ModelDispatcher>,
    log: Arc<dyn MessageLog>,
}

impl ChatService {
    pub fn new(
        context: Arc<ContextService>,
        dispatcher: Arc<ModelDispatcher>,
        log: Arc<dyn MessageLog>,
    ) -> Self {
        Self {
            context,
            dispatcher,
            log,
        }
    }

    #[instrument(skip(self, message))]
    pub async fn converse(
        &self,
        message: &str,
        selector: &str,
        use_retrieval: bool,
    ) -> Result<ChatOutcome, DomainError> {
        let task = TaskCategory::classify(message);
        tracing::debug!(task = task.as_str(), "classified");

        self.log.append(&Message::user(message)).await?;

        let context = self.context.assemble(message, use_retrieval).await?;
        let prompt = build_prompt(task, &context, message);

        let reply = self.dispatcher.dispatch(selector, &prompt).await;

        // The raw reply is logged even for quiz tasks, where the caller sees
        // the extracted structure instead.
        self.log.append(&Message::assistant(&reply)).await?;

        if task == TaskCategory::Quiz {
            return Ok(match extract_quiz(&reply) {
                Ok(quiz) => ChatOutcome::Quiz(quiz),
                Err(e) => {
                    tracing::warn!(error = %e, "quiz extraction failed");
                    ChatOutcome::Reply(format!("{e}. Raw model output:\n{}", e.raw()))
                }
            });
        }

        Ok(ChatOutcome::Reply(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    use crate::domain::ports::GenerationBackend;
    use crate::infrastructure::{HashedEmbedding, InMemoryMessageLog, InMemoryVectorStore};

    struct CannedBackend(&'static str);

    #[async_trait]
    impl GenerationBackend for CannedBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, DomainError> {
            Ok(self.0.to_string())
        }
    }

    fn chat_service(reply: &'static str, log: Arc<InMemoryMessageLog>) -> ChatService {
        let context = Arc::new(ContextService::new(
            Arc::new(HashedEmbedding::new(32)),
            Arc::new(InMemoryVectorStore::new()),
            3,
        ));
        let dispatcher = Arc::new(
            ModelDispatcher::new(Duration::from_secs(5))
                .register("canned", Arc::new(CannedBackend(reply))),
        );
        ChatService::new(context, dispatcher, log)
    }

    #[tokio::test]
    async fn test_general_turn_returns_reply_and_logs_both_sides() {
        let log = Arc::new(InMemoryMessageLog::new());
        let service = chat_service("hello back", log.clone());

        let outcome = service.converse("hello", "canned", false).await.unwrap();

        assert!(matches!(outcome, ChatOutcome::Reply(ref r) if r == "hello back"));
        let history = log.history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "hello");
        assert_eq!(history[1].content, "hello back");
    }

    #[tokio::test]
    async fn test_quiz_turn_returns_structured_quiz_but_logs_raw_reply() {
        let raw = r#"[{"question":"2+2?","options":["3","4"],"answer":"4"}]"#;
        let log = Arc::new(InMemoryMessageLog::new());
        let service = chat_service(raw, log.clone());

        let outcome = service
            .converse("quiz me on arithmetic", "canned", false)
            .await
            .unwrap();

        let ChatOutcome::Quiz(quiz) = outcome else {
            panic!("expected a quiz outcome");
        };
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].answer, "4");

        let history = log.history().await.unwrap();
        assert_eq!(history[1].content, raw);
    }

    #[tokio::test]
    async fn test_quiz_extraction_failure_degrades_to_reply_with_raw_text() {
        let log = Arc::new(InMemoryMessageLog::new());
        let service = chat_service("sorry, no can do", log.clone());

        let outcome = service.converse("quiz me", "canned", false).await.unwrap();

        let ChatOutcome::Reply(reply) = outcome else {
            panic!("expected a degraded reply");
        };
        assert!(reply.contains("sorry, no can do"));
    }

    #[tokio::test]
    async fn test_unknown_selector_still_completes_the_turn() {
        let log = Arc::new(InMemoryMessageLog::new());
        let service = chat_service("unused", log.clone());

        let outcome = service.converse("hello", "nope", false).await.unwrap();

        assert!(matches!(
            outcome,
            ChatOutcome::Reply(ref r) if r == crate::application::INVALID_MODEL_REPLY
        ));
    }
}
