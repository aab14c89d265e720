use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::domain::{ports::GenerationBackend, DomainError};

/// Local model runner invoked as a subordinate process. The prompt goes to
/// stdin, the reply is stdout trimmed of surrounding whitespace. A failed
/// launch or a non-zero exit never panics; it surfaces as an error-bearing
/// reply via the dispatcher's degrade path.
pub struct OllamaBackend {
    program: String,
    model: String,
}

impl OllamaBackend {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            program: "ollama".to_string(),
            model: model.into(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

#[async_trait]
impl GenerationBackend for OllamaBackend {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let mut child = Command::new(&self.program)
            .arg("run")
            .arg(&self.model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| DomainError::external(format!("failed to launch local model: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A write error means the runner already exited; its status and
            // stderr tell the rest of the story. Dropping the handle closes
            // the pipe so the runner sees end of input.
            let _ = stdin.write_all(prompt.as_bytes()).await;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| DomainError::external(format!("local model did not finish: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stdout.is_empty() {
                return Ok(format!("Local model failed: {stderr}"));
            }
        }

        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_nonzero_exit_degrades_to_error_bearing_reply() {
        // `sh run <model>` exits non-zero with empty stdout, standing in for
        // a runner that crashed before producing anything.
        let backend = OllamaBackend::new("llama3:8b").with_program("sh");
        let reply = backend.generate("hi").await.unwrap();
        assert!(reply.starts_with("Local model failed:"));
    }

    #[tokio::test]
    async fn test_launch_failure_is_an_error_for_the_dispatcher() {
        let backend = OllamaBackend::new("llama3:8b").with_program("definitely-not-a-binary");
        let err = backend.generate("hi").await.unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
    }
}
