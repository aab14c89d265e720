mod gemini;
mod ollama;

pub use gemini::GeminiBackend;
pub use ollama::OllamaBackend;
