use serde::Deserialize;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub ollama: OllamaConfig,
    pub embedding: EmbeddingConfig,
    pub rag: RagConfig,
    pub cors: CorsConfig,
    pub qdrant_url: String,
    pub redis_url: String,
    pub llm_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    pub url: String,
    /// Supplied via `GEMINI_API_KEY`; never a source literal.
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingConfig {
    /// `hashed` (deterministic, default) or `remote`.
    pub provider: String,
    pub model: String,
    pub dimension: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RagConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub top_k: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 8080),
            },
            gemini: GeminiConfig {
                url: env_or(
                    "GEMINI_URL",
                    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent",
                ),
                api_key: env_or("GEMINI_API_KEY", ""),
            },
            ollama: OllamaConfig {
                model: env_or("OLLAMA_MODEL", "llama3:8b"),
            },
            embedding: EmbeddingConfig {
                provider: env_or("EMBEDDING_PROVIDER", "hashed"),
                model: env_or("EMBEDDING_MODEL", "text-embedding-3-small"),
                dimension: env_parse("EMBEDDING_DIMENSION", 768),
            },
            rag: RagConfig {
                chunk_size: env_parse("CHUNK_SIZE", 500),
                chunk_overlap: env_parse("CHUNK_OVERLAP", 50),
                top_k: env_parse("RAG_TOP_K", 3),
            },
            cors: CorsConfig {
                allowed_origins: env_or("CORS_ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            qdrant_url: env_or("QDRANT_URL", "http://localhost:6334"),
            redis_url: env_or("REDIS_URL", "redis://localhost:6379"),
            llm_timeout_seconds: env_parse("LLM_TIMEOUT_SECONDS", 60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
