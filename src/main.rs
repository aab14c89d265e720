use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use study_agent::api::{create_router, AppState};
use study_agent::application::{ChatService, ContextService, IngestService, ModelDispatcher};
use study_agent::infrastructure::{
    create_pool, create_provider, Config, GeminiBackend, OllamaBackend, PlainTextReader,
    QdrantVectorStore, RedisMessageLog,
};

const COLLECTION_NAME: &str = "documents";
const MESSAGES_KEY: &str = "messages";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,study_agent=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();

    let embedding = create_provider(&config.embedding);
    let vector_store = Arc::new(
        QdrantVectorStore::new(
            &config.qdrant_url,
            COLLECTION_NAME,
            config.embedding.dimension,
        )
        .await?,
    );
    info!("Qdrant connected");

    let redis_pool = create_pool(&config.redis_url)?;
    let message_log = Arc::new(RedisMessageLog::new(redis_pool, MESSAGES_KEY));
    info!("Redis pool initialized");

    let dispatcher = Arc::new(
        ModelDispatcher::new(Duration::from_secs(config.llm_timeout_seconds))
            .register("gemini", Arc::new(GeminiBackend::from_config(&config.gemini)))
            .register("ollama", Arc::new(OllamaBackend::new(config.ollama.model.clone()))),
    );

    let context_service = Arc::new(ContextService::new(
        embedding.clone(),
        vector_store.clone(),
        config.rag.top_k,
    ));
    let chat_service = Arc::new(ChatService::new(context_service, dispatcher, message_log));
    let ingest_service = Arc::new(IngestService::new(
        embedding,
        vector_store,
        config.rag.chunk_size,
        config.rag.chunk_overlap,
    ));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState::new(chat_service, ingest_service, Arc::new(PlainTextReader), config);
    let app = create_router(state);

    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
