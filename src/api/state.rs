use std::sync::Arc;

use crate::application::{ChatService, IngestService};
use crate::domain::ports::DocumentReader;
use crate::infrastructure::Config;

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub ingest_service: Arc<IngestService>,
    pub reader: Arc<dyn DocumentReader>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        chat_service: Arc<ChatService>,
        ingest_service: Arc<IngestService>,
        reader: Arc<dyn DocumentReader>,
        config: Config,
    ) -> Self {
        Self {
            chat_service,
            ingest_service,
            reader,
            config: Arc::new(config),
        }
    }
}
