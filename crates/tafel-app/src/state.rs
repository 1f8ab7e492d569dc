use std::sync::Arc;

use tafel_config::Config;
use tafel_core::SessionState;
use tafel_din5009::TableLoad;
use tafel_i18n::Catalog;
use tafel_io::Speaker;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct AppState {
    pub session_id: Uuid,
    pub config: Arc<Config>,
    /// The only mutable piece; written exclusively from the event loop.
    pub session: RwLock<SessionState>,
    pub table: TableLoad,
    pub catalog: Arc<Catalog>,
    pub speaker: Speaker,
    /// Ordered system locale preferences, captured once at startup.
    pub locales: Vec<String>,
}

impl AppState {
    pub fn new(
        config: Config,
        session: SessionState,
        table: TableLoad,
        catalog: Arc<Catalog>,
        locales: Vec<String>,
    ) -> Self {
        let speaker = Speaker::new(&config.speech);

        Self {
            session_id: Uuid::new_v4(),
            config: Arc::new(config),
            session: RwLock::new(session),
            table,
            catalog,
            speaker,
            locales,
        }
    }
}
