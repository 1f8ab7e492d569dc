use std::sync::Arc;

use clap::Parser;
use tafel_config::Config;
use tafel_config::share::DEFAULT_BASE_URL;
use tafel_core::SessionState;
use tafel_core::share::{self, ShareState};
use tafel_types::Language;
use tokio::signal;
use url::Url;

pub mod controller;
pub mod events;
pub mod locale;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

/// Spell words with the DIN 5009 Buchstabiertafel.
#[derive(Parser)]
#[command(name = "tafel", version)]
struct Args {
    /// Share link to open; its query string carries the word and language
    link: Option<String>,

    /// Word to spell at startup
    #[arg(long)]
    word: Option<String>,

    /// UI language (de, en, es, fr); sticks for the whole run
    #[arg(long)]
    lang: Option<String>,

    /// Disable audio pronunciation
    #[arg(long)]
    no_speech: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // UI output owns stdout, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tafel=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::new();
    if args.no_speech {
        config.speech.enabled = false;
    }

    // Both assets load concurrently; initialization waits for both.
    let (table, catalog) = tokio::join!(
        tafel_din5009::load(&config.assets),
        tafel_i18n::load(&config.assets),
    );
    tracing::info!(
        table_source = ?table.source,
        catalog_source = ?catalog.source,
        "assets ready"
    );

    let base = Url::parse(&config.share.base_url).unwrap_or_else(|e| {
        tracing::warn!(base = %config.share.base_url, error = %e, "invalid share base, using default");
        Url::parse(DEFAULT_BASE_URL).expect("invalid default share base")
    });

    let locales = locale::system_locales();
    tracing::debug!(?locales, detected = ?locale::detected_language(&locales), "system locales");

    let explicit = args.lang.as_deref().and_then(Language::parse);
    let shared = match &args.link {
        Some(link) => match Url::parse(link) {
            Ok(url) => share::read(&url),
            Err(e) => {
                tracing::warn!(link, error = %e, "ignoring unparseable share link");
                ShareState::default()
            }
        },
        None => ShareState::default(),
    };

    let mut session = SessionState::new(base);
    session.adopt(&shared, explicit, &locales);
    if let Some(word) = &args.word {
        session.set_word(word);
    }

    let state = Arc::new(AppState::new(config, session, table, Arc::new(catalog.catalog), locales));
    tracing::info!(
        session = %state.session_id,
        language = %state.session.read().await.language(),
        "session ready"
    );

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::debug!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task failed during shutdown: {e}"),
            Err(e) => tracing::error!("task panicked during shutdown: {e}"),
        }
    }

    Ok(())
}
