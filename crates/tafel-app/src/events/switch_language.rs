use kanal::AsyncSender;
use tafel_types::{AppEvent, Language};

use crate::events::send_spelling;
use crate::state::AppState;

pub async fn handle_language_switch(
    state: &AppState,
    tag: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(language) = Language::parse(tag) else {
        tracing::debug!(tag, "ignoring unsupported language");
        return Ok(());
    };

    {
        let mut session = state.session.write().await;
        session.set_language(language);
    }

    tracing::info!(%language, "language switched");
    app_to_ui_tx.send(AppEvent::LanguageApplied(language)).await?;
    send_spelling(state, app_to_ui_tx).await
}
