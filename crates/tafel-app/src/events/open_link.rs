use kanal::AsyncSender;
use tafel_core::share;
use tafel_types::AppEvent;
use url::Url;

use crate::events::send_spelling;
use crate::state::AppState;

/// Adopt the word and language a share link carries, then re-render.
/// An explicit language selection made earlier in the run sticks.
pub async fn handle_open_link(
    state: &AppState,
    link: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let url = match Url::parse(link.trim()) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(link, error = %e, "ignoring unparseable share link");
            return Ok(());
        }
    };

    let shared = share::read(&url);
    let language = {
        let mut session = state.session.write().await;
        session.adopt(&shared, None, &state.locales);
        session.language()
    };

    app_to_ui_tx.send(AppEvent::LanguageApplied(language)).await?;
    send_spelling(state, app_to_ui_tx).await
}
