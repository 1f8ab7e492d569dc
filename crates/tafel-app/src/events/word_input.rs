use kanal::AsyncSender;
use tafel_types::{AppEvent, InputSource};

use crate::events::send_spelling;
use crate::state::AppState;

pub async fn handle_word_input(
    state: &AppState,
    text: &str,
    source: InputSource,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!(chars = text.chars().count(), ?source, "word input");

    {
        let mut session = state.session.write().await;
        session.set_word(text);
    }

    send_spelling(state, app_to_ui_tx).await
}
