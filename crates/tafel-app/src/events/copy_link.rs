use kanal::AsyncSender;
use tafel_types::AppEvent;

use crate::state::AppState;

pub async fn handle_copy_link(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let link = state.session.read().await.link().to_string();
    let ok = tafel_io::clipboard::copy_text(&link);

    app_to_ui_tx.send(AppEvent::LinkCopied { link, ok }).await?;
    Ok(())
}
