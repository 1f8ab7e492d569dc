use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tafel_core::convert;
use tafel_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod copy_link;
pub mod open_link;
pub mod pronounce;
pub mod switch_language;
pub mod word_input;

use copy_link::handle_copy_link;
use open_link::handle_open_link;
use pronounce::handle_pronounce;
use switch_language::handle_language_switch;
use word_input::handle_word_input;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    // First render: confirm the resolved language, show whatever the
    // session came up with (a shared word, or the empty state).
    {
        let language = state.session.read().await.language();
        app_to_ui_tx.send(AppEvent::LanguageApplied(language)).await?;
    }
    send_spelling(&state, &app_to_ui_tx).await?;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => {
                let event = event?;
                tracing::debug!(event = ?std::mem::discriminant(&event), "event received");
                if !handle_events(&state, &app_to_ui_tx, event, &cancel).await? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Returns `false` once the loop should stop.
async fn handle_events(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
    cancel: &CancellationToken,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::WordInput { text, source } => {
            handle_word_input(state, &text, source, app_to_ui_tx).await?;
        }
        AppEvent::SwitchLanguage(tag) => {
            handle_language_switch(state, &tag, app_to_ui_tx).await?;
        }
        AppEvent::OpenLink(link) => {
            handle_open_link(state, &link, app_to_ui_tx).await?;
        }
        AppEvent::CopyLink => {
            handle_copy_link(state, app_to_ui_tx).await?;
        }
        AppEvent::Pronounce { row } => {
            handle_pronounce(state, row).await;
        }
        AppEvent::Shutdown => {
            cancel.cancel();
            return Ok(false);
        }
        // UI-bound events, nothing to do here
        AppEvent::ShowSpelling { .. }
        | AppEvent::LanguageApplied(_)
        | AppEvent::LinkCopied { .. } => {}
    }

    Ok(true)
}

/// Convert the session's current word and push the result to the UI.
pub async fn send_spelling(state: &AppState, tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let (word, items, link) = {
        let session = state.session.read().await;
        let items = convert(session.word(), &state.table.table);
        let link = (!items.is_empty()).then(|| session.link().to_string());
        (session.word().to_string(), items, link)
    };

    tx.send(AppEvent::ShowSpelling { word, items, link }).await?;
    Ok(())
}
