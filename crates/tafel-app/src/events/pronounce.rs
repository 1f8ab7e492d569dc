use tafel_core::convert;
use tafel_io::Pronounce;

use crate::state::AppState;

/// Speak one row's code word, or the whole spelling. Best-effort: a bad
/// row index or an empty spelling is just logged.
pub async fn handle_pronounce(state: &AppState, row: Option<usize>) {
    let items = {
        let session = state.session.read().await;
        convert(session.word(), &state.table.table)
    };

    let text = match row {
        Some(index) => match items.get(index) {
            Some(item) => item.code_word.clone(),
            None => {
                tracing::debug!(index, rows = items.len(), "no such row to pronounce");
                return;
            }
        },
        None => items
            .iter()
            .map(|item| item.code_word.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    };

    state.speaker.pronounce(&text).await;
}
