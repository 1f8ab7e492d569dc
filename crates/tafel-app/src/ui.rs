use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tafel_config::ui::UiConfig;
use tafel_i18n::Catalog;
use tafel_types::AppEvent;
use tokio_util::sync::CancellationToken;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    catalog: Arc<Catalog>,
    config: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tafel_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, catalog, config, cancel).await
}
