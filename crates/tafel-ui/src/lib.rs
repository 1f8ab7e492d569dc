use std::io::Write;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tafel_config::ui::UiConfig;
use tafel_i18n::Catalog;
use tafel_types::{AppEvent, InputSource, Language};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::input::UiCommand;
use crate::state::UiState;

pub mod input;
pub mod render;
pub mod state;

/// Terminal front-end: renders app events, forwards parsed stdin input.
/// Exits on `/quit`, stdin EOF, or cancellation.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    catalog: Arc<Catalog>,
    config: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    if !config.color {
        colored::control::set_override(false);
    }
    let interactive = atty::is(atty::Stream::Stdin);

    let mut state = UiState::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                render::goodbye(&state, &catalog);
                break;
            }
            event = app_to_ui_rx.recv() => {
                handle_app_event(event?, &mut state, &catalog, &config);
                prompt(interactive);
            }
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !handle_line(&line, &state, &catalog, &ui_to_app_tx).await? {
                            render::goodbye(&state, &catalog);
                            break;
                        }
                    }
                    None => {
                        // stdin closed; ask the app to wind down
                        tracing::debug!("stdin closed, requesting shutdown");
                        ui_to_app_tx.send(AppEvent::Shutdown).await?;
                        render::goodbye(&state, &catalog);
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

fn handle_app_event(event: AppEvent, state: &mut UiState, catalog: &Catalog, config: &UiConfig) {
    match event {
        AppEvent::LanguageApplied(language) => {
            state.language = language;
            render::header(state, catalog);
        }
        AppEvent::ShowSpelling { word, items, link } => {
            state.word = word;
            state.rows = items;
            state.link = link;
            render::table(state, catalog, config.row_numbers);
        }
        AppEvent::LinkCopied { link, ok } => {
            render::copy_feedback(state, catalog, &link, ok);
        }
        // everything else flows the other way
        _ => {}
    }
}

/// Returns `false` when the user asked to quit.
async fn handle_line(
    line: &str,
    state: &UiState,
    catalog: &Catalog,
    ui_to_app_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<bool> {
    match input::parse_line(line) {
        UiCommand::Word(text) => {
            ui_to_app_tx
                .send(AppEvent::WordInput {
                    text,
                    source: InputSource::Terminal,
                })
                .await?;
        }
        UiCommand::Lang(code) => {
            if Language::parse(&code).is_none() {
                // unsupported codes never leave the terminal
                render::language_menu(state, catalog);
            } else {
                ui_to_app_tx.send(AppEvent::SwitchLanguage(code)).await?;
            }
        }
        UiCommand::LangMenu => render::language_menu(state, catalog),
        UiCommand::Copy => ui_to_app_tx.send(AppEvent::CopyLink).await?,
        UiCommand::Say(row) => ui_to_app_tx.send(AppEvent::Pronounce { row }).await?,
        UiCommand::Open(link) => ui_to_app_tx.send(AppEvent::OpenLink(link)).await?,
        UiCommand::Help => render::help(state, catalog),
        UiCommand::Quit => {
            ui_to_app_tx.send(AppEvent::Shutdown).await?;
            return Ok(false);
        }
        UiCommand::Unknown(line) => render::unknown_command(state, catalog, &line),
    }
    Ok(true)
}

fn prompt(interactive: bool) {
    if interactive {
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}
