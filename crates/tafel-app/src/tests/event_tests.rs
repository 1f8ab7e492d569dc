use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tafel_config::Config;
use tafel_core::SessionState;
use tafel_din5009::{TableLoad, TableSource, builtin_table};
use tafel_i18n::Catalog;
use tafel_types::{AppEvent, InputSource, Language};
use url::Url;

use crate::events::open_link::handle_open_link;
use crate::events::switch_language::handle_language_switch;
use crate::events::word_input::handle_word_input;
use crate::state::AppState;

fn test_state() -> Arc<AppState> {
    let mut config = Config::default();
    config.speech.enabled = false;

    let session = SessionState::new(Url::parse("https://tafel.app/").expect("base url"));
    let table = TableLoad {
        table: builtin_table(),
        source: TableSource::Builtin,
    };

    Arc::new(AppState::new(
        config,
        session,
        table,
        Arc::new(Catalog::empty()),
        vec![],
    ))
}

fn channel() -> (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>) {
    kanal::bounded_async(8)
}

#[tokio::test]
async fn word_input_produces_spelling_and_share_link() {
    let state = test_state();
    let (tx, rx) = channel();

    handle_word_input(&state, "ab7", InputSource::Terminal, &tx)
        .await
        .expect("handler failed");

    match rx.recv().await.expect("recv failed") {
        AppEvent::ShowSpelling { word, items, link } => {
            assert_eq!(word, "ab7");
            assert_eq!(items.len(), 3);
            assert_eq!(items[0].code_word, "Aachen");
            assert_eq!(items[1].code_word, "Berlin");
            assert_eq!(items[2].code_word, "-");
            assert_eq!(link.as_deref(), Some("https://tafel.app/?word=ab7"));
        }
        other => panic!("expected ShowSpelling, got {other:?}"),
    }
}

#[tokio::test]
async fn clearing_the_word_clears_the_link() {
    let state = test_state();
    let (tx, rx) = channel();

    handle_word_input(&state, "Essen", InputSource::Terminal, &tx)
        .await
        .expect("handler failed");
    rx.recv().await.expect("recv failed");

    handle_word_input(&state, "  ", InputSource::Terminal, &tx)
        .await
        .expect("handler failed");

    match rx.recv().await.expect("recv failed") {
        AppEvent::ShowSpelling { items, link, .. } => {
            assert!(items.is_empty());
            assert_eq!(link, None);
        }
        other => panic!("expected ShowSpelling, got {other:?}"),
    }

    assert_eq!(state.session.read().await.link().query(), None);
}

#[tokio::test]
async fn language_switch_notifies_and_tags_the_link() {
    let state = test_state();
    let (tx, rx) = channel();

    handle_word_input(&state, "TEST", InputSource::Terminal, &tx)
        .await
        .expect("handler failed");
    rx.recv().await.expect("recv failed");

    handle_language_switch(&state, "en", &tx)
        .await
        .expect("handler failed");

    assert!(matches!(
        rx.recv().await.expect("recv failed"),
        AppEvent::LanguageApplied(Language::En)
    ));
    match rx.recv().await.expect("recv failed") {
        AppEvent::ShowSpelling { link, .. } => {
            assert_eq!(link.as_deref(), Some("https://tafel.app/?word=TEST&lang=en"));
        }
        other => panic!("expected ShowSpelling, got {other:?}"),
    }
}

#[tokio::test]
async fn switching_back_to_default_drops_the_lang_parameter() {
    let state = test_state();
    let (tx, rx) = channel();

    handle_language_switch(&state, "fr", &tx)
        .await
        .expect("handler failed");
    rx.recv().await.expect("recv failed");
    rx.recv().await.expect("recv failed");

    handle_language_switch(&state, "de", &tx)
        .await
        .expect("handler failed");
    rx.recv().await.expect("recv failed");
    rx.recv().await.expect("recv failed");

    assert_eq!(state.session.read().await.link().query(), None);
}

#[tokio::test]
async fn unsupported_language_is_silently_ignored() {
    let state = test_state();
    let (tx, rx) = channel();

    handle_language_switch(&state, "tlh", &tx)
        .await
        .expect("handler failed");

    assert_eq!(rx.len(), 0);
    assert_eq!(state.session.read().await.language(), Language::DEFAULT);
}

#[tokio::test]
async fn opening_a_share_link_adopts_word_and_language() {
    let state = test_state();
    let (tx, rx) = channel();

    handle_open_link(&state, "https://tafel.app/?word=Unna&lang=es", &tx)
        .await
        .expect("handler failed");

    assert!(matches!(
        rx.recv().await.expect("recv failed"),
        AppEvent::LanguageApplied(Language::Es)
    ));
    match rx.recv().await.expect("recv failed") {
        AppEvent::ShowSpelling { word, items, .. } => {
            assert_eq!(word, "Unna");
            assert_eq!(items[0].code_word, "Unna");
        }
        other => panic!("expected ShowSpelling, got {other:?}"),
    }
}

#[tokio::test]
async fn garbage_links_change_nothing() {
    let state = test_state();
    let (tx, rx) = channel();

    handle_open_link(&state, "not a url at all", &tx)
        .await
        .expect("handler failed");

    assert_eq!(rx.len(), 0);
    assert_eq!(state.session.read().await.word(), "");
}
