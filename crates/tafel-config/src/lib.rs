use serde::{Deserialize, Serialize};

use self::assets::AssetsConfig;
use self::share::ShareConfig;
use self::speech::SpeechConfig;
use self::ui::UiConfig;

pub mod assets;
pub mod share;
pub mod speech;
pub mod ui;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub assets: AssetsConfig,
    pub share: ShareConfig,
    pub speech: SpeechConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            assets: AssetsConfig::new(),
            share: ShareConfig::new(),
            speech: SpeechConfig::new(),
            ui: UiConfig::new(),
        }
    }
}
