use std::env;

use serde::{Deserialize, Serialize};

fn default_color() -> bool {
    true
}

fn default_row_numbers() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    /// Row indices in the table, used by `/say <row>`.
    #[serde(default = "default_row_numbers")]
    pub row_numbers: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        // NO_COLOR is the conventional opt-out, any value counts.
        let color = env::var("NO_COLOR").is_err() && default_color();

        Self {
            color,
            row_numbers: default_row_numbers(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            row_numbers: default_row_numbers(),
        }
    }
}
