pub mod language;
pub mod share;
pub mod spelling;
pub mod state;

pub use share::ShareState;
pub use spelling::{SpellingTable, convert};
pub use state::SessionState;
