//! The DIN 5009:2022 spelling table ("Deutsche Buchstabiertafel für
//! Wirtschaft und Verwaltung"): city names for A-Z plus the umlauts and
//! Eszett.

pub mod fallback;
pub mod loader;

pub use fallback::builtin_table;
pub use loader::{Din5009Loader, TableError, TableLoad, TableSource, load};
