pub mod clipboard;
pub mod speech;

pub use speech::{Pronounce, Speaker};
