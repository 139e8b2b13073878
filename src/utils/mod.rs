pub mod colors;
pub mod logger;

pub use colors::*;
pub use logger::*;
