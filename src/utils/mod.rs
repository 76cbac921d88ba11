pub mod colors;
pub mod date;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod runtime;
pub mod table;
pub mod time;

pub use time::split;
