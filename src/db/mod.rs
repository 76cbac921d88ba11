pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod store;

pub use store::{DayStore, MemoryDayStore, SqliteDayStore};
