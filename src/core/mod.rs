pub mod action;
pub mod active_day;
pub mod backup;
pub mod chart;
pub mod clock;
pub mod config;
pub mod del;
pub mod history;
pub mod log;
pub mod status;
pub mod ticker;
