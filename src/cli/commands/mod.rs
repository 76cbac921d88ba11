pub mod action;
pub mod backup;
pub mod chart;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod status;
