pub mod config;
pub mod daily;
pub mod dashboard;
pub mod export;
pub mod init;
mod input;
pub mod log;
pub mod roster;
