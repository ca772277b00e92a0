pub mod body;
pub mod config;
pub mod diagnostics;
pub mod init_config;
pub mod simulation;
pub mod utils;
