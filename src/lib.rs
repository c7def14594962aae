pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod pipeline;
pub mod shortcut;
