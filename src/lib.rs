pub mod cli;
pub mod client;
pub mod config;
pub mod farewell;
pub mod gui;
pub mod logging;
pub mod roster;
pub mod shutdown;
pub mod thread_manager;
pub mod tracker;
pub mod types;
