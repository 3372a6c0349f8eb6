pub mod analysis;
pub mod cli;
pub mod config;
pub mod content;
pub mod coordinator;
pub mod fetch;
pub mod logging;
pub mod mvi;
pub mod report;
pub mod ui;
