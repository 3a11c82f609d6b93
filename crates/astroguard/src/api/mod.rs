pub mod config;
pub mod tracker;
pub mod types;
