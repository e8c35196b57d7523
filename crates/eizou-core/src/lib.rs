pub mod artwork;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod placeholder;
pub mod scanner;
