pub mod cli;
pub mod config;
pub mod csv;
pub mod error;
pub mod models;
pub mod version;
