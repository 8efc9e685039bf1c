pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod roster;
pub mod url_model;
