pub mod config;
pub mod format;
pub mod list_query;
pub mod route;
pub mod status;
