pub mod constants;
pub mod datasource;
pub mod error;
pub mod image;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod text;
pub mod viewmodel;
