pub mod error;
pub mod finding;
pub mod models;
pub mod ports;
