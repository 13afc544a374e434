// Library exports for integration tests and the desktop binary.

pub mod config;
pub mod omdb;
pub mod search;
pub mod ui;
