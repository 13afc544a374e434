pub mod app;
pub mod components;
pub mod search_context;

pub use app::{make_config, App};
