pub mod app;
pub mod events;
pub mod search;
pub mod ui;

pub use app::{App, AppMode};
