mod app;
pub mod resize;
mod toolbar;
pub mod views;

pub use app::TimeBlockApp;
