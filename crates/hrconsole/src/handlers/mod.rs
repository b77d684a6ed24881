pub mod actions;
pub mod error;
pub mod health;
pub mod pages;
pub mod render;
pub mod static_files;
pub mod tables;

pub use error::AppError;
pub use render::is_htmx_request;
