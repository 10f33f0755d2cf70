pub mod get_content;
pub mod models;
