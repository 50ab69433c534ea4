pub mod auth_model;
pub mod content_model;
pub mod page_model;
