pub mod auth_service;
pub mod identity_service;
pub mod page_service;
