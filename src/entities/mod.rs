pub mod content;
pub mod like;
pub mod user;
