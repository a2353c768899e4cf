//! CLI command modules

pub mod info;
pub mod init;
pub mod render;
pub mod schema;
pub mod validate;
