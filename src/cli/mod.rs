//! CLI command implementations

pub mod init;
pub mod list;
pub mod select;
