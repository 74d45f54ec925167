pub mod blob;
pub mod config;
pub mod dirs;
pub mod layout;
pub mod writer;
