pub mod config;
pub mod linkify;
pub mod message;
