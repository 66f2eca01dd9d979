pub mod apps;
pub mod auth;
pub mod client;
pub mod entrance;
pub mod error;
pub mod webdav;
