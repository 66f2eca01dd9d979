pub mod client_config;
pub mod cloud_auth;
