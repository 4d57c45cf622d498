pub mod api;
pub mod clearpass_client;
pub mod config;
pub mod http_client;
pub mod services;
