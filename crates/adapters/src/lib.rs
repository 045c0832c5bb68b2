#![forbid(unsafe_code)]

pub mod auth;
pub mod edr;
pub mod http;
