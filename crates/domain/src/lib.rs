#![forbid(unsafe_code)]

pub mod alert;
pub mod auth;
pub mod common;
pub mod hunting;
pub mod observable;
pub mod sighting;
