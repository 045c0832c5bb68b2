#![forbid(unsafe_code)]

pub mod secondary;
