#![forbid(unsafe_code)]

pub mod enrichment;
