pub mod entity;
pub mod normalizer;
pub mod resolver;
