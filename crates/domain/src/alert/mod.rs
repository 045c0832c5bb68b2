pub mod entity;
pub mod quota;
