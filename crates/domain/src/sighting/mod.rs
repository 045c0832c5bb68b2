pub mod assembler;
pub mod entity;
