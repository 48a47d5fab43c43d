// src/core/mod.rs

pub mod dom;
pub mod link;
pub mod sanitize;

pub use sanitize::clean_text;
