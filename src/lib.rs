// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod model;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod session;
pub mod store;
pub mod summary;
