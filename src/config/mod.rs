// src/config/mod.rs
pub mod consts;
pub mod providers;

pub use providers::{Config, Provider};
