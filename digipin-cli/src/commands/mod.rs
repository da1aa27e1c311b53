//! CLI command implementations.

pub mod batch;
pub mod common;
pub mod config;
pub mod decode;
pub mod encode;
pub mod grid;
