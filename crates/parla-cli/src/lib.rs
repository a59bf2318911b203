//! CLI library components for the ParlaMint converter.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
