//! CLI subcommand implementations.

pub mod browse;
pub mod gallery;
pub mod search;
