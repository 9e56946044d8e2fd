//! CLI subcommand implementations.

pub mod prices;
