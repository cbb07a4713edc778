//! CLI commands

pub mod alias;
pub mod build;
pub mod check;
pub mod clean;
pub mod list;
