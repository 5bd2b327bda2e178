//! Subcommand handlers

pub mod check;
pub mod demo;
pub mod list;
pub mod run;
