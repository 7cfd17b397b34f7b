//! Command-line front end for the `mazegraph` binary.

pub mod commands;
pub mod input;
