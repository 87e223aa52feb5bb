//! Command-line interface module.

mod args;
pub mod check;
pub mod export;
pub mod init;
mod output;
pub mod search;
pub mod tree;

pub use args::{Cli, Commands, ExportArgs, SearchArgs, SlugArgs};
