// boilgen CLI library

pub mod catalog;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod router;
pub mod workspace;

pub use error::{CliError, CliResult};
