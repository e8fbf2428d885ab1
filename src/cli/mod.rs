//! Interactive menu shell over a [`DiGraph`](crate::graph::DiGraph).

pub mod commands;
pub mod config;
pub mod menu;
pub mod shell;

pub use commands::{execute, write_outcome, AdjacencyRow, Command, Outcome};
pub use config::{OutputFormat, ShellConfig};
pub use menu::MenuOption;
pub use shell::Shell;
