//! # CLI Behavior
//!
//! This is **one possible UI client** for backoffice, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit
//! codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `backoffice` library.
//!
//! ## Naked Execution (`backoffice`)
//!
//! Running `backoffice` with no arguments shows the dashboard totals.
//!
//! ## Record Commands
//!
//! `products` and `users` take the same subcommands (`list`, `show`,
//! `create`, `update`, `delete`). Payloads are JSON in the camelCase shape of
//! the stored records; `create --sample` uses the autofill data instead.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (rows, details, messages)
//! - `setup`: Argument parsing via clap, version string

mod commands;
mod render;
pub mod setup;

pub use commands::run;
