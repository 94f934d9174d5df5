//! # Backoffice CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Every invocation starts from the seeded demo catalogue. Changes made by
//! `create`, `update`, `delete` and the favorites commands are reported but
//! not persisted; only `config` writes to disk.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
