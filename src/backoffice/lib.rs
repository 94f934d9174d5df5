//! # Backoffice Architecture
//!
//! Backoffice is the data layer of an admin dashboard: two catalogues
//! (products and users) with paginated free-text search, full CRUD, and a
//! favorites set of products. It is a library first; the `backoffice` binary
//! is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns store, favorites and config                         │
//! │  - Simulates backend latency per operation                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, returns CmdResult                   │
//! │  - Query engine in query.rs, favorites in favorites.rs      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Collection<R> / DataStore traits                         │
//! │  - InMemoryStore, seeded with the demo catalogue            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records
//!
//! Products and users share one lifecycle through the [`model::Record`]
//! trait, so listing, fetching, creating, updating and deleting are written
//! once and selected by type parameter:
//!
//! ```
//! use backoffice::api::BackofficeApi;
//! use backoffice::model::{ProductPatch, Product, User};
//! use backoffice::query::ListQuery;
//!
//! let mut api = BackofficeApi::seeded();
//! let users = api.list::<User>(&ListQuery::default().with_search("ayşe")).unwrap();
//! assert_eq!(users.data[0].id, 2);
//!
//! api.update::<Product>(ProductPatch::new(2).price(999.0)).unwrap();
//! assert_eq!(api.get::<Product>(2).unwrap().price, 999.0);
//! ```
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types.
//! It never writes to stdout/stderr and never exits the process. The only
//! side effects are the simulated latency sleep in the facade and the
//! config file read and written by [`config`].
//!
//! ## Testing
//!
//! 1. **Commands and query**: unit tests next to the code, the bulk of it.
//! 2. **API**: dispatch, latency-free, against `InMemoryStore`.
//! 3. **CLI**: `tests/cli.rs` runs the binary with `--instant`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`query`]: Search, pagination and the `Page` result
//! - [`favorites`]: The favorite product set
//! - [`store`]: Collection traits, in-memory store and seed data
//! - [`model`]: `Product`, `User` and the `Record` trait
//! - [`form`]: Flat form shapes and their mapping to records
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod form;
pub mod model;
pub mod query;
pub mod store;
