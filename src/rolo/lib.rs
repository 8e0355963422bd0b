//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact book library**. The interactive prompt is
//! just one client; everything it can do goes through the same API any other
//! frontend would use.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  REPL Layer (main.rs, args.rs)                              │
//! │  - Reads lines, formats output, handles terminal I/O        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the loaded book and the session lifecycle           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract BookStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! Soft failures (a name that matches nothing, a phone that is not on the
//! record) come back as warning messages or outcome values; hard failures
//! (bad input, unreadable snapshot) come back as `Err`.
//!
//! ## Testing Strategy
//!
//! 1. **Model and book** (`model.rs`, `book.rs`): validation, capacity and
//!    the reminder window live here, and so does most of the testing.
//! 2. **Commands** (`commands/*.rs`): unit tests of each operation against
//!    in-memory books.
//! 3. **REPL** (`main.rs`): integration tests drive the binary with scripted
//!    stdin and assert on what it prints.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`book`]: The address book and its queries
//! - [`model`]: Core data types (`Name`, `Phone`, `Birthday`, `Record`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
