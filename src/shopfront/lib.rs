//! # Shopfront Architecture
//!
//! Shopfront is a **UI-agnostic storefront core**: a product catalog, a
//! persistent shopping cart and the totals derived from it. The bundled CLI
//! is one client of the library, not the library's reason to exist.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders listings and the cart          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CartStore: owns cart, catalog and storage adapter        │
//! │  - Persists after every mutation                            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over Cart and Catalog                │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (storage/)                                   │
//! │  - CartStorage trait (load / save)                          │
//! │  - FileStorage (production), MemStorage (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cart Invariants
//!
//! - At most one line per product; repeated adds grow the quantity.
//! - Every stored quantity is at least 1. A line that would reach zero is
//!   removed.
//! - Lines keep the name, price and image the product had when it was first
//!   added.
//! - Money is integer minor units end to end; only [`money`] turns it into
//!   text.
//!
//! ## Module Overview
//!
//! - [`api`]: `CartStore`, the entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`storage`]: Cart persistence abstraction and implementations
//! - [`catalog`]: Product lookup and catalog loading
//! - [`model`]: Core data types (`Product`, `CartLine`, `Cart`, `Totals`)
//! - [`money`]: Currency formatting
//! - [`payment`]: Payment gateway hand-off for checkout
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod money;
pub mod payment;
pub mod storage;
