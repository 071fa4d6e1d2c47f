//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic state library** for two reading clients: *consume*
//! (a plain label list) and *flashcard* (tags and reading sources). It holds
//! observable in-memory collections and resolves page data from route
//! parameters. There is no persistence: a session starts from configuration
//! and ends with the process.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Builds one session from ShelfConfig                      │
//! │  - Normalizes inputs (string ids, partial edits)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (clients/, routes.rs)                         │
//! │  - LabelStore, TagStore, SourceStore                        │
//! │  - Route loaders with the BadRequest / NotFound taxonomy    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Generic observable copy-on-write Store<E>                │
//! │  - Seeder interface for initial contents                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions
//!
//! Nothing in this crate writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; installing a subscriber is the
//! client's job.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`clients`]: Per-client stores
//! - [`routes`]: Page loaders and their error taxonomy
//! - [`store`]: The generic observable store and seeding
//! - [`sample`]: Random sample data
//! - [`model`]: `Label`, `Tag`, `Source` and creation payloads
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod sample;
pub mod store;
