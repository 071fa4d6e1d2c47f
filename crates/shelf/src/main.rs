//! # Shelf CLI
//!
//! A terminal client for the shelf stores. The binary is thin: the CLI lives
//! in `src/cli/`, and this file only invokes `cli::run()` and handles process
//! termination.
//!
//! ## Workspace Structure
//!
//! - `crates/shelfapp/`: UI-agnostic library (stores, sampling, route loader)
//! - `crates/shelf/`: this CLI, a client of the `shelfapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/shelf/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - session setup + dispatch (commands.rs)                   │
//! │  - terminal and JSON rendering (render.rs)                  │
//! │  - tracing subscriber (logging.rs)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/shelfapp/src/api.rs)                     │
//! │  - Normalizes string ids → UUIDs                            │
//! │  - Turns partial edits into full-record replacements        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client stores + route loader (clients/, routes.rs)         │
//! │  Observable store (store/)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stores live in memory only, so every invocation starts a fresh session
//! seeded from configuration. With `--seed` the session is reproducible,
//! which is what makes ids printed by one run usable in the next.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each module plus scenario tests in
//!   `crates/shelfapp/tests/`.
//! - **CLI**: argument parsing and rendering are unit tested in place;
//!   `tests/cli.rs` drives the built binary with `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
