//! # CLI Behavior
//!
//! This is **one possible UI client** for the shelf stores. It is the only
//! place that knows about terminal I/O, exit codes and output formatting.
//!
//! ### Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments lists sources, and a group without an
//! action (`shelf tags`) lists that group.
//!
//! ### Pages
//!
//! `shelf sources show <id>` goes through the same loader a `/source/[id]`
//! page would: an empty id is a bad request ("Missing id"), an unknown one is
//! not found ("Source not found"). Both end the process with exit code 1.
//!
//! ### Missing Records
//!
//! `edit` and `remove` on an id that is well formed but unknown print a
//! warning and succeed; the stores treat it as a no-op.
//!
//! ## Module Structure
//!
//! - `commands`: session setup and dispatch
//! - `logging`: tracing subscriber on stderr
//! - `render`: output formatting (columns, colors, JSON)
//! - `setup`: argument parsing via clap

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
