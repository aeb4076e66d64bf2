//! # CLI Behavior
//!
//! This is **one possible UI client** for pointrec, not the application itself.
//! See the crate-level documentation in [`pointrec`] for the layering.
//!
//! ## Session Model
//!
//! `pointrec` starts a recording session and reads commands one per line
//! until `quit`, `exit` or end of input. The same binary serves both uses:
//!
//! - Interactive: a prompt is shown and listings are styled.
//! - Scripted: `pointrec --out exports < script.txt`, no prompt, plain text
//!   when stdout is not a terminal.
//!
//! Points are addressed by the number shown in `list` (ranges like `2-4` and
//! stable ids like `#7` also work); paths by their position in `path list`.
//!
//! ## Module Structure
//!
//! - `commands`: Session loop, context setup and per-command dispatch
//! - `render`: Output formatting through templates
//! - `setup`: Argument and session-line parsing via clap, help text
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
