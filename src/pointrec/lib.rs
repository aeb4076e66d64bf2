//! # Pointrec Architecture
//!
//! Pointrec records geographic points, promotes some of them to named graph
//! nodes, connects nodes with distance-weighted paths and exports the result as
//! a CSV table plus two JSON documents. It is a library with a terminal client,
//! not a terminal program with some library code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads session lines, renders results, owns exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (sequence numbers → point ids)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Session logic, returns structured CmdResult values       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store/, nodes, distance, export, geolocation)        │
//! │  - PointStore / PathStore, node projection, haversine       │
//! │  - ExportSink: DirectorySink (production), MemorySink (tests)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr, calls
//! `std::process::exit` or assumes a terminal. Exports go through an
//! [`export::sink::ExportSink`] and device positions come from a
//! [`geolocation::Geolocator`], so the whole core runs against in-memory fakes
//! in tests.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Session logic for each command
//! - [`store`]: Point and path collections
//! - [`nodes`]: Labelled points projected as graph vertices
//! - [`distance`]: Great-circle distance in whole meters
//! - [`export`]: CSV / JSON serializers and export sinks
//! - [`geolocation`]: Device position boundary
//! - [`index`]: Sequence numbering and point selectors
//! - [`model`]: Core data types (`Point`, `Node`, `Path`, `Color`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Session loop, argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod distance;
pub mod error;
pub mod export;
pub mod geolocation;
pub mod index;
pub mod model;
pub mod nodes;
pub mod store;
