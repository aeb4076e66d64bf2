//! # Storage Layer
//!
//! Session state lives in two in-memory stores:
//!
//! - [`points::PointStore`]: the ordered point collection. Owns id allocation,
//!   dense sequence numbering, the node-label suggestion counter and a revision
//!   counter that lets derived views know when to recompute.
//! - [`paths::PathStore`]: the edge list between node labels, with duplicate and
//!   self-loop rejection and bulk chain generation.
//!
//! Both are plain owned structs mutated through `&mut self`. A session owns one
//! of each; nothing is shared and nothing outlives the process. A host that
//! serves several handlers concurrently must put the pair behind a single lock,
//! since neither sequence contiguity nor edge de-duplication survives
//! interleaved writers.

pub mod paths;
pub mod points;

pub use paths::{EdgeRejection, PathStore};
pub use points::{LabelSequence, PointStore};
