//! Output templates, kept as stand-alone minijinja files and embedded here.
//!
//! Layout (column widths, number formatting) is computed in Rust before
//! rendering; templates only arrange cells and pick semantic styles. Each
//! template emits one newline-terminated line per row.

pub const POINTS_TEMPLATE: &str = include_str!("templates/points.jinja");
pub const NODES_TEMPLATE: &str = include_str!("templates/nodes.jinja");
pub const PATHS_TEMPLATE: &str = include_str!("templates/paths.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");

/// `(name, source)` pairs registered with the renderer.
pub const ALL: [(&str, &str); 5] = [
    ("points", POINTS_TEMPLATE),
    ("nodes", NODES_TEMPLATE),
    ("paths", PATHS_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("config", CONFIG_TEMPLATE),
];
