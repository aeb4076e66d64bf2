use crate::config::RecorderConfig;
use crate::model::{Color, Coordinates, Node, Path, Point};
use crate::nodes::NodeProjection;
use crate::store::{LabelSequence, PathStore, PointStore};
use std::path::PathBuf;

pub mod add;
pub mod color;
pub mod config;
pub mod delete;
pub mod export;
pub mod list;
pub mod locate;
pub mod nodes;
pub mod paths;
pub mod update;

/// Map center used until a location lookup succeeds.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 40.7128,
    lon: -74.0060,
};

/// Everything one recording session holds. Nothing here outlives the process.
#[derive(Debug)]
pub struct Session {
    pub points: PointStore,
    pub paths: PathStore,
    pub projection: NodeProjection,
    pub color: Color,
    pub center: Coordinates,
}

impl Session {
    pub fn new(color: Color, labels: LabelSequence) -> Self {
        Self {
            points: PointStore::new().with_labels(labels),
            paths: PathStore::new(),
            projection: NodeProjection::new(),
            color,
            center: DEFAULT_CENTER,
        }
    }

    pub fn from_config(config: &RecorderConfig) -> Self {
        Self::new(config.default_color, config.label_sequence())
    }

    /// Current nodes, reprojected if points changed.
    pub fn nodes(&mut self) -> &[Node] {
        self.projection.nodes(&self.points)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Color::default(), LabelSequence::default())
    }
}

/// Node labels are stored uppercased; user input is matched the same way.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A stored path with its 1-based list position.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPath {
    pub index: usize,
    pub path: Path,
    /// An endpoint no longer names a current node.
    pub dangling: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_points: Vec<Point>,
    pub listed_points: Vec<Point>,
    pub listed_nodes: Vec<Node>,
    pub listed_paths: Vec<DisplayPath>,
    pub exported_files: Vec<PathBuf>,
    pub config: Option<RecorderConfig>,
    pub center: Option<Coordinates>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_points(mut self, points: Vec<Point>) -> Self {
        self.affected_points = points;
        self
    }

    pub fn with_listed_points(mut self, points: Vec<Point>) -> Self {
        self.listed_points = points;
        self
    }

    pub fn with_listed_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.listed_nodes = nodes;
        self
    }

    pub fn with_listed_paths(mut self, paths: Vec<DisplayPath>) -> Self {
        self.listed_paths = paths;
        self
    }

    pub fn with_config(mut self, config: RecorderConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_center(mut self, center: Coordinates) -> Self {
        self.center = Some(center);
        self
    }

    /// True when any message is a warning or error.
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}

/// Formats coordinates the way listings show them.
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    format!("{:.6}, {:.6}", lat, lon)
}
