//! Node projection: labelled points viewed as graph vertices.
//!
//! Nodes have no lifecycle of their own. They are recomputed from the point
//! snapshot, so a node vanishes as soon as its point is deleted or loses its
//! label and comes back if the label is reassigned.

use crate::model::{Node, Point};
use crate::store::PointStore;

/// Projects every labelled point, in point order.
pub fn project(points: &[Point]) -> Vec<Node> {
    points
        .iter()
        .filter_map(|p| {
            p.label().map(|label| Node {
                id: label.to_string(),
                lat: p.latitude,
                lon: p.longitude,
                colour: p.color,
            })
        })
        .collect()
}

/// First node carrying `id`. Duplicate labels resolve to the earliest point.
pub fn find<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    nodes.iter().find(|n| n.id == id)
}

/// Memoized [`project`] keyed on the point store revision.
#[derive(Debug, Default)]
pub struct NodeProjection {
    revision: Option<u64>,
    nodes: Vec<Node>,
}

impl NodeProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nodes, recomputed only if the store changed since the last call.
    pub fn nodes(&mut self, store: &PointStore) -> &[Node] {
        if self.revision != Some(store.revision()) {
            self.nodes = project(store.snapshot());
            self.revision = Some(store.revision());
        }
        &self.nodes
    }

    pub fn is_stale(&self, store: &PointStore) -> bool {
        self.revision != Some(store.revision())
    }
}
