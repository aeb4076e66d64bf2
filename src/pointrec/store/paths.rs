use crate::distance::{distance_meters, round_meters};
use crate::error::{RecorderError, Result};
use crate::model::{Node, Path};
use crate::nodes::find;
use thiserror::Error;
use tracing::{debug, warn};

/// Why an edge was not recorded. The store is left unchanged in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EdgeRejection {
    #[error("both endpoints are required")]
    MissingEndpoint,

    #[error("a path cannot connect {0} to itself")]
    SelfLoop(String),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("a path between {from} and {to} already exists")]
    Duplicate { from: String, to: String },
}

/// Edge list between node labels, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PathStore {
    paths: Vec<Path>,
}

impl PathStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an edge between two current nodes.
    ///
    /// A missing, non-finite or non-positive `distance` is replaced by the
    /// great-circle distance between the endpoints; a positive one is rounded to
    /// whole meters. Endpoint lookups use the first node carrying each label.
    pub fn add(
        &mut self,
        from: &str,
        to: &str,
        distance: Option<f64>,
        nodes: &[Node],
    ) -> std::result::Result<&Path, EdgeRejection> {
        let outcome = self.check(from, to, nodes);
        let (from_node, to_node) = match outcome {
            Ok(pair) => pair,
            Err(rejection) => {
                warn!(from, to, %rejection, "path rejected");
                return Err(rejection);
            }
        };

        let distance = match distance {
            Some(d) if d.is_finite() && d > 0.0 => round_meters(d),
            _ => distance_meters(from_node.coordinates(), to_node.coordinates()),
        };

        self.paths.push(Path {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        });
        debug!(from, to, distance, "path added");
        Ok(&self.paths[self.paths.len() - 1])
    }

    fn check<'n>(
        &self,
        from: &str,
        to: &str,
        nodes: &'n [Node],
    ) -> std::result::Result<(&'n Node, &'n Node), EdgeRejection> {
        if from.is_empty() || to.is_empty() {
            return Err(EdgeRejection::MissingEndpoint);
        }
        if from == to {
            return Err(EdgeRejection::SelfLoop(from.to_string()));
        }
        let from_node =
            find(nodes, from).ok_or_else(|| EdgeRejection::UnknownNode(from.to_string()))?;
        let to_node = find(nodes, to).ok_or_else(|| EdgeRejection::UnknownNode(to.to_string()))?;
        if self.paths.iter().any(|p| p.same_pair(from, to)) {
            return Err(EdgeRejection::Duplicate {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok((from_node, to_node))
    }

    /// Removes the edge at `index` (0-based).
    pub fn remove(&mut self, index: usize) -> Result<Path> {
        if index >= self.paths.len() {
            return Err(RecorderError::PathIndexOutOfRange {
                index,
                len: self.paths.len(),
            });
        }
        let removed = self.paths.remove(index);
        debug!(index, from = %removed.from, to = %removed.to, "path removed");
        Ok(removed)
    }

    /// Replaces every edge with a chain through `nodes` in the given order.
    pub fn auto_generate(&mut self, nodes: &[Node]) -> &[Path] {
        self.paths = nodes
            .windows(2)
            .map(|pair| Path {
                from: pair[0].id.clone(),
                to: pair[1].id.clone(),
                distance: distance_meters(pair[0].coordinates(), pair[1].coordinates()),
            })
            .collect();
        debug!(count = self.paths.len(), "paths auto-generated");
        &self.paths
    }

    /// Edges with `node_id` at either end, in store order.
    pub fn connected(&self, node_id: &str) -> Vec<&Path> {
        self.paths.iter().filter(|p| p.touches(node_id)).collect()
    }

    /// Edges whose endpoints both resolve to a current node.
    pub fn renderable<'a>(&'a self, nodes: &[Node]) -> Vec<&'a Path> {
        self.paths
            .iter()
            .filter(|p| is_renderable(p, nodes))
            .collect()
    }

    /// Edges left pointing at a label that no longer exists.
    pub fn dangling<'a>(&'a self, nodes: &[Node]) -> Vec<&'a Path> {
        self.paths
            .iter()
            .filter(|p| !is_renderable(p, nodes))
            .collect()
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

pub fn is_renderable(path: &Path, nodes: &[Node]) -> bool {
    find(nodes, &path.from).is_some() && find(nodes, &path.to).is_some()
}
