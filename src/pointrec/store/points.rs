use crate::error::{RecorderError, Result};
use crate::index::{renumber, PointSelector};
use crate::model::{Color, Point, PointUpdate};
use tracing::debug;

pub const DEFAULT_LABEL_PREFIX: &str = "A";
pub const DEFAULT_LABEL_START: u32 = 75;

/// Produces node-label suggestions of the form `<prefix><n>`.
///
/// The counter only moves forward: assigning `A80` while the next suggestion is
/// `A76` moves it to `A81`; assigning `A70` leaves it alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSequence {
    prefix: String,
    next: u32,
}

impl LabelSequence {
    pub fn new(prefix: impl Into<String>, start: u32) -> Self {
        Self {
            prefix: prefix.into().trim().to_uppercase(),
            next: start,
        }
    }

    pub fn suggest(&self) -> String {
        format!("{}{}", self.prefix, self.next)
    }

    pub fn observe(&mut self, label: &str) {
        if let Some(n) = label
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.parse::<u32>().ok())
        {
            if n >= self.next {
                self.next = n.saturating_add(1);
            }
        }
    }
}

impl Default for LabelSequence {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_PREFIX, DEFAULT_LABEL_START)
    }
}

/// Ordered collection of the session's recorded points.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<Point>,
    last_id: u64,
    revision: u64,
    labels: LabelSequence,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(mut self, labels: LabelSequence) -> Self {
        self.labels = labels;
        self
    }

    /// Records a point at the end of the collection.
    pub fn add(&mut self, latitude: f64, longitude: f64, color: Color) -> &Point {
        self.last_id += 1;
        let point = Point {
            id: self.last_id,
            sequence_number: self.points.len() + 1,
            latitude,
            longitude,
            color,
            node_label: None,
        };
        debug!(id = point.id, seq = point.sequence_number, %color, "point added");
        self.points.push(point);
        self.bump();
        &self.points[self.points.len() - 1]
    }

    /// Removes the point with `id` and renumbers the survivors.
    pub fn delete(&mut self, id: u64) -> Result<Point> {
        let pos = self.position(id)?;
        let removed = self.points.remove(pos);
        renumber(&mut self.points);
        self.bump();
        debug!(id, remaining = self.points.len(), "point deleted");
        Ok(removed)
    }

    /// Overwrites coordinates, colour and label. Id and sequence number are kept.
    pub fn update(&mut self, id: u64, update: PointUpdate) -> Result<&Point> {
        let pos = self.position(id)?;
        if let Some(label) = update.node_label.as_deref() {
            self.labels.observe(label);
        }
        let point = &mut self.points[pos];
        point.latitude = update.latitude;
        point.longitude = update.longitude;
        point.color = update.color;
        point.node_label = update.node_label;
        debug!(id, label = ?point.node_label, "point updated");
        self.bump();
        Ok(&self.points[pos])
    }

    pub fn snapshot(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, id: u64) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn by_sequence(&self, sequence_number: usize) -> Option<&Point> {
        self.points
            .iter()
            .find(|p| p.sequence_number == sequence_number)
    }

    /// Resolves a user selector to a point id.
    pub fn resolve(&self, selector: PointSelector) -> Result<u64> {
        match selector {
            PointSelector::Sequence(n) => self
                .by_sequence(n)
                .map(|p| p.id)
                .ok_or(RecorderError::SequenceNotFound(n)),
            PointSelector::Id(id) => self
                .get(id)
                .map(|p| p.id)
                .ok_or(RecorderError::PointNotFound(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Incremented by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn suggest_label(&self) -> String {
        self.labels.suggest()
    }

    /// Other points already carrying `label`.
    pub fn label_holders(&self, label: &str, except: u64) -> Vec<&Point> {
        self.points
            .iter()
            .filter(|p| p.id != except && p.label() == Some(label))
            .collect()
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.points
            .iter()
            .position(|p| p.id == id)
            .ok_or(RecorderError::PointNotFound(id))
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
