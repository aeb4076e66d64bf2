use crate::commands::{normalize_label, CmdMessage, CmdResult, Session};
use crate::error::{RecorderError, Result};
use crate::index::PointSelector;
use crate::model::{Color, PointUpdate};

/// An edit submitted for one point. Unset coordinates and colour keep their
/// current values; the label is always written.
#[derive(Debug, Clone, PartialEq)]
pub struct PointEdit {
    pub selector: PointSelector,
    pub label: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub color: Option<Color>,
}

impl PointEdit {
    pub fn label(selector: PointSelector, label: impl Into<String>) -> Self {
        Self {
            selector,
            label: label.into(),
            latitude: None,
            longitude: None,
            color: None,
        }
    }
}

/// Applies an edit. The label is trimmed and uppercased and must not end up
/// empty. Reusing a label held by another point is allowed but warned about.
pub fn run(session: &mut Session, edit: &PointEdit) -> Result<CmdResult> {
    let label = normalize_label(&edit.label);
    if label.is_empty() {
        return Err(RecorderError::EmptyLabel);
    }

    let id = session.points.resolve(edit.selector)?;
    let current = session
        .points
        .get(id)
        .cloned()
        .ok_or(RecorderError::PointNotFound(id))?;

    let mut result = CmdResult::default();
    let holders: Vec<String> = session
        .points
        .label_holders(&label, id)
        .iter()
        .map(|p| p.sequence_number.to_string())
        .collect();
    if !holders.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Label {} is also used by point {}; paths resolve to the first in list order",
            label,
            holders.join(", ")
        )));
    }

    let update = PointUpdate {
        latitude: edit.latitude.unwrap_or(current.latitude),
        longitude: edit.longitude.unwrap_or(current.longitude),
        color: edit.color.unwrap_or(current.color),
        node_label: Some(label),
    };
    let updated = session.points.update(id, update)?.clone();

    result.add_message(CmdMessage::success(format!(
        "Point {} labelled {}",
        updated.sequence_number,
        updated.label().unwrap_or_default()
    )));
    Ok(result.with_affected_points(vec![updated]))
}
