//! # Sequence numbering
//!
//! Points carry two identifiers:
//!
//! - `id`: stable, assigned once at creation and never reused within a session.
//! - `sequence_number`: the 1-based display rank among live points.
//!
//! Users address points by their sequence number (it is what the table shows),
//! while the store mutates by id. Sequence numbers are dense: after a deletion
//! every surviving point is renumbered so the live set reads `1..=N` in array
//! order with no gaps or duplicates.
//!
//! This module also parses user selectors, either a single number (`3`), a
//! range (`2-5`), or an explicit id (`#12`).

use crate::model::Point;
use std::str::FromStr;

/// Reassigns `sequence_number` to `1..=len` following slice order.
pub fn renumber(points: &mut [Point]) {
    for (i, point) in points.iter_mut().enumerate() {
        point.sequence_number = i + 1;
    }
}

/// True when the slice satisfies the dense numbering invariant.
pub fn is_dense(points: &[Point]) -> bool {
    points
        .iter()
        .enumerate()
        .all(|(i, p)| p.sequence_number == i + 1)
}

/// A user reference to a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointSelector {
    /// Display rank as shown in listings.
    Sequence(usize),
    /// Stable point id, written `#<id>`.
    Id(u64),
}

impl std::fmt::Display for PointSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointSelector::Sequence(n) => write!(f, "{}", n),
            PointSelector::Id(id) => write!(f, "#{}", id),
        }
    }
}

impl FromStr for PointSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('#') {
            if let Ok(id) = rest.parse() {
                return Ok(PointSelector::Id(id));
            }
        }
        match s.parse::<usize>() {
            Ok(0) => Err("Sequence numbers start at 1".to_string()),
            Ok(n) => Ok(PointSelector::Sequence(n)),
            Err(_) => Err(format!("Invalid point reference: {}", s)),
        }
    }
}

/// Parses a single selector or a sequence range such as `2-4`.
///
/// Ranges expand inclusively and only apply to sequence numbers; start must be
/// <= end. Whether the points exist is checked later, during resolution.
pub fn parse_selector_or_range(s: &str) -> Result<Vec<PointSelector>, String> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = PointSelector::from_str(&s[..dash_pos])?;
            let end = PointSelector::from_str(&s[dash_pos + 1..])?;
            return expand_range(start, end);
        }
    }
    PointSelector::from_str(s).map(|sel| vec![sel])
}

fn expand_range(start: PointSelector, end: PointSelector) -> Result<Vec<PointSelector>, String> {
    match (start, end) {
        (PointSelector::Sequence(s), PointSelector::Sequence(e)) => {
            if s > e {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    s, e
                ));
            }
            Ok((s..=e).map(PointSelector::Sequence).collect())
        }
        _ => Err(format!(
            "Invalid range: ids cannot be used in ranges ({} and {})",
            start, end
        )),
    }
}

/// Parses every input, expanding ranges, preserving order.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<PointSelector>, String> {
    let mut out = Vec::new();
    for input in inputs {
        out.extend(parse_selector_or_range(input.as_ref())?);
    }
    Ok(out)
}
