//! Path commands.
//!
//! Positions shown to the user are 1-based; the store is addressed 0-based.
//! Endpoint labels typed by the user are matched uppercased, the way edit
//! stores them.

use crate::commands::{normalize_label, CmdMessage, CmdResult, DisplayPath, Session};
use crate::error::{RecorderError, Result};
use crate::nodes::find;
use crate::store::paths::is_renderable;

pub fn add(session: &mut Session, from: &str, to: &str, distance: Option<f64>) -> Result<CmdResult> {
    let from = normalize_label(from);
    let to = normalize_label(to);
    let nodes = session.projection.nodes(&session.points);

    let mut result = CmdResult::default();
    match session.paths.add(&from, &to, distance, nodes) {
        Ok(path) => {
            result.add_message(CmdMessage::success(format!(
                "Path {} -> {} recorded ({} m)",
                path.from, path.to, path.distance
            )));
        }
        Err(rejection) => {
            result.add_message(CmdMessage::warning(format!("Path not added: {}", rejection)));
        }
    }
    Ok(result)
}

/// Removes the path at 1-based `position`.
pub fn remove(session: &mut Session, position: usize) -> Result<CmdResult> {
    let len = session.paths.len();
    let index = position
        .checked_sub(1)
        .filter(|i| *i < len)
        .ok_or(RecorderError::PathIndexOutOfRange {
            index: position,
            len,
        })?;
    let removed = session.paths.remove(index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Path {} removed ({} -> {})",
        position, removed.from, removed.to
    )));
    Ok(result)
}

/// Replaces all paths with a chain through the nodes in list order.
pub fn auto_generate(session: &mut Session) -> Result<CmdResult> {
    let nodes = session.projection.nodes(&session.points);
    let node_count = nodes.len();
    let generated = session.paths.auto_generate(nodes).len();

    let mut result = CmdResult::default();
    if node_count < 2 {
        result.add_message(CmdMessage::warning(format!(
            "Auto-generate needs at least two nodes ({} available); paths cleared",
            node_count
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Generated {} paths through {} nodes",
            generated, node_count
        )));
    }
    let listed = display_paths(session);
    Ok(result.with_listed_paths(listed))
}

/// Every stored path, dangling ones flagged.
pub fn list(session: &mut Session) -> Result<CmdResult> {
    let listed = display_paths(session);
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(
            "No paths defined yet. Add one with `path add` or run `path auto`.",
        ));
    }
    let nodes = session.projection.nodes(&session.points);
    let dangling = session.paths.dangling(nodes).len();
    if dangling > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} path(s) refer to labels that no longer exist; {} drawn",
            dangling,
            session.paths.renderable(nodes).len()
        )));
    }
    Ok(result.with_listed_paths(listed))
}

/// Paths touching a node, as shown when its marker is selected.
pub fn connected(session: &mut Session, label: &str) -> Result<CmdResult> {
    let label = normalize_label(label);
    let nodes = session.projection.nodes(&session.points);
    let mut result = CmdResult::default();
    if find(nodes, &label).is_none() {
        result.add_message(CmdMessage::warning(format!("No node labelled {}", label)));
    }

    let listed: Vec<DisplayPath> = session
        .paths
        .paths()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.touches(&label))
        .map(|(i, p)| DisplayPath {
            index: i + 1,
            path: p.clone(),
            dangling: !is_renderable(p, nodes),
        })
        .collect();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!("No paths connect to {}", label)));
    }
    Ok(result.with_listed_paths(listed))
}

fn display_paths(session: &mut Session) -> Vec<DisplayPath> {
    let nodes = session.projection.nodes(&session.points);
    session
        .paths
        .paths()
        .iter()
        .enumerate()
        .map(|(i, p)| DisplayPath {
            index: i + 1,
            path: p.clone(),
            dangling: !is_renderable(p, nodes),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::update::{self, PointEdit};
    use crate::commands::{add as add_point, delete, MessageLevel};
    use crate::distance::distance_meters;
    use crate::index::PointSelector;
    use crate::model::Coordinates;

    /// Three labelled points A, B, C about 1.1 km apart.
    fn graph() -> Session {
        let mut session = Session::default();
        let coords = [(0.0, 0.0), (0.0, 0.01), (0.01, 0.01)];
        for (i, (lat, lon)) in coords.iter().enumerate() {
            add_point::run(&mut session, *lat, *lon, None).unwrap();
            let label = ["a", "b", "c"][i];
            update::run(&mut session, &PointEdit::label(PointSelector::Sequence(i + 1), label)).unwrap();
        }
        session
    }

    #[test]
    fn add_computes_distance_and_matches_lowercase_input() {
        let mut session = graph();
        let result = add(&mut session, "a", "b", None).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let expected = distance_meters(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 0.01));
        assert_eq!(session.paths.paths()[0].distance, expected);
        assert_eq!(session.paths.paths()[0].from, "A");
    }

    #[test]
    fn add_keeps_supplied_distance() {
        let mut session = graph();
        add(&mut session, "A", "C", Some(250.4)).unwrap();
        assert_eq!(session.paths.paths()[0].distance, 250);
    }

    #[test]
    fn rejections_are_warnings_and_no_ops() {
        let mut session = graph();
        add(&mut session, "A", "B", None).unwrap();

        for (from, to) in [("A", "A"), ("B", "A"), ("A", "Z")] {
            let result = add(&mut session, from, to, None).unwrap();
            assert_eq!(result.messages[0].level, MessageLevel::Warning);
            assert!(result.messages[0].content.starts_with("Path not added"));
        }
        assert_eq!(session.paths.len(), 1);
    }

    #[test]
    fn remove_uses_one_based_positions() {
        let mut session = graph();
        add(&mut session, "A", "B", None).unwrap();
        add(&mut session, "B", "C", None).unwrap();

        remove(&mut session, 1).unwrap();
        assert_eq!(session.paths.len(), 1);
        assert_eq!(session.paths.paths()[0].from, "B");

        assert!(matches!(
            remove(&mut session, 0),
            Err(RecorderError::PathIndexOutOfRange { index: 0, len: 1 })
        ));
        assert!(matches!(
            remove(&mut session, 2),
            Err(RecorderError::PathIndexOutOfRange { index: 2, len: 1 })
        ));
        assert_eq!(session.paths.len(), 1);
    }

    #[test]
    fn auto_generate_chains_nodes_in_point_order() {
        let mut session = graph();
        add(&mut session, "A", "C", Some(5.0)).unwrap();

        let result = auto_generate(&mut session).unwrap();
        let pairs: Vec<_> = result
            .listed_paths
            .iter()
            .map(|p| (p.path.from.as_str(), p.path.to.as_str(), p.index))
            .collect();
        assert_eq!(pairs, vec![("A", "B", 1), ("B", "C", 2)]);
        assert_eq!(session.paths.len(), 2);
    }

    #[test]
    fn auto_generate_with_one_node_clears_and_warns() {
        let mut session = Session::default();
        add_point::run(&mut session, 0.0, 0.0, None).unwrap();
        update::run(&mut session, &PointEdit::label(PointSelector::Sequence(1), "A")).unwrap();

        let result = auto_generate(&mut session).unwrap();
        assert!(result.listed_paths.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn list_flags_dangling_paths() {
        let mut session = graph();
        add(&mut session, "A", "B", None).unwrap();
        add(&mut session, "B", "C", None).unwrap();
        update::run(&mut session, &PointEdit::label(PointSelector::Sequence(3), "D")).unwrap();

        let result = list(&mut session).unwrap();
        assert_eq!(result.listed_paths.len(), 2);
        assert!(!result.listed_paths[0].dangling);
        assert!(result.listed_paths[1].dangling);
        assert!(result.has_problems());
        assert_eq!(
            result.messages[0].content,
            "1 path(s) refer to labels that no longer exist; 1 drawn"
        );
    }

    #[test]
    fn list_empty() {
        let mut session = Session::default();
        let result = list(&mut session).unwrap();
        assert!(result.listed_paths.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn connected_keeps_store_positions() {
        let mut session = graph();
        add(&mut session, "A", "B", None).unwrap();
        add(&mut session, "B", "C", None).unwrap();
        add(&mut session, "C", "A", None).unwrap();

        let result = connected(&mut session, "a").unwrap();
        let positions: Vec<_> = result.listed_paths.iter().map(|p| p.index).collect();
        assert_eq!(positions, vec![1, 3]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn connected_for_deleted_node_warns_but_lists_leftovers() {
        let mut session = graph();
        add(&mut session, "A", "B", None).unwrap();
        delete::run(&mut session, &[PointSelector::Sequence(1)]).unwrap();

        let result = connected(&mut session, "A").unwrap();
        assert_eq!(result.listed_paths.len(), 1);
        assert!(result.listed_paths[0].dangling);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
