use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::index::PointSelector;

/// Deletes every selected point.
///
/// All selectors are resolved against the numbering shown before the command
/// runs, so `delete 1 2` removes the first two listed points even though the
/// first deletion renumbers the rest. Any unresolvable selector aborts the
/// command before anything is removed.
pub fn run(session: &mut Session, selectors: &[PointSelector]) -> Result<CmdResult> {
    let mut ids = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let id = session.points.resolve(*selector)?;
        if !ids.iter().any(|(_, seen)| *seen == id) {
            ids.push((*selector, id));
        }
    }

    let mut result = CmdResult::default();
    for (selector, id) in ids {
        let point = session.points.delete(id)?;
        let label = point
            .label()
            .map(|l| format!(" [{}]", l))
            .unwrap_or_default();
        result.add_message(CmdMessage::success(format!(
            "Point {} deleted{}",
            selector, label
        )));
        result.affected_points.push(point);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, update};
    use crate::error::RecorderError;

    fn session_with(n: usize) -> Session {
        let mut session = Session::default();
        for i in 0..n {
            add::run(&mut session, i as f64, 0.0, None).unwrap();
        }
        session
    }

    #[test]
    fn deletes_and_renumbers() {
        let mut session = session_with(4);
        run(&mut session, &[PointSelector::Sequence(2)]).unwrap();

        let rows: Vec<_> = session
            .points
            .snapshot()
            .iter()
            .map(|p| (p.id, p.sequence_number))
            .collect();
        assert_eq!(rows, vec![(1, 1), (3, 2), (4, 3)]);
    }

    #[test]
    fn selectors_use_numbering_from_before_the_command() {
        let mut session = session_with(4);
        let result = run(
            &mut session,
            &[PointSelector::Sequence(1), PointSelector::Sequence(2)],
        )
        .unwrap();

        let removed: Vec<_> = result.affected_points.iter().map(|p| p.id).collect();
        assert_eq!(removed, vec![1, 2]);
        let left: Vec<_> = session.points.snapshot().iter().map(|p| p.id).collect();
        assert_eq!(left, vec![3, 4]);
    }

    #[test]
    fn repeated_selector_deletes_once() {
        let mut session = session_with(3);
        let result = run(
            &mut session,
            &[PointSelector::Sequence(2), PointSelector::Id(2)],
        )
        .unwrap();
        assert_eq!(result.affected_points.len(), 1);
        assert_eq!(session.points.len(), 2);
    }

    #[test]
    fn unknown_selector_leaves_store_untouched() {
        let mut session = session_with(2);
        let err = run(
            &mut session,
            &[PointSelector::Sequence(1), PointSelector::Sequence(5)],
        )
        .unwrap_err();
        assert!(matches!(err, RecorderError::SequenceNotFound(5)));
        assert_eq!(session.points.len(), 2);
    }

    #[test]
    fn deleting_a_labelled_point_drops_its_node_but_keeps_paths() {
        let mut session = session_with(2);
        update::run(&mut session, &update::PointEdit::label(PointSelector::Sequence(1), "a")).unwrap();
        update::run(&mut session, &update::PointEdit::label(PointSelector::Sequence(2), "b")).unwrap();
        let nodes = session.projection.nodes(&session.points).to_vec();
        session.paths.add("A", "B", None, &nodes).unwrap();

        let result = run(&mut session, &[PointSelector::Sequence(1)]).unwrap();
        assert_eq!(result.messages[0].content, "Point 1 deleted [A]");
        assert_eq!(session.nodes().len(), 1);
        assert_eq!(session.paths.len(), 1);
    }
}
