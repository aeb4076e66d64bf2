use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;

/// Lists the current nodes in point order.
pub fn run(session: &mut Session) -> Result<CmdResult> {
    let nodes = session.nodes().to_vec();
    let mut result = CmdResult::default();
    if nodes.is_empty() {
        result.add_message(CmdMessage::info(
            "No nodes yet. Label a point with `edit <n> <label>`.",
        ));
    }
    Ok(result.with_listed_nodes(nodes))
}

/// Reports the next suggested node label.
pub fn suggest(session: &Session) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(session.points.suggest_label()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::update::{self, PointEdit};
    use crate::commands::add;
    use crate::index::PointSelector;

    #[test]
    fn only_labelled_points_are_nodes() {
        let mut session = Session::default();
        add::run(&mut session, 1.0, 1.0, None).unwrap();
        add::run(&mut session, 2.0, 2.0, None).unwrap();
        update::run(&mut session, &PointEdit::label(PointSelector::Sequence(2), "a75")).unwrap();

        let result = run(&mut session).unwrap();
        assert_eq!(result.listed_nodes.len(), 1);
        assert_eq!(result.listed_nodes[0].id, "A75");
        assert_eq!(result.listed_nodes[0].lat, 2.0);
    }

    #[test]
    fn empty_nodes_hint() {
        let mut session = Session::default();
        let result = run(&mut session).unwrap();
        assert!(result.listed_nodes.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn suggestion_starts_at_a75() {
        let session = Session::default();
        assert_eq!(suggest(&session).unwrap().messages[0].content, "A75");
    }
}
