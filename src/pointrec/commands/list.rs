use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;

pub fn run(session: &Session) -> Result<CmdResult> {
    let points = session.points.snapshot().to_vec();
    let mut result = CmdResult::default();
    if points.is_empty() {
        result.add_message(CmdMessage::info("No points recorded yet."));
    }
    Ok(result.with_listed_points(points))
}
