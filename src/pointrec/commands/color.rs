use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::Color;

/// Selects the colour applied to subsequently recorded points.
pub fn run(session: &mut Session, color: Color) -> Result<CmdResult> {
    session.color = color;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Recording colour: {}", color)));
    Ok(result)
}

/// Reports the current colour.
pub fn show(session: &Session) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Recording colour: {}", session.color)));
    Ok(result)
}
