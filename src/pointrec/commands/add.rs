use crate::commands::{format_coordinates, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::model::Color;

/// Records a point. Without an explicit colour the session's current one is used.
pub fn run(session: &mut Session, latitude: f64, longitude: f64, color: Option<Color>) -> Result<CmdResult> {
    let color = color.unwrap_or(session.color);
    let point = session.points.add(latitude, longitude, color).clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Point {} recorded at {} ({})",
        point.sequence_number,
        format_coordinates(point.latitude, point.longitude),
        point.color
    )));
    Ok(result.with_affected_points(vec![point]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_session_color_by_default() {
        let mut session = Session::default();
        session.color = Color::Pink;
        let result = run(&mut session, 12.9716, 77.5946, None).unwrap();

        let point = &result.affected_points[0];
        assert_eq!(point.color, Color::Pink);
        assert_eq!(point.sequence_number, 1);
        assert_eq!(point.node_label, None);
        assert_eq!(session.points.len(), 1);
    }

    #[test]
    fn explicit_color_wins() {
        let mut session = Session::default();
        let result = run(&mut session, 1.0, 2.0, Some(Color::Pink)).unwrap();
        assert_eq!(result.affected_points[0].color, Color::Pink);
        assert_eq!(session.color, Color::Blue);
    }

    #[test]
    fn accepts_any_coordinates() {
        let mut session = Session::default();
        run(&mut session, 123.0, -500.0, None).unwrap();
        assert_eq!(session.points.snapshot()[0].latitude, 123.0);
    }

    #[test]
    fn message_names_sequence_number() {
        let mut session = Session::default();
        run(&mut session, 0.0, 0.0, None).unwrap();
        let result = run(&mut session, 40.7128, -74.006, None).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Point 2 recorded at 40.712800, -74.006000 (blue)"
        );
    }
}
