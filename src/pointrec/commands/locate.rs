use crate::commands::{format_coordinates, CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::geolocation::{GeolocationOptions, Geolocator};
use tracing::{debug, warn};

/// Asks the locator for the device position and recentres the session on it.
///
/// With `record`, the position is also recorded as a point in the current
/// colour. A failed lookup leaves the session untouched.
pub fn run<L: Geolocator + ?Sized>(
    session: &mut Session,
    locator: &mut L,
    options: &GeolocationOptions,
    record: bool,
) -> Result<CmdResult> {
    debug!(
        high_accuracy = options.high_accuracy,
        timeout = ?options.timeout(),
        maximum_age = ?options.maximum_age(),
        "requesting device position"
    );
    let position = locator.locate(options).map_err(|e| {
        warn!(error = %e, "location lookup failed");
        e
    })?;
    session.center = position;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Location found: {}",
        format_coordinates(position.lat, position.lon)
    )));
    if record {
        let point = session
            .points
            .add(position.lat, position.lon, session.color)
            .clone();
        result.add_message(CmdMessage::success(format!(
            "Point {} recorded at current location",
            point.sequence_number
        )));
        result.affected_points.push(point);
    }
    Ok(result.with_center(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::DEFAULT_CENTER;
    use crate::error::RecorderError;
    use crate::geolocation::{FixedLocator, GeolocationError, NoLocator};
    use crate::model::Coordinates;

    struct Failing(GeolocationError);

    impl Geolocator for Failing {
        fn locate(
            &mut self,
            _options: &GeolocationOptions,
        ) -> std::result::Result<Coordinates, GeolocationError> {
            Err(self.0)
        }
    }

    #[test]
    fn recentres_without_recording() {
        let mut session = Session::default();
        let here = Coordinates::new(12.9716, 77.5946);
        let result = run(
            &mut session,
            &mut FixedLocator::new(here),
            &GeolocationOptions::default(),
            false,
        )
        .unwrap();

        assert_eq!(session.center, here);
        assert_eq!(result.center, Some(here));
        assert!(session.points.is_empty());
    }

    #[test]
    fn record_adds_point_in_current_colour() {
        let mut session = Session::default();
        session.color = crate::model::Color::Pink;
        let here = Coordinates::new(1.0, 2.0);
        let result = run(
            &mut session,
            &mut FixedLocator::new(here),
            &GeolocationOptions::default(),
            true,
        )
        .unwrap();

        assert_eq!(result.affected_points.len(), 1);
        let point = &session.points.snapshot()[0];
        assert_eq!(point.coordinates(), here);
        assert_eq!(point.color, crate::model::Color::Pink);
    }

    #[test]
    fn failure_keeps_state_and_carries_message() {
        let mut session = Session::default();
        let err = run(
            &mut session,
            &mut Failing(GeolocationError::PermissionDenied),
            &GeolocationOptions::default(),
            true,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            RecorderError::Geolocation(GeolocationError::PermissionDenied)
        ));
        assert_eq!(err.to_string(), "Location access denied by user");
        assert_eq!(session.center, DEFAULT_CENTER);
        assert!(session.points.is_empty());
    }

    struct Recording(Option<GeolocationOptions>);

    impl Geolocator for Recording {
        fn locate(
            &mut self,
            options: &GeolocationOptions,
        ) -> std::result::Result<Coordinates, GeolocationError> {
            self.0 = Some(*options);
            Ok(Coordinates::new(0.0, 0.0))
        }
    }

    #[test]
    fn options_are_handed_to_locator() {
        let mut session = Session::default();
        let mut locator = Recording(None);
        let options = GeolocationOptions {
            timeout_secs: 3,
            ..GeolocationOptions::default()
        };
        run(&mut session, &mut locator, &options, false).unwrap();

        let seen = locator.0.unwrap();
        assert_eq!(seen.timeout(), std::time::Duration::from_secs(3));
        assert_eq!(seen.maximum_age(), std::time::Duration::from_secs(60));
    }

    #[test]
    fn unsupported_device() {
        let mut session = Session::default();
        let err = run(
            &mut session,
            &mut NoLocator,
            &GeolocationOptions::default(),
            false,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Geolocation is not supported by this device");
    }
}
