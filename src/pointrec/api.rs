//! # API Facade
//!
//! The single entry point for pointrec operations, whatever the interface.
//!
//! The facade dispatches to `commands/*.rs`, normalizes user input (sequence
//! numbers and ranges become [`PointSelector`]s, 1-based path positions stay
//! 1-based until the command layer) and returns `Result<CmdResult>`. It holds no
//! business logic and performs no terminal I/O.
//!
//! `RecorderApi<S, L>` is generic over the export destination and the position
//! source:
//! - Production: `RecorderApi<DirectorySink, Box<dyn Geolocator>>`
//! - Testing: `RecorderApi<MemorySink, FixedLocator>`

use crate::commands::{self, Session};
use crate::error::{RecorderError, Result};
use crate::export::sink::ExportSink;
use crate::geolocation::{GeolocationOptions, Geolocator};
use crate::index::{self, PointSelector};
use crate::model::Color;
use chrono::{NaiveDate, Utc};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct RecorderApi<S: ExportSink, L: Geolocator> {
    session: Session,
    sink: S,
    locator: L,
    geolocation: GeolocationOptions,
    config_dir: Option<PathBuf>,
}

impl<S: ExportSink, L: Geolocator> RecorderApi<S, L> {
    pub fn new(session: Session, sink: S, locator: L) -> Self {
        Self {
            session,
            sink,
            locator,
            geolocation: GeolocationOptions::default(),
            config_dir: None,
        }
    }

    pub fn with_geolocation(mut self, options: GeolocationOptions) -> Self {
        self.geolocation = options;
        self
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    pub fn add_point(
        &mut self,
        latitude: f64,
        longitude: f64,
        color: Option<Color>,
    ) -> Result<commands::CmdResult> {
        ensure_finite(latitude)?;
        ensure_finite(longitude)?;
        commands::add::run(&mut self.session, latitude, longitude, color)
    }

    pub fn delete_points<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.session, &selectors)
    }

    pub fn edit_point(
        &mut self,
        selector: &str,
        label: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
        color: Option<Color>,
    ) -> Result<commands::CmdResult> {
        latitude.map(ensure_finite).transpose()?;
        longitude.map(ensure_finite).transpose()?;
        let selector = PointSelector::from_str(selector).map_err(RecorderError::Api)?;
        let edit = PointEdit {
            selector,
            label: label.to_string(),
            latitude,
            longitude,
            color,
        };
        commands::update::run(&mut self.session, &edit)
    }

    pub fn list_points(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn list_nodes(&mut self) -> Result<commands::CmdResult> {
        commands::nodes::run(&mut self.session)
    }

    pub fn suggest_label(&self) -> Result<commands::CmdResult> {
        commands::nodes::suggest(&self.session)
    }

    pub fn set_color(&mut self, color: Color) -> Result<commands::CmdResult> {
        commands::color::run(&mut self.session, color)
    }

    pub fn show_color(&self) -> Result<commands::CmdResult> {
        commands::color::show(&self.session)
    }

    pub fn add_path(
        &mut self,
        from: &str,
        to: &str,
        distance: Option<f64>,
    ) -> Result<commands::CmdResult> {
        commands::paths::add(&mut self.session, from, to, distance)
    }

    /// `position` is 1-based, as listed.
    pub fn remove_path(&mut self, position: usize) -> Result<commands::CmdResult> {
        commands::paths::remove(&mut self.session, position)
    }

    pub fn auto_generate_paths(&mut self) -> Result<commands::CmdResult> {
        commands::paths::auto_generate(&mut self.session)
    }

    pub fn list_paths(&mut self) -> Result<commands::CmdResult> {
        commands::paths::list(&mut self.session)
    }

    pub fn connections(&mut self, label: &str) -> Result<commands::CmdResult> {
        commands::paths::connected(&mut self.session, label)
    }

    pub fn locate(&mut self, record: bool) -> Result<commands::CmdResult> {
        commands::locate::run(
            &mut self.session,
            &mut self.locator,
            &self.geolocation,
            record,
        )
    }

    /// CSV export dated today, as a UTC calendar date.
    pub fn export_csv(&mut self) -> Result<commands::CmdResult> {
        self.export_csv_on(Utc::now().date_naive())
    }

    pub fn export_csv_on(&mut self, date: NaiveDate) -> Result<commands::CmdResult> {
        commands::export::csv(&self.session, &mut self.sink, date)
    }

    pub fn save_graph(&mut self) -> Result<commands::CmdResult> {
        commands::export::save(&mut self.session, &mut self.sink)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        let dir = self
            .config_dir
            .as_deref()
            .ok_or_else(|| RecorderError::Config("No config directory available".to_string()))?;
        commands::config::run(dir, action)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }
}

fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RecorderError::Api(format!(
            "Coordinates must be finite numbers, got {}",
            value
        )))
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<PointSelector>> {
    index::parse_selectors(inputs).map_err(RecorderError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::update::PointEdit;
pub use commands::{CmdMessage, CmdResult, DisplayPath, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sink::MemorySink;
    use crate::export::{points_filename, NODES_FILENAME, PATHS_FILENAME};
    use crate::geolocation::{FixedLocator, NoLocator};
    use crate::model::Coordinates;

    fn api() -> RecorderApi<MemorySink, FixedLocator> {
        RecorderApi::new(
            Session::default(),
            MemorySink::new(),
            FixedLocator::new(Coordinates::new(10.0, 20.0)),
        )
    }

    #[test]
    fn delete_accepts_ranges() {
        let mut api = api();
        for i in 0..5 {
            api.add_point(i as f64, 0.0, None).unwrap();
        }
        let result = api.delete_points(&["2-3", "#5"]).unwrap();
        assert_eq!(result.affected_points.len(), 3);
        let left: Vec<_> = api.session().points.snapshot().iter().map(|p| p.id).collect();
        assert_eq!(left, vec![1, 4]);
    }

    #[test]
    fn delete_rejects_malformed_selector() {
        let mut api = api();
        api.add_point(0.0, 0.0, None).unwrap();
        assert!(matches!(api.delete_points(&["x"]), Err(RecorderError::Api(_))));
        assert_eq!(api.session().points.len(), 1);
    }

    #[test]
    fn edit_dispatches_with_selector() {
        let mut api = api();
        api.add_point(0.0, 0.0, None).unwrap();
        let result = api.edit_point("1", "a75", None, Some(3.0), None).unwrap();
        let point = &result.affected_points[0];
        assert_eq!(point.label(), Some("A75"));
        assert_eq!(point.longitude, 3.0);
        assert_eq!(api.suggest_label().unwrap().messages[0].content, "A76");
    }

    #[test]
    fn graph_round_trip_through_sink() {
        let mut api = api();
        api.add_point(0.0, 0.0, None).unwrap();
        api.add_point(0.0, 1.0, None).unwrap();
        api.edit_point("1", "a", None, None, None).unwrap();
        api.edit_point("2", "b", None, None, None).unwrap();
        api.auto_generate_paths().unwrap();

        api.save_graph().unwrap();
        assert!(api.sink().get(NODES_FILENAME).unwrap().contains("\"id\": \"A\""));
        assert!(api.sink().get(PATHS_FILENAME).unwrap().contains("\"distance\": 111195"));

        api.remove_path(1).unwrap();
        assert!(api.list_paths().unwrap().listed_paths.is_empty());
    }

    #[test]
    fn csv_export_uses_date() {
        let mut api = api();
        api.add_point(1.0, 1.0, None).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        api.export_csv_on(date).unwrap();
        assert!(api.sink().get("recorded_points_2024-12-01.csv").is_some());
    }

    #[test]
    fn non_finite_coordinates_are_refused() {
        let mut api = api();
        assert!(matches!(
            api.add_point(f64::NAN, 0.0, None),
            Err(RecorderError::Api(_))
        ));
        assert!(matches!(
            api.add_point(0.0, f64::INFINITY, None),
            Err(RecorderError::Api(_))
        ));
        assert!(api.session().points.is_empty());

        api.add_point(1.0, 2.0, None).unwrap();
        assert!(matches!(
            api.edit_point("1", "a", Some(f64::NEG_INFINITY), None, None),
            Err(RecorderError::Api(_))
        ));
        let point = &api.session().points.snapshot()[0];
        assert_eq!(point.latitude, 1.0);
        assert_eq!(point.label(), None);
    }

    #[test]
    fn csv_export_is_named_by_utc_date() {
        let mut api = api();
        api.add_point(1.0, 1.0, None).unwrap();
        let before = Utc::now().date_naive();
        api.export_csv().unwrap();
        let after = Utc::now().date_naive();

        let names = api.sink().filenames();
        assert_eq!(names.len(), 1);
        assert!(
            names[0] == points_filename(before) || names[0] == points_filename(after),
            "unexpected {}",
            names[0]
        );
    }

    #[test]
    fn locate_uses_locator() {
        let mut api = api();
        let result = api.locate(true).unwrap();
        assert_eq!(result.center, Some(Coordinates::new(10.0, 20.0)));
        assert_eq!(api.session().points.len(), 1);
    }

    #[test]
    fn locate_without_source_fails() {
        let mut api = RecorderApi::new(Session::default(), MemorySink::new(), NoLocator);
        assert!(matches!(api.locate(false), Err(RecorderError::Geolocation(_))));
    }

    #[test]
    fn config_requires_directory() {
        let api = api();
        assert!(matches!(
            api.config(ConfigAction::ShowAll),
            Err(RecorderError::Config(_))
        ));

        let temp = tempfile::tempdir().unwrap();
        let api = api.with_config_dir(temp.path());
        assert!(api.config(ConfigAction::ShowAll).unwrap().config.is_some());
    }

    #[test]
    fn color_applies_to_new_points() {
        let mut api = api();
        api.set_color(Color::Pink).unwrap();
        let result = api.add_point(0.0, 0.0, None).unwrap();
        assert_eq!(result.affected_points[0].color, Color::Pink);
    }
}
