//! # Export Serializer
//!
//! Pure conversions from session state to the three export payloads:
//!
//! - points → CSV table (`recorded_points_<YYYY-MM-DD>.csv`)
//! - nodes  → JSON array `[{id, lat, lon, colour}]` (`road_path.json`)
//! - paths  → JSON array `[{from, to, distance}]` (`edges_with_distances.json`)
//!
//! Nothing here writes files. Handing payloads to a destination is the job of
//! an [`sink::ExportSink`].

use crate::error::{RecorderError, Result};
use crate::model::{Node, Path, Point};
use chrono::NaiveDate;

pub mod sink;

pub const CSV_HEADER: [&str; 4] = ["s.no", "latitudinal", "longitudinal", "colour"];
pub const NODES_FILENAME: &str = "road_path.json";
pub const PATHS_FILENAME: &str = "edges_with_distances.json";

/// `recorded_points_<YYYY-MM-DD>.csv`
pub fn points_filename(date: NaiveDate) -> String {
    format!("recorded_points_{}.csv", date.format("%Y-%m-%d"))
}

/// Renders points as a comma-separated table.
///
/// One header row, then one row per point in snapshot order with coordinates
/// at six decimals. Rows are joined by `\n` with no trailing newline. Fields are
/// never quoted: none of them can contain the delimiter.
pub fn to_delimited_table(points: &[Point]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for point in points {
        writer.write_record([
            point.sequence_number.to_string(),
            format!("{:.6}", point.latitude),
            format!("{:.6}", point.longitude),
            point.color.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RecorderError::Io(e.into_error()))?;
    let mut table = String::from_utf8(bytes).map_err(|e| RecorderError::Api(e.to_string()))?;
    if table.ends_with('\n') {
        table.pop();
    }
    Ok(table)
}

/// Nodes as a pretty-printed JSON array (2-space indentation).
///
/// Whole-degree coordinates keep their fraction (`1.0`).
pub fn to_node_document(nodes: &[Node]) -> Result<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

/// Paths as a pretty-printed JSON array (2-space indentation).
pub fn to_path_document(paths: &[Path]) -> Result<String> {
    Ok(serde_json::to_string_pretty(paths)?)
}
