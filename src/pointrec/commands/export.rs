use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::export::sink::ExportSink;
use crate::export::{
    points_filename, to_delimited_table, to_node_document, to_path_document, NODES_FILENAME,
    PATHS_FILENAME,
};
use chrono::NaiveDate;

pub const NO_POINTS_MESSAGE: &str = "No points to download. Please add some points first!";

/// Writes the points table as `recorded_points_<date>.csv`. Refused when empty.
pub fn csv<S: ExportSink>(session: &Session, sink: &mut S, date: NaiveDate) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let points = session.points.snapshot();
    if points.is_empty() {
        result.add_message(CmdMessage::warning(NO_POINTS_MESSAGE));
        return Ok(result);
    }

    let table = to_delimited_table(points)?;
    let path = sink.save(&points_filename(date), table.as_bytes())?;
    result.add_message(CmdMessage::success(format!(
        "Exported {} points to {}",
        points.len(),
        path.display()
    )));
    result.exported_files.push(path);
    Ok(result)
}

/// Writes the node and path documents. Empty graphs are written as `[]`.
pub fn save<S: ExportSink>(session: &mut Session, sink: &mut S) -> Result<CmdResult> {
    let nodes_doc = to_node_document(session.nodes())?;
    let paths_doc = to_path_document(session.paths.paths())?;

    let mut result = CmdResult::default();
    let nodes_path = sink.save(NODES_FILENAME, nodes_doc.as_bytes())?;
    let paths_path = sink.save(PATHS_FILENAME, paths_doc.as_bytes())?;

    let node_count = session.nodes().len();
    result.add_message(CmdMessage::success(format!(
        "Saved {} nodes to {}",
        node_count,
        nodes_path.display()
    )));
    result.add_message(CmdMessage::success(format!(
        "Saved {} paths to {}",
        session.paths.len(),
        paths_path.display()
    )));
    result.exported_files.push(nodes_path);
    result.exported_files.push(paths_path);
    Ok(result)
}
