//! # Rendering Module
//!
//! Turns `CmdResult` contents into terminal text through minijinja templates
//! and the `style` filter from [`super::styles`].
//!
//! Width and number formatting happen here, in Rust. Templates receive ready
//! made cells plus the semantic style to use for each.

use super::styles::{names, POINTREC_THEME};
use super::templates;
use minijinja::{Environment, Value};
use pointrec::api::{CmdMessage, DisplayPath, MessageLevel};
use pointrec::config::RecorderConfig;
use pointrec::model::{Node, Point};
use serde::Serialize;

#[derive(Serialize)]
struct PointRow {
    seq: String,
    coords: String,
    color: String,
    color_cell: String,
    label: Option<String>,
}

#[derive(Serialize)]
struct PointsData {
    header: String,
    points: Vec<PointRow>,
}

#[derive(Serialize)]
struct NodeRow {
    id_cell: String,
    coords: String,
    colour: String,
}

#[derive(Serialize)]
struct NodesData {
    header: String,
    nodes: Vec<NodeRow>,
}

#[derive(Serialize)]
struct PathRow {
    position: String,
    from_cell: String,
    to_cell: String,
    distance: String,
    dangling: bool,
}

#[derive(Serialize)]
struct PathsData {
    paths: Vec<PathRow>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

fn coords_cell(lat: f64, lon: f64) -> String {
    format!("{:>10.6} {:>11.6}", lat, lon)
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(str::len).max().unwrap_or(0).max(4)
}

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            POINTREC_THEME.apply(&name, &value.to_string(), use_color)
        });
        for (name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .map(|mut out| {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out
            })
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn render_points(&self, points: &[Point]) -> String {
        if points.is_empty() {
            return String::new();
        }
        let rows = points
            .iter()
            .map(|p| PointRow {
                seq: format!("{:>3}.", p.sequence_number),
                coords: coords_cell(p.latitude, p.longitude),
                color: p.color.to_string(),
                color_cell: format!("{:<6}", p.color.as_str()),
                label: p.label().map(str::to_string),
            })
            .collect();
        let data = PointsData {
            header: format!(
                "{:>4} {:>10} {:>11}  {:<6}  {}",
                "#", "latitude", "longitude", "colour", "label"
            ),
            points: rows,
        };
        self.render("points", &data)
    }

    pub fn render_nodes(&self, nodes: &[Node]) -> String {
        if nodes.is_empty() {
            return String::new();
        }
        let width = label_width(nodes.iter().map(|n| n.id.as_str()));
        let rows = nodes
            .iter()
            .map(|n| NodeRow {
                id_cell: format!("{:<width$}", n.id, width = width),
                coords: coords_cell(n.lat, n.lon),
                colour: n.colour.to_string(),
            })
            .collect();
        let data = NodesData {
            header: format!(
                "{:<width$} {:>10} {:>11}  {}",
                "node",
                "latitude",
                "longitude",
                "colour",
                width = width
            ),
            nodes: rows,
        };
        self.render("nodes", &data)
    }

    pub fn render_paths(&self, paths: &[DisplayPath]) -> String {
        if paths.is_empty() {
            return String::new();
        }
        let width = label_width(
            paths
                .iter()
                .flat_map(|p| [p.path.from.as_str(), p.path.to.as_str()]),
        );
        let rows = paths
            .iter()
            .map(|p| PathRow {
                position: format!("{:>3}.", p.index),
                from_cell: format!("{:<width$}", p.path.from, width = width),
                to_cell: format!("{:<width$}", p.path.to, width = width),
                distance: format!("{:>8} m", p.path.distance),
                dangling: p.dangling,
            })
            .collect();
        self.render("paths", &PathsData { paths: rows })
    }

    pub fn render_messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let messages = messages
            .iter()
            .map(|msg| {
                let style = match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                };
                MessageData {
                    content: msg.content.clone(),
                    style: style.to_string(),
                }
            })
            .collect();
        self.render("messages", &MessagesData { messages })
    }

    pub fn render_config(&self, config: &RecorderConfig) -> String {
        let entries = config
            .entries()
            .into_iter()
            .map(|(key, value)| ConfigEntry {
                key: key.to_string(),
                value,
            })
            .collect();
        self.render("config", &ConfigData { entries })
    }
}
