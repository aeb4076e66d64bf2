use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker category chosen when a point is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Pink,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Pink => "pink",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Ok(Color::Blue),
            "pink" => Ok(Color::Pink),
            other => Err(format!("Unknown colour: {} (expected blue or pink)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl FromStr for Coordinates {
    type Err = String;

    /// Parses `"lat,lon"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("Invalid coordinates: {} (expected lat,lon)", s))?;
        let lat = parse_coordinate(lat).map_err(|e| format!("Invalid latitude: {}", e))?;
        let lon = parse_coordinate(lon).map_err(|e| format!("Invalid longitude: {}", e))?;
        Ok(Self { lat, lon })
    }
}

/// Parses one coordinate component. NaN and infinities are refused.
pub fn parse_coordinate(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let value: f64 = s.parse().map_err(|_| format!("{} is not a number", s))?;
    if !value.is_finite() {
        return Err(format!("{} is not a finite number", s));
    }
    Ok(value)
}

/// A recorded geographic observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: u64,
    pub sequence_number: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub color: Color,
    pub node_label: Option<String>,
}

impl Point {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// The label, if present and non-empty.
    pub fn label(&self) -> Option<&str> {
        self.node_label.as_deref().filter(|l| !l.is_empty())
    }
}

/// Replacement values for an edit. All fields are written as given.
#[derive(Debug, Clone, PartialEq)]
pub struct PointUpdate {
    pub latitude: f64,
    pub longitude: f64,
    pub color: Color,
    pub node_label: Option<String>,
}

impl PointUpdate {
    /// Starts from the point's current values.
    pub fn from_point(point: &Point) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            color: point.color,
            node_label: point.node_label.clone(),
        }
    }
}

/// A labelled point viewed as a graph vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub colour: Color,
}

impl Node {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

/// A weighted connection between two node labels, distance in meters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub from: String,
    pub to: String,
    pub distance: u64,
}

impl Path {
    pub fn touches(&self, node_id: &str) -> bool {
        self.from == node_id || self.to == node_id
    }

    /// True when both edges join the same unordered pair of labels.
    pub fn same_pair(&self, from: &str, to: &str) -> bool {
        (self.from == from && self.to == to) || (self.from == to && self.to == from)
    }
}
