//! Core types for the layout resolver

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::LayoutError;
use super::find_similar;

/// A 2D point in normalized pitch units
///
/// `x` runs across the pitch (0 = left touchline, 100 = right touchline),
/// `y` runs away from the goal line (0 = goal line, 100 = halfway line).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by the given offsets
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle anchored at its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y-coordinate (furthest from the goal line)
    pub fn top(&self) -> f64 {
        self.y + self.height
    }
}

/// A straight pitch marking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// A circular arc, angles in degrees counter-clockwise from the +x axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Arc {
    fn point_at(&self, deg: f64) -> Point {
        let rad = deg.to_radians();
        Point::new(
            self.center.x + self.radius * rad.cos(),
            self.center.y + self.radius * rad.sin(),
        )
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_deg)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.end_deg)
    }

    /// Angular extent in degrees
    pub fn sweep(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

/// The fixed markings of the attacking half of a pitch
#[derive(Debug, Clone, PartialEq)]
pub struct StaticGeometry {
    /// Goal line, halfway line and both touchlines
    pub lines: Vec<Segment>,
    pub penalty_area: Rect,
    pub six_yard_area: Rect,
    /// Goal mouth, drawn behind the goal line
    pub goal: Rect,
    /// The "D" outside the penalty area
    pub penalty_arc: Arc,
    pub penalty_spot: Point,
}

/// The tactical roles a player can take during a set piece
///
/// Variants are declared in drawing order; the derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Zone {
    Kicker,
    NearPost,
    FarPost,
    PenaltySpot,
    GoalkeeperScreen,
    EdgeOfBox,
    DefensiveBalance,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::Kicker,
        Zone::NearPost,
        Zone::FarPost,
        Zone::PenaltySpot,
        Zone::GoalkeeperScreen,
        Zone::EdgeOfBox,
        Zone::DefensiveBalance,
    ];

    /// Stable key used in plan files and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Zone::Kicker => "kicker",
            Zone::NearPost => "near-post",
            Zone::FarPost => "far-post",
            Zone::PenaltySpot => "penalty-spot",
            Zone::GoalkeeperScreen => "goalkeeper-screen",
            Zone::EdgeOfBox => "edge-of-box",
            Zone::DefensiveBalance => "defensive-balance",
        }
    }

    /// Human-readable role description
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Kicker => "Kicker (on the ball)",
            Zone::NearPost => "Near post (short)",
            Zone::FarPost => "Far post (long)",
            Zone::PenaltySpot => "Penalty spot (central zone)",
            Zone::GoalkeeperScreen => "Goalkeeper zone (obstruction)",
            Zone::EdgeOfBox => "Edge of the box (second balls)",
            Zone::DefensiveBalance => "Defensive balance (midfield)",
        }
    }

    /// Scenario-independent anchor; `None` for the kicker, whose spot
    /// depends on the set piece.
    pub fn fixed_anchor(&self) -> Option<Point> {
        match self {
            Zone::Kicker => None,
            Zone::NearPost => Some(Point::new(40.0, 6.0)),
            Zone::FarPost => Some(Point::new(60.0, 6.0)),
            Zone::PenaltySpot => Some(Point::new(50.0, 11.0)),
            Zone::GoalkeeperScreen => Some(Point::new(50.0, 3.0)),
            Zone::EdgeOfBox => Some(Point::new(50.0, 22.0)),
            Zone::DefensiveBalance => Some(Point::new(50.0, 45.0)),
        }
    }

    /// Where a player in this zone stands for the given set piece
    pub fn anchor(&self, scenario: ScenarioKind) -> Point {
        self.fixed_anchor().unwrap_or_else(|| scenario.kicker_spot())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Zone {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Zone::ALL
            .into_iter()
            .find(|z| z.key() == needle)
            .ok_or_else(|| {
                LayoutError::unknown_zone(
                    s.trim(),
                    find_similar(Zone::ALL.iter().map(|z| z.key()), &needle, 2),
                )
            })
    }
}

/// The kind and side of set piece being planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScenarioKind {
    #[default]
    CornerLeft,
    CornerRight,
    LateralFreeKick,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::CornerLeft,
        ScenarioKind::CornerRight,
        ScenarioKind::LateralFreeKick,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ScenarioKind::CornerLeft => "corner-left",
            ScenarioKind::CornerRight => "corner-right",
            ScenarioKind::LateralFreeKick => "lateral-free-kick",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::CornerLeft => "Attacking corner (left)",
            ScenarioKind::CornerRight => "Attacking corner (right)",
            ScenarioKind::LateralFreeKick => "Lateral free kick",
        }
    }

    /// Position of the ball, and therefore of the kicker
    pub fn kicker_spot(&self) -> Point {
        match self {
            ScenarioKind::CornerLeft => Point::new(0.0, 0.0),
            ScenarioKind::CornerRight => Point::new(100.0, 0.0),
            ScenarioKind::LateralFreeKick => Point::new(20.0, 25.0),
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScenarioKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ScenarioKind::ALL
            .into_iter()
            .find(|k| k.key() == needle)
            .ok_or_else(|| {
                LayoutError::unknown_scenario(
                    s.trim(),
                    find_similar(ScenarioKind::ALL.iter().map(|k| k.key()), &needle, 3),
                )
            })
    }
}

/// Players chosen for each zone, at most one per zone
///
/// Assigning a zone twice keeps the last choice. The same player may hold
/// several zones at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    slots: BTreeMap<Zone, String>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `(zone key, player)` pairs, skipping keys that do not
    /// name a zone.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut assignment = Self::new();
        for (key, player) in entries {
            match key.as_ref().parse::<Zone>() {
                Ok(zone) => {
                    assignment.assign(zone, player);
                }
                Err(_) => {
                    tracing::debug!(zone = key.as_ref(), "skipping unknown zone");
                }
            }
        }
        assignment
    }

    /// Put a player in a zone, returning whoever held it before
    pub fn assign(&mut self, zone: Zone, player: impl Into<String>) -> Option<String> {
        self.slots.insert(zone, player.into())
    }

    /// Leave a zone empty, returning whoever held it before
    pub fn clear(&mut self, zone: Zone) -> Option<String> {
        self.slots.remove(&zone)
    }

    pub fn get(&self, zone: Zone) -> Option<&str> {
        self.slots.get(&zone).map(String::as_str)
    }

    /// Assigned zones in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &str)> {
        self.slots.iter().map(|(z, p)| (*z, p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A player resolved to a position on the pitch
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPlayer {
    pub zone: Zone,
    pub name: String,
    pub position: Point,
}
