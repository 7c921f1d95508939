//! Plan input and validation
//!
//! A plan bundles a scenario, the roster it draws names from, the zone
//! assignment and a free-text note. Plans come from TOML files and
//! command-line overrides; everything is validated here so the layout
//! resolver only ever sees well-typed values.

use std::collections::BTreeMap;

use serde::Deserialize;
use toml::Spanned;

use crate::error::PlanError;
use crate::layout::{find_similar, Assignment, ScenarioKind, Zone};

/// Note used when a plan does not provide one
pub const DEFAULT_NOTE: &str = "Attack the ball at its highest point.";

/// Squad used when a plan does not list its own roster
const DEFAULT_SQUAD: [&str; 11] = [
    "Rodrigo", "João", "Pedro", "Tiago", "André", "Lucas", "Mateus", "Rui", "Simão", "Nuno",
    "Tomás",
];

/// Ordered list of unique player names available for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    /// Build a roster, rejecting blank, reserved and repeated names
    pub fn new<I, S>(names: I) -> Result<Self, PlanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_string();
            if name.is_empty() {
                return Err(PlanError::EmptyPlayerName);
            }
            if is_unassigned(&name) {
                return Err(PlanError::ReservedPlayerName { name });
            }
            if players.contains(&name) {
                return Err(PlanError::DuplicatePlayer { name });
            }
            players.push(name);
        }
        Ok(Self { players })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn suggest(&self, name: &str) -> Vec<String> {
        find_similar(self.iter(), name, 3)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            players: DEFAULT_SQUAD.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A validated set-piece plan
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    scenario: ScenarioKind,
    assignment: Assignment,
    note: String,
    roster: Roster,
}

impl Plan {
    /// Start an empty plan for a corner from the left
    pub fn new(roster: Roster) -> Self {
        Self {
            scenario: ScenarioKind::default(),
            assignment: Assignment::new(),
            note: DEFAULT_NOTE.to_string(),
            roster,
        }
    }

    pub fn scenario(&self) -> ScenarioKind {
        self.scenario
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn set_scenario(&mut self, scenario: ScenarioKind) {
        self.scenario = scenario;
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Select a roster player for a zone
    ///
    /// `"none"` or an empty selection leaves the zone unassigned. A second
    /// selection for the same zone replaces the first. Returns the player
    /// who held the zone before.
    pub fn assign(&mut self, zone: Zone, selection: &str) -> Result<Option<String>, PlanError> {
        let name = selection.trim();
        if is_unassigned(name) {
            return Ok(self.assignment.clear(zone));
        }
        if !self.roster.contains(name) {
            return Err(PlanError::UnknownPlayer {
                name: name.to_string(),
                zone,
                suggestions: self.roster.suggest(name),
                span: None,
            });
        }
        Ok(self.assignment.assign(zone, name))
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new(Roster::default())
    }
}

fn is_unassigned(selection: &str) -> bool {
    selection.is_empty() || selection.eq_ignore_ascii_case("none")
}

/// Raw plan as written in a TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    scenario: Option<Spanned<String>>,
    note: Option<String>,
    roster: Option<Vec<String>>,
    #[serde(default)]
    assignments: BTreeMap<Spanned<String>, Spanned<String>>,
}

impl PlanFile {
    /// Parse a plan from TOML source
    pub fn parse(source: &str) -> Result<Self, PlanError> {
        Ok(toml::from_str(source)?)
    }

    /// Validate the raw plan against the zone table and its roster
    pub fn into_plan(self) -> Result<Plan, PlanError> {
        let roster = match self.roster {
            Some(names) => Roster::new(names)?,
            None => Roster::default(),
        };
        let mut plan = Plan::new(roster);

        if let Some(scenario) = self.scenario {
            let span = scenario.span();
            let kind = scenario
                .get_ref()
                .parse::<ScenarioKind>()
                .map_err(|e| PlanError::from(e).with_span(span))?;
            plan.set_scenario(kind);
        }

        if let Some(note) = self.note {
            plan.set_note(note);
        }

        for (key, player) in self.assignments {
            let zone = key
                .get_ref()
                .parse::<Zone>()
                .map_err(|e| PlanError::from(e).with_span(key.span()))?;
            let span = player.span();
            plan.assign(zone, player.get_ref()).map_err(|e| e.with_span(span))?;
        }

        Ok(plan)
    }
}

/// Parse a `ZONE=PLAYER` override as given on the command line
pub fn parse_override(raw: &str) -> Result<(Zone, String), PlanError> {
    let (zone, player) = raw
        .split_once('=')
        .ok_or_else(|| PlanError::InvalidOverride {
            raw: raw.to_string(),
        })?;
    let zone = zone.parse::<Zone>()?;
    Ok((zone, player.trim().to_string()))
}
