//! Text summary shown next to the diagram

use std::fmt;

use crate::layout::{PlacedPlayer, ScenarioKind, Zone};

/// Hint shown when no zone has a player yet
pub const EMPTY_HINT: &str = "Assign players to zones to see them on the pitch.";

/// Scenario, who goes where, the coaching note and any notices
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub scenario: ScenarioKind,
    /// (player, zone) in zone order
    pub entries: Vec<(String, Zone)>,
    pub note: String,
    pub notices: Vec<String>,
}

impl PlanSummary {
    pub fn new(scenario: ScenarioKind, placed: &[PlacedPlayer], note: impl Into<String>) -> Self {
        Self {
            scenario,
            entries: placed.iter().map(|p| (p.name.clone(), p.zone)).collect(),
            note: note.into(),
            notices: vec![],
        }
    }

    /// Attach an informational notice
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notices.push(notice.into());
        self
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Set piece: {}", self.scenario.label())?;
        if self.entries.is_empty() {
            writeln!(f, "{}", EMPTY_HINT)?;
        } else {
            writeln!(f, "Players:")?;
            for (player, zone) in &self.entries {
                writeln!(f, "- {}: {}", player, zone.label())?;
            }
        }
        write!(f, "Instruction: {}", self.note)?;
        for notice in &self.notices {
            write!(f, "\nNotice: {}", notice)?;
        }
        Ok(())
    }
}
