//! Scenario files: a world fixture plus the planning steps to replay on it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use whiteboard::{Hex, MemoryWorld, Route, SideId, UnitId};

/// Replayable planning session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Side whose queue is replayed.
    pub side: SideId,
    pub world: MemoryWorld,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One planning command. Indices are queue positions at the time the step runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Move {
        unit: UnitId,
        route: Route,
    },
    Attack {
        unit: UnitId,
        target: Hex,
        #[serde(default)]
        weapon: u8,
        route: Route,
    },
    Recruit {
        unit_type: String,
        hex: Hex,
    },
    Recall {
        unit: UnitId,
        hex: Hex,
    },
    BumpEarlier {
        index: usize,
    },
    BumpLater {
        index: usize,
    },
    /// Validates the rest of the queue afterwards unless `validate` is false.
    Remove {
        index: usize,
        #[serde(default = "validate_after_remove")]
        validate: bool,
    },
    ExecuteNext,
    Execute {
        index: usize,
    },
    Validate,
    /// Removes a unit from the world, as if it died on another side's turn.
    Kill {
        unit: UnitId,
    },
    Dump,
}

fn validate_after_remove() -> bool {
    true
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("scenario side {side} has no team in the world")]
    UnknownSide { side: SideId },

    #[error("step {step}: no action at index {index} (queue holds {len})")]
    IndexOutOfRange { step: usize, index: usize, len: usize },
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario: Scenario =
            serde_json::from_str(&text).map_err(|source| ScenarioError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if scenario.world.team(scenario.side).is_none() {
            return Err(ScenarioError::UnknownSide {
                side: scenario.side,
            });
        }
        Ok(scenario)
    }
}
