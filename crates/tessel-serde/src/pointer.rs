//! Pointer rule files.
//!
//! ```json
//! {
//!   "rules": [
//!     {"type": "rotation", "current_state": 0, "next_state": 1, "angle": 90},
//!     {"type": "face", "current_state": 1, "next_state": null, "direction": 180},
//!     {"type": "movement", "current_state": 1, "next_state": 0, "x": 2, "y": 0, "relative": true},
//!     {"type": "clone", "current_state": 0, "next_state": null, "x": 0, "y": 0}
//!   ],
//!   "state_colors": {"0": "#ffffff", "1": "#808080"}
//! }
//! ```

use crate::error::SerdeError;
use crate::rules::parse_color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tessel_automata::{Heading, PointerAction, PointerRule, State, StateColors};

/// Turns a rotation rule may make.
pub const ROTATION_ANGLES: [i32; 6] = [-180, -90, -45, 45, 90, 180];

/// Headings a face rule may set.
pub const FACE_DIRECTIONS: [i32; 4] = [0, 90, 180, 270];

/// On-disk form of a pointer rule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerRuleFile {
    /// Rules in evaluation order.
    pub rules: Vec<PointerRuleRecord>,
    /// `#RRGGBB` color per state, keyed by the state as a string.
    pub state_colors: BTreeMap<String, String>,
}

/// On-disk form of a pointer rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerRuleRecord {
    /// Relative turn.
    Rotation {
        /// State the rule applies to.
        current_state: State,
        /// State written, if any.
        next_state: Option<State>,
        /// Turn in degrees.
        angle: i32,
    },
    /// Absolute heading.
    Face {
        /// State the rule applies to.
        current_state: State,
        /// State written, if any.
        next_state: Option<State>,
        /// New heading in degrees.
        direction: i32,
    },
    /// Jump.
    Movement {
        /// State the rule applies to.
        current_state: State,
        /// State written, if any.
        next_state: Option<State>,
        /// Column offset or target column.
        x: i32,
        /// Row offset or target row.
        y: i32,
        /// Offsets are relative to the pointer.
        #[serde(default = "relative_default")]
        relative: bool,
    },
    /// Spawn a pointer.
    Clone {
        /// State the rule applies to.
        current_state: State,
        /// State written, if any.
        next_state: Option<State>,
        /// Column offset or target column.
        x: i32,
        /// Row offset or target row.
        y: i32,
        /// Offsets are relative to the pointer.
        #[serde(default = "relative_default")]
        relative: bool,
    },
}

fn relative_default() -> bool {
    true
}

impl PointerRuleRecord {
    fn to_rule(&self) -> Result<PointerRule, SerdeError> {
        let rule = match *self {
            PointerRuleRecord::Rotation {
                current_state,
                next_state,
                angle,
            } => {
                if !ROTATION_ANGLES.contains(&angle) {
                    return Err(SerdeError::Schema(format!("invalid rotation angle {angle}")));
                }
                PointerRule::new(current_state, next_state, PointerAction::Rotation { angle })
            }
            PointerRuleRecord::Face {
                current_state,
                next_state,
                direction,
            } => {
                if !FACE_DIRECTIONS.contains(&direction) {
                    return Err(SerdeError::Schema(format!("invalid face direction {direction}")));
                }
                let heading = Heading::new(direction);
                PointerRule::new(current_state, next_state, PointerAction::Face { heading })
            }
            PointerRuleRecord::Movement {
                current_state,
                next_state,
                x,
                y,
                relative,
            } => PointerRule::new(
                current_state,
                next_state,
                PointerAction::Movement { dx: x, dy: y, relative },
            ),
            PointerRuleRecord::Clone {
                current_state,
                next_state,
                x,
                y,
                relative,
            } => PointerRule::new(
                current_state,
                next_state,
                PointerAction::Clone { dx: x, dy: y, relative },
            ),
        };
        Ok(rule)
    }

    fn from_rule(rule: &PointerRule) -> Self {
        let current_state = rule.current_state;
        let next_state = rule.next_state;
        match rule.action {
            PointerAction::Rotation { angle } => PointerRuleRecord::Rotation {
                current_state,
                next_state,
                angle,
            },
            PointerAction::Face { heading } => PointerRuleRecord::Face {
                current_state,
                next_state,
                direction: i32::from(heading.degrees()),
            },
            PointerAction::Movement { dx, dy, relative } => PointerRuleRecord::Movement {
                current_state,
                next_state,
                x: dx,
                y: dy,
                relative,
            },
            PointerAction::Clone { dx, dy, relative } => PointerRuleRecord::Clone {
                current_state,
                next_state,
                x: dx,
                y: dy,
                relative,
            },
        }
    }
}

/// Parses a pointer rule file into rules and state colors.
pub fn parse_pointer_rules(bytes: &[u8]) -> Result<(Vec<PointerRule>, StateColors), SerdeError> {
    let file: PointerRuleFile = serde_json::from_slice(bytes)?;
    if file.rules.is_empty() {
        return Err(SerdeError::NoRules);
    }

    let rules = file
        .rules
        .iter()
        .map(PointerRuleRecord::to_rule)
        .collect::<Result<Vec<_>, _>>()?;

    let mut colors = StateColors::new();
    for (key, color) in &file.state_colors {
        let state: State = key
            .trim()
            .parse()
            .map_err(|_| SerdeError::Schema(format!("invalid state key {key:?}")))?;
        colors.insert(state, parse_color(color)?);
    }
    Ok((rules, colors))
}

/// Writes pointer rules and colors as a pointer rule file.
pub fn pointer_rules_to_json(
    rules: &[PointerRule],
    colors: &StateColors,
    pretty: bool,
) -> Result<Vec<u8>, SerdeError> {
    let file = PointerRuleFile {
        rules: rules.iter().map(PointerRuleRecord::from_rule).collect(),
        state_colors: colors
            .iter()
            .map(|(state, color)| (state.to_string(), color.to_string()))
            .collect(),
    };
    let bytes = if pretty {
        serde_json::to_vec_pretty(&file)?
    } else {
        serde_json::to_vec(&file)?
    };
    Ok(bytes)
}
