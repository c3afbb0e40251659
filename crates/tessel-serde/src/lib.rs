//! File formats for tessel automata.
//!
//! This crate reads and writes everything an automaton session persists:
//!
//! - neighborhood rule files ([`parse_neighborhood_rules`]), a JSON list of
//!   rules with conditions and colors
//! - pointer rule files ([`parse_pointer_rules`]), tagged actions plus a
//!   state color table
//! - saved grids ([`GridState`]) in JSON or bincode via [`GridFormat`]
//! - named presets in a directory ([`PresetStore`])
//! - engine configuration documents ([`load_config`])
//!
//! Every loader decodes and validates its input completely before it touches
//! an engine, so a failed load leaves the session as it was.
//!
//! # Example
//!
//! ```
//! use tessel_automata::{GridAutomaton, GridConfig, NeighborhoodConfig, NeighborhoodEngine};
//! use tessel_serde::{BincodeFormat, export_grid_state, load_grid_state, parse_neighborhood_rules};
//!
//! let rules = parse_neighborhood_rules(br##"[
//!     {"current_state": 1, "conditions": [{"neighbor_state": 1, "operator": "<", "count": 2}], "next_state": 0, "color": "#ffffff"},
//!     {"current_state": 1, "conditions": [{"neighbor_state": 1, "operator": ">", "count": 3}], "next_state": 0, "color": "#ffffff"},
//!     {"current_state": 0, "conditions": [{"neighbor_state": 1, "operator": "=", "count": 3}], "next_state": 1, "color": "#808080"}
//! ]"##)?;
//!
//! let config = NeighborhoodConfig::new(GridConfig::new(8, 8));
//! let mut life = NeighborhoodEngine::new(config, rules.clone())?;
//! life.set_cell(3, 2, 1);
//! life.set_cell(3, 3, 1);
//! life.set_cell(3, 4, 1);
//! life.step();
//!
//! let saved = export_grid_state(&life, &BincodeFormat::new())?;
//! let mut copy = NeighborhoodEngine::new(config, rules)?;
//! load_grid_state(&mut copy, &saved, &BincodeFormat::new())?;
//! assert_eq!(copy.grid(), life.grid());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bincode;
mod config;
mod error;
mod format;
mod json;
mod pointer;
mod preset;
mod rules;
mod snapshot;

pub use crate::bincode::BincodeFormat;
pub use crate::config::{load_config, load_config_file};
pub use crate::error::{ErrorKind, SerdeError};
pub use crate::format::GridFormat;
pub use crate::json::JsonFormat;
pub use crate::pointer::{
    FACE_DIRECTIONS, PointerRuleFile, PointerRuleRecord, ROTATION_ANGLES, parse_pointer_rules,
    pointer_rules_to_json,
};
pub use crate::preset::{INVALID_NAME_CHARS, MAX_PRESET_NAME_LEN, PresetStore};
pub use crate::rules::{
    ConditionRecord, RuleRecord, neighborhood_rules_to_json, parse_neighborhood_rules,
};
pub use crate::snapshot::{GridState, export_grid_state, load_grid_state};
