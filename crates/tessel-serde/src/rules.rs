//! Neighborhood rule files.
//!
//! A rule file is a JSON array of rules:
//!
//! ```json
//! [
//!   {
//!     "current_state": 0,
//!     "conditions": [{"neighbor_state": 1, "operator": "=", "count": 3}],
//!     "next_state": 1,
//!     "color": "#808080"
//!   }
//! ]
//! ```
//!
//! The state colors are taken from each rule's `next_state` and `color`.

use crate::error::SerdeError;
use serde::{Deserialize, Serialize};
use tessel_automata::{Condition, Operator, Rgb, Rule, RuleSet, State, StateColors};

/// On-disk form of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// State the cell must be in.
    pub current_state: State,
    /// Conditions, all of which must hold.
    pub conditions: Vec<ConditionRecord>,
    /// State written when the rule fires.
    pub next_state: State,
    /// `#RRGGBB` color of `next_state`.
    pub color: String,
}

/// On-disk form of a condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRecord {
    /// State whose neighbors are counted.
    pub neighbor_state: State,
    /// One of `=`, `!=`, `<`, `<=`, `>`, `>=`.
    pub operator: String,
    /// Right-hand side of the comparison.
    pub count: u32,
}

impl RuleRecord {
    fn to_rule(&self) -> Result<Rule, SerdeError> {
        let conditions = self
            .conditions
            .iter()
            .map(|condition| {
                let operator: Operator = condition
                    .operator
                    .parse()
                    .map_err(|err| SerdeError::Schema(format!("{err}")))?;
                Ok(Condition::new(condition.neighbor_state, operator, condition.count))
            })
            .collect::<Result<Vec<_>, SerdeError>>()?;
        Ok(Rule::new(
            self.current_state,
            conditions,
            self.next_state,
            parse_color(&self.color)?,
        ))
    }

    fn from_rule(rule: &Rule) -> Self {
        Self {
            current_state: rule.current_state,
            conditions: rule
                .conditions
                .iter()
                .map(|condition| ConditionRecord {
                    neighbor_state: condition.neighbor_state,
                    operator: condition.operator.symbol().to_string(),
                    count: condition.count,
                })
                .collect(),
            next_state: rule.next_state,
            color: rule.color.to_string(),
        }
    }
}

pub(crate) fn parse_color(text: &str) -> Result<Rgb, SerdeError> {
    text.parse()
        .map_err(|err| SerdeError::Schema(format!("{err}")))
}

/// Parses a neighborhood rule file into a rule set.
///
/// Fails on malformed JSON, a non-array document, missing keys, unknown
/// operators, bad colors and empty rule lists. Rules referencing states that
/// no rule produces have those references reset to 0.
pub fn parse_neighborhood_rules(bytes: &[u8]) -> Result<RuleSet, SerdeError> {
    let records: Vec<RuleRecord> = serde_json::from_slice(bytes)?;
    if records.is_empty() {
        return Err(SerdeError::NoRules);
    }

    let rules = records
        .iter()
        .map(RuleRecord::to_rule)
        .collect::<Result<Vec<_>, _>>()?;
    let colors: StateColors = rules.iter().map(|rule| (rule.next_state, rule.color)).collect();

    let mut ruleset = RuleSet::new();
    ruleset.change_rules(rules, colors)?;
    Ok(ruleset)
}

/// Writes a rule set as a neighborhood rule file.
pub fn neighborhood_rules_to_json(ruleset: &RuleSet, pretty: bool) -> Result<Vec<u8>, SerdeError> {
    let records: Vec<RuleRecord> = ruleset.rules().iter().map(RuleRecord::from_rule).collect();
    let bytes = if pretty {
        serde_json::to_vec_pretty(&records)?
    } else {
        serde_json::to_vec(&records)?
    };
    Ok(bytes)
}
