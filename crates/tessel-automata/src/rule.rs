//! Transition rules for neighborhood automata.
//!
//! A [`RuleSet`] is an ordered list of [`Rule`]s plus the color of every
//! declared state. Rules are tried in insertion order and the first one whose
//! current state and conditions match decides the next state; when nothing
//! matches the cell keeps its state.

use crate::error::AutomataError;
use crate::state::{BACKGROUND, Rgb, State, StateColors, default_state_colors};
use log::{info, warn};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Comparison between a neighbor count and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Operator {
    /// Evaluates `lhs <op> rhs`.
    pub fn compare(self, lhs: u32, rhs: u32) -> bool {
        match self {
            Operator::Eq => lhs == rhs,
            Operator::Ne => lhs != rhs,
            Operator::Lt => lhs < rhs,
            Operator::Le => lhs <= rhs,
            Operator::Gt => lhs > rhs,
            Operator::Ge => lhs >= rhs,
        }
    }

    /// Returns the operator's symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }
}

/// Error returned for an unknown operator symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperatorError(pub String);

impl fmt::Display for ParseOperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operator {:?}", self.0)
    }
}

impl std::error::Error for ParseOperatorError {}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Operator::Eq),
            "!=" => Ok(Operator::Ne),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            _ => Err(ParseOperatorError(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single neighbor-count test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Condition {
    /// State whose neighbors are counted.
    pub neighbor_state: State,
    /// Comparison applied to the count.
    pub operator: Operator,
    /// Right-hand side of the comparison.
    pub count: u32,
}

impl Condition {
    /// Creates a condition.
    pub fn new(neighbor_state: State, operator: Operator, count: u32) -> Self {
        Self {
            neighbor_state,
            operator,
            count,
        }
    }

    /// Tests the condition against a neighbor count.
    pub fn holds(&self, neighbors: u32) -> bool {
        self.operator.compare(neighbors, self.count)
    }
}

/// A transition from `current_state` to `next_state` when every condition holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// State the cell must be in.
    pub current_state: State,
    /// Conditions, all of which must hold.
    pub conditions: Vec<Condition>,
    /// State written when the rule fires.
    pub next_state: State,
    /// Display color of `next_state`.
    pub color: Rgb,
}

impl Rule {
    /// Creates a rule.
    pub fn new(current_state: State, conditions: Vec<Condition>, next_state: State, color: Rgb) -> Self {
        Self {
            current_state,
            conditions,
            next_state,
            color,
        }
    }

    /// Returns true if the rule fires for a cell in `state`.
    ///
    /// States missing from `neighbor_counts` count as zero neighbors.
    pub fn applies_to(&self, state: State, neighbor_counts: &HashMap<State, u32>) -> bool {
        self.current_state == state
            && self.conditions.iter().all(|condition| {
                let count = neighbor_counts
                    .get(&condition.neighbor_state)
                    .copied()
                    .unwrap_or(0);
                condition.holds(count)
            })
    }
}

/// Ordered transition rules and state colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    colors: StateColors,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet {
    /// Creates an empty rule set with the default colors.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            colors: default_state_colors(),
        }
    }

    /// Creates Conway's Game of Life (B3/S23).
    pub fn game_of_life() -> Self {
        let mut ruleset = Self::new();
        ruleset.set_default_rules();
        ruleset
    }

    /// Replaces the rules with Conway's Game of Life.
    pub fn set_default_rules(&mut self) {
        self.rules = vec![
            Rule::new(1, vec![Condition::new(1, Operator::Lt, 2)], 0, Rgb::WHITE),
            Rule::new(1, vec![Condition::new(1, Operator::Gt, 3)], 0, Rgb::WHITE),
            Rule::new(0, vec![Condition::new(1, Operator::Eq, 3)], 1, Rgb::GRAY),
        ];
        self.colors = default_state_colors();
    }

    /// Appends a rule and records the color of its next state.
    pub fn add_rule(&mut self, rule: Rule) {
        self.colors.insert(rule.next_state, rule.color);
        self.rules.push(rule);
    }

    /// Replaces the rules and colors.
    ///
    /// An empty rule list is rejected and the current rules are kept. Rules
    /// that reference undeclared states (neither a key of `colors` nor 0) have
    /// those references reset to 0.
    pub fn change_rules(&mut self, rules: Vec<Rule>, colors: StateColors) -> Result<(), AutomataError> {
        if rules.is_empty() {
            return Err(AutomataError::NoRules);
        }

        let mut declared = colors;
        declared.entry(BACKGROUND).or_insert(Rgb::WHITE);

        self.rules.clear();
        self.colors = declared.clone();
        for mut rule in rules {
            if !declared.contains_key(&rule.next_state) {
                warn!(
                    "rule for state {} produces undeclared state {}, using 0",
                    rule.current_state, rule.next_state
                );
                rule.next_state = BACKGROUND;
            }
            for condition in &mut rule.conditions {
                if !declared.contains_key(&condition.neighbor_state) {
                    warn!(
                        "rule for state {} counts undeclared state {}, using 0",
                        rule.current_state, condition.neighbor_state
                    );
                    condition.neighbor_state = BACKGROUND;
                }
            }
            self.add_rule(rule);
        }

        info!(
            "rule set changed: {} rules, {} states",
            self.rules.len(),
            self.colors.len()
        );
        Ok(())
    }

    /// Returns the next state of a cell.
    pub fn apply_rules(&self, state: State, neighbor_counts: &HashMap<State, u32>) -> State {
        self.rules
            .iter()
            .find(|rule| rule.applies_to(state, neighbor_counts))
            .map(|rule| rule.next_state)
            .unwrap_or(state)
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the color of every declared state.
    pub fn state_colors(&self) -> &StateColors {
        &self.colors
    }

    /// Returns the color of a state, white if undeclared.
    pub fn color(&self, state: State) -> Rgb {
        self.colors.get(&state).copied().unwrap_or(Rgb::WHITE)
    }

    /// Returns the number of declared states.
    pub fn num_states(&self) -> usize {
        self.colors.len()
    }

    /// Returns the highest declared state.
    pub fn max_state(&self) -> State {
        self.colors.keys().next_back().copied().unwrap_or(BACKGROUND)
    }

    /// Returns the states whose neighbors must be counted, always including 0.
    pub fn counted_states(&self) -> BTreeSet<State> {
        let mut states: BTreeSet<State> = self
            .rules
            .iter()
            .flat_map(|rule| rule.conditions.iter().map(|c| c.neighbor_state))
            .collect();
        states.insert(BACKGROUND);
        states
    }

    /// Returns declared non-background states that no rule produces.
    ///
    /// Such states can only appear by painting cells.
    pub fn unproduced_states(&self) -> Vec<State> {
        let produced: BTreeSet<State> = self.rules.iter().map(|rule| rule.next_state).collect();
        self.colors
            .keys()
            .copied()
            .filter(|state| *state != BACKGROUND && !produced.contains(state))
            .collect()
    }

    /// Returns true if a background cell surrounded only by background stays
    /// background.
    ///
    /// Every background neighbor count from 0 to `max_neighbors` is checked,
    /// covering cells whose neighborhood is cut off by a clamped edge.
    pub fn is_quiescent(&self, max_neighbors: usize) -> bool {
        let mut counts = HashMap::with_capacity(1);
        (0..=max_neighbors as u32).all(|n| {
            counts.insert(BACKGROUND, n);
            self.apply_rules(BACKGROUND, &counts) == BACKGROUND
        })
    }
}
