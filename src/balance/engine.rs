//! # Balance engine
//! The whole engine state is a value. Every input event (new equation text, an item button,
//! a weight field edit, the reveal toggle) produces the next state through [`derive_state`];
//! [`BalanceEngine`] only keeps the latest one.
//!
//! Failures never escape: an equation without exactly one '=' empties both pans, unknown items
//! and non-integer weights are ignored.
//! ```
//! use RustedBalance::balance::config::EngineConfig;
//! use RustedBalance::balance::comparator::BalanceState;
//! use RustedBalance::balance::engine::BalanceEngine;
//! use RustedBalance::balance::ledger::Side;
//! let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
//! engine.set_equation("2x + 3 = 5");
//! assert_eq!(engine.snapshot().state(), BalanceState::Balanced);
//! engine.increment(Side::Left, "bag");
//! assert_eq!(engine.snapshot().state(), BalanceState::LeftHeavier);
//! ```
use crate::balance::comparator::{BalanceComparator, BalanceState, Weighing};
use crate::balance::config::{EngineConfig, RevealMode};
use crate::balance::ledger::{Direction, Side, UnitWeights, WeightedItemLedger};
use crate::errors::BalanceError;
use crate::symbolic::linear_solver::{LinearCoefficients, Solution, solve_equation};
use crate::symbolic::parse_equation::Equation;
use log::{debug, info, warn};
use regex::Regex;
use std::sync::LazyLock;

static INTEGER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("integer prefix pattern"));

/// read a weight field the way a number input does: leading whitespace, optional sign,
/// leading digit run ("12abc" -> 12). Anything else is [`BalanceError::InvalidWeight`]
pub fn parse_weight(raw: &str) -> Result<i64, BalanceError> {
    INTEGER_PREFIX
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .ok_or_else(|| BalanceError::InvalidWeight(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// the equation field changed; the text is re-evaluated from scratch
    EquationChanged(String),
    ItemDelta {
        side: Side,
        item: String,
        direction: Direction,
    },
    /// raw text of a weight field
    WeightOverride { item: String, raw: String },
    ToggleReveal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub equation_text: String,
    /// None while the text is not a valid equation
    pub equation: Option<Equation>,
    pub solution: Option<Solution>,
    pub ledger: WeightedItemLedger,
    pub weights: UnitWeights,
    pub revealed: bool,
}

impl EngineState {
    pub fn initial(config: &EngineConfig) -> Self {
        EngineState {
            equation_text: String::new(),
            equation: None,
            solution: None,
            ledger: WeightedItemLedger::new(&config.items),
            weights: config.unit_weights(),
            revealed: config.show_weights,
        }
    }
}

// pans mirror the equation: variable slot gets x coefficients, constant slot the constants,
// every other item type is emptied. The unknown's unit weight becomes the solution
fn mirror_equation(
    state: &mut EngineState,
    equation: &Equation,
    config: &EngineConfig,
) -> Result<Solution, BalanceError> {
    let c = LinearCoefficients::from_equation(equation);
    state.ledger.reset();
    state.ledger.set(Side::Left, &config.variable_item, c.a)?;
    state.ledger.set(Side::Left, &config.constant_item, c.b)?;
    state.ledger.set(Side::Right, &config.variable_item, c.c)?;
    state.ledger.set(Side::Right, &config.constant_item, c.d)?;
    let solution = solve_equation(equation);
    state.weights.set(&config.variable_item, solution.value)?;
    Ok(solution)
}

fn apply_equation(state: &mut EngineState, text: &str, config: &EngineConfig) {
    state.equation_text = text.to_string();
    let mirrored = Equation::parse(text).and_then(|equation| {
        let solution = mirror_equation(state, &equation, config)?;
        Ok((equation, solution))
    });
    match mirrored {
        Ok((equation, solution)) => {
            state.equation = Some(equation);
            state.solution = Some(solution);
        }
        Err(e) => {
            // typing passes through invalid text all the time
            debug!("{:?}: {}; pans emptied", text, e);
            state.ledger.reset();
            state.equation = None;
            state.solution = None;
        }
    }
}

/// next state after one event. Pure: `previous` is left untouched
pub fn derive_state(previous: &EngineState, event: &Event, config: &EngineConfig) -> EngineState {
    let mut next = previous.clone();
    match event {
        Event::EquationChanged(text) => apply_equation(&mut next, text, config),
        Event::ItemDelta {
            side,
            item,
            direction,
        } => {
            if let Err(e) = next.ledger.apply(*side, item, *direction) {
                warn!("{} {} on {} ignored: {}", direction, item, side, e);
            }
        }
        Event::WeightOverride { item, raw } => {
            match parse_weight(raw).and_then(|w| next.weights.set(item, w as f64)) {
                Ok(()) => info!("unit weight of {} set to {}", item, raw.trim()),
                Err(e) => debug!("weight override ignored: {}", e),
            }
        }
        Event::ToggleReveal => next.revealed = !next.revealed,
    }
    next
}

/// what the renderer needs to draw one item type on one pan:
/// `count` glyphs, drawn as negative items when the ledger count is below zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGlyphs {
    pub item: String,
    pub count: u64,
    pub negative: bool,
}

/// read-only view of the engine for the UI layer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub equation_text: String,
    /// parsed terms of both sides, None for invalid text
    pub equation: Option<Equation>,
    pub left: Vec<(String, i64)>,
    pub right: Vec<(String, i64)>,
    pub weighing: Weighing,
    pub solution: Option<Solution>,
    /// full unit weight table
    pub weights: Vec<(String, f64)>,
    /// the part of the table the weight panel shows right now
    pub visible_weights: Vec<(String, f64)>,
    pub reveal: RevealMode,
    pub revealed: bool,
}

impl Snapshot {
    pub fn build(state: &EngineState, config: &EngineConfig) -> Snapshot {
        let comparator = BalanceComparator::new(config.round_digits);
        let counts = |side: Side| {
            state
                .ledger
                .counts(side)
                .map(|(item, c)| (item.to_string(), c))
                .collect::<Vec<_>>()
        };
        let weights: Vec<(String, f64)> = state
            .weights
            .iter()
            .map(|(item, w)| (item.to_string(), w))
            .collect();
        let visible_weights = match (state.revealed, config.reveal) {
            (false, _) => Vec::new(),
            (true, RevealMode::UnitWeights) => weights.clone(),
            (true, RevealMode::SolvedUnknown) => weights
                .iter()
                .filter(|(item, _)| *item == config.variable_item)
                .cloned()
                .collect(),
        };
        Snapshot {
            equation_text: state.equation_text.clone(),
            equation: state.equation.clone(),
            left: counts(Side::Left),
            right: counts(Side::Right),
            weighing: comparator.weigh(&state.ledger, &state.weights),
            solution: state.solution,
            weights,
            visible_weights,
            reveal: config.reveal,
            revealed: state.revealed,
        }
    }

    pub fn state(&self) -> BalanceState {
        self.weighing.state
    }

    pub fn counts(&self, side: Side) -> &[(String, i64)] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn count(&self, side: Side, item: &str) -> Option<i64> {
        self.counts(side)
            .iter()
            .find(|(name, _)| name == item)
            .map(|(_, c)| *c)
    }

    pub fn glyphs(&self, side: Side) -> Vec<ItemGlyphs> {
        self.counts(side)
            .iter()
            .map(|(item, c)| ItemGlyphs {
                item: item.clone(),
                count: c.unsigned_abs(),
                negative: *c < 0,
            })
            .collect()
    }

    /// caption of the reveal toggle button
    pub fn reveal_label(&self) -> &'static str {
        match (self.reveal, self.revealed) {
            (RevealMode::UnitWeights, true) => "Hide Weights",
            (RevealMode::UnitWeights, false) => "Show Weights",
            (RevealMode::SolvedUnknown, true) => "Hide Answer",
            (RevealMode::SolvedUnknown, false) => "Show Answer",
        }
    }
}

/// holds the configuration and the latest state, one event at a time
#[derive(Debug, Clone)]
pub struct BalanceEngine {
    config: EngineConfig,
    state: EngineState,
}

impl BalanceEngine {
    pub fn new(config: EngineConfig) -> Result<Self, BalanceError> {
        config.validate()?;
        let state = EngineState::initial(&config);
        info!(
            "balance engine started: variant {}, items {:?}",
            config.variant, config.items
        );
        Ok(BalanceEngine { config, state })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn handle(&mut self, event: Event) -> &EngineState {
        self.state = derive_state(&self.state, &event, &self.config);
        &self.state
    }

    pub fn set_equation(&mut self, text: &str) -> &EngineState {
        self.handle(Event::EquationChanged(text.to_string()))
    }

    pub fn increment(&mut self, side: Side, item: &str) -> &EngineState {
        self.handle(Event::ItemDelta {
            side,
            item: item.to_string(),
            direction: Direction::Increment,
        })
    }

    pub fn decrement(&mut self, side: Side, item: &str) -> &EngineState {
        self.handle(Event::ItemDelta {
            side,
            item: item.to_string(),
            direction: Direction::Decrement,
        })
    }

    pub fn override_weight(&mut self, item: &str, raw: &str) -> &EngineState {
        self.handle(Event::WeightOverride {
            item: item.to_string(),
            raw: raw.to_string(),
        })
    }

    pub fn toggle_reveal(&mut self) -> &EngineState {
        self.handle(Event::ToggleReveal)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::build(&self.state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::config::Variant;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("7").unwrap(), 7);
        assert_eq!(parse_weight("  -3").unwrap(), -3);
        assert_eq!(parse_weight("+12abc").unwrap(), 12);
        assert!(parse_weight("abc").is_err());
        assert!(parse_weight("").is_err());
        assert!(parse_weight("- 3").is_err());
        assert!(parse_weight("99999999999999999999").is_err());
    }

    #[test]
    fn test_derive_state_is_pure() {
        let config = EngineConfig::default();
        let initial = EngineState::initial(&config);
        let next = derive_state(&initial, &Event::EquationChanged("2x+3=5".to_string()), &config);
        assert_eq!(initial, EngineState::initial(&config));
        assert_eq!(next.ledger.count(Side::Left, "box"), Some(2));
        assert_eq!(next.equation_text, "2x+3=5");
    }

    #[test]
    fn test_equation_mirrors_into_pans() {
        let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
        let state = engine.set_equation("2x+3=5");
        assert_eq!(state.ledger.count(Side::Left, "box"), Some(2));
        assert_eq!(state.ledger.count(Side::Left, "bag"), Some(3));
        assert_eq!(state.ledger.count(Side::Right, "box"), Some(0));
        assert_eq!(state.ledger.count(Side::Right, "bag"), Some(5));
        assert_relative_eq!(state.weights.get("box").unwrap(), 1.0, epsilon = 1e-12);
        assert_eq!(engine.snapshot().state(), BalanceState::Balanced);
    }

    #[test]
    fn test_invalid_equation_resets_counts_keeps_weight() {
        let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
        engine.set_equation("4x=8");
        let state = engine.set_equation("4x=8=");
        assert!(state.ledger.is_empty());
        assert!(state.equation.is_none());
        assert!(state.solution.is_none());
        assert_relative_eq!(state.weights.get("box").unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_item_buttons() {
        let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
        engine.decrement(Side::Right, "bag");
        engine.decrement(Side::Right, "bag");
        engine.increment(Side::Left, "box");
        let snap = engine.snapshot();
        assert_eq!(snap.count(Side::Right, "bag"), Some(-2));
        assert_eq!(snap.weighing.right_total, -2.0);
        assert_eq!(snap.state(), BalanceState::LeftHeavier);
        // unknown item type is ignored
        let before = engine.state().clone();
        engine.increment(Side::Left, "cylinder");
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_weight_override() {
        let mut engine = BalanceEngine::new(EngineConfig::preset(Variant::ThreeItems)).unwrap();
        engine.override_weight("cylinder", "5");
        assert_eq!(engine.state().weights.get("cylinder"), Some(5.0));
        engine.override_weight("cylinder", "heavy");
        assert_eq!(engine.state().weights.get("cylinder"), Some(5.0));
        engine.override_weight("sphere", "2");
        assert_eq!(engine.state().weights.get("sphere"), None);
    }

    #[test]
    fn test_equation_overwrites_overridden_unknown_weight() {
        let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
        engine.override_weight("box", "9");
        engine.set_equation("x=4");
        assert_relative_eq!(engine.state().weights.get("box").unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_three_items_equation_empties_extra_items() {
        let mut engine = BalanceEngine::new(EngineConfig::preset(Variant::ThreeItems)).unwrap();
        engine.increment(Side::Left, "cylinder");
        engine.set_equation("x+1=3");
        assert_eq!(engine.state().ledger.count(Side::Left, "cylinder"), Some(0));
        assert_eq!(engine.snapshot().state(), BalanceState::Balanced);
    }

    #[test]
    fn test_glyphs() {
        let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
        engine.set_equation("-2x=3");
        let glyphs = engine.snapshot().glyphs(Side::Left);
        assert_eq!(
            glyphs,
            vec![
                ItemGlyphs { item: "box".to_string(), count: 2, negative: true },
                ItemGlyphs { item: "bag".to_string(), count: 0, negative: false },
            ]
        );
    }

    #[test]
    fn test_reveal_modes() {
        let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
        engine.set_equation("3x=6");
        let snap = engine.snapshot();
        assert!(snap.visible_weights.is_empty());
        assert_eq!(snap.reveal_label(), "Show Answer");
        engine.toggle_reveal();
        let snap = engine.snapshot();
        assert_eq!(snap.visible_weights, vec![("box".to_string(), 2.0)]);
        assert_eq!(snap.reveal_label(), "Hide Answer");

        let mut engine = BalanceEngine::new(EngineConfig::preset(Variant::ThreeItems)).unwrap();
        assert_eq!(engine.snapshot().visible_weights.len(), 3);
        assert_eq!(engine.snapshot().reveal_label(), "Hide Weights");
        engine.toggle_reveal();
        assert!(engine.snapshot().visible_weights.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.variable_item = "sphere".to_string();
        assert!(BalanceEngine::new(config).is_err());
    }
}
