//! the balance scale: two pans of weighted items, their comparison, and the engine that
//! keeps them in sync with the typed equation
/// item counts per side and unit weights per item type
pub mod ledger;
/// total weights and the tri-state balance
pub mod comparator;
/// engine configuration and the two scale variants
pub mod config;
///________________________________________________________________________________________________________________________________
/// # Balance engine
///# Example
/// ```
/// use RustedBalance::balance::config::EngineConfig;
/// use RustedBalance::balance::engine::BalanceEngine;
/// use RustedBalance::balance::ledger::Side;
/// let mut engine = BalanceEngine::new(EngineConfig::default()).unwrap();
/// engine.set_equation("x + 2 = 5");
/// assert_eq!(engine.snapshot().count(Side::Right, "bag"), Some(5));
/// ```
pub mod engine;
mod engine_tests;
