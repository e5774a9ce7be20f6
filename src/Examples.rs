//! examples of usage of RustedBalance
/// parsing, solving and both scale variants, plus an interactive stdin session
pub mod balance_examples;
