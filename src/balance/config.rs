//! Engine configuration. The two scale variants (three item types with a weight table,
//! two item types with a hidden answer) are presets of the same engine.
//!
//! A TOML document selects a preset with `variant` and may override any field:
//! ```toml
//! variant = "three_items"
//! items = ["box", "bag", "cylinder"]
//! variable_item = "box"
//! constant_item = "bag"
//! reveal = "unit_weights"
//! show_weights = true
//! round_digits = 10
//! log_level = "info"
//! log_file = "auto"
//!
//! [weights]
//! cylinder = 3
//! ```
use crate::balance::ledger::UnitWeights;
use crate::errors::BalanceError;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use toml::{Table, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Variant {
    ThreeItems,
    TwoItems,
}

/// what the weight panel may show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum RevealMode {
    /// the whole unit weight table, editable
    UnitWeights,
    /// only the solved value of the unknown
    SolvedUnknown,
}

const KNOWN_KEYS: [&str; 11] = [
    "variant",
    "items",
    "variable_item",
    "constant_item",
    "weights",
    "reveal",
    "show_weights",
    "round_digits",
    "log_level",
    "log_file",
    "default_weight",
];

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub variant: Variant,
    /// item types in display order
    pub items: Vec<String>,
    /// item that stands for the unknown x; its unit weight is the solution
    pub variable_item: String,
    /// item that stands for a unit constant
    pub constant_item: String,
    pub weights: Vec<(String, f64)>,
    pub reveal: RevealMode,
    /// weight panel (or answer) visible before the first toggle
    pub show_weights: bool,
    /// decimal digits totals are rounded to before comparison
    pub round_digits: Option<u32>,
    /// weight given to items that are added without an explicit weight
    pub default_weight: f64,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::preset(Variant::TwoItems)
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl EngineConfig {
    pub fn preset(variant: Variant) -> Self {
        match variant {
            Variant::ThreeItems => EngineConfig {
                variant,
                items: owned(&["box", "bag", "cylinder"]),
                variable_item: "box".to_string(),
                constant_item: "bag".to_string(),
                weights: vec![
                    ("box".to_string(), 1.0),
                    ("bag".to_string(), 1.0),
                    ("cylinder".to_string(), 3.0),
                ],
                reveal: RevealMode::UnitWeights,
                show_weights: true,
                round_digits: None,
                default_weight: 1.0,
                log_level: None,
                log_file: None,
            },
            Variant::TwoItems => EngineConfig {
                variant,
                items: owned(&["box", "bag"]),
                variable_item: "box".to_string(),
                constant_item: "bag".to_string(),
                weights: vec![("box".to_string(), 1.0), ("bag".to_string(), 1.0)],
                reveal: RevealMode::SolvedUnknown,
                show_weights: false,
                round_digits: Some(10),
                default_weight: 1.0,
                log_level: None,
                log_file: None,
            },
        }
    }

    pub fn unit_weights(&self) -> UnitWeights {
        UnitWeights::new(self.weights.clone())
    }

    pub fn validate(&self) -> Result<(), BalanceError> {
        if self.items.is_empty() {
            return Err(BalanceError::Config("no item types".to_string()));
        }
        for (i, item) in self.items.iter().enumerate() {
            if item.is_empty() {
                return Err(BalanceError::Config("empty item type name".to_string()));
            }
            if self.items[..i].contains(item) {
                return Err(BalanceError::Config(format!("duplicate item type {}", item)));
            }
            if !self.weights.iter().any(|(name, _)| name == item) {
                return Err(BalanceError::Config(format!("no unit weight for {}", item)));
            }
        }
        for slot in [&self.variable_item, &self.constant_item] {
            if !self.items.contains(slot) {
                return Err(BalanceError::Config(format!(
                    "{} is not among the item types {:?}",
                    slot, self.items
                )));
            }
        }
        if self.variable_item == self.constant_item {
            return Err(BalanceError::Config(
                "variable_item and constant_item must differ".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(text: &str) -> Result<Self, BalanceError> {
        let table: Table = text.parse()?;
        if let Some(key) = table.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            return Err(BalanceError::Config(format!("unknown key {}", key)));
        }

        let variant = match get_str(&table, "variant")? {
            Some(name) => Variant::from_str(&name)
                .map_err(|_| BalanceError::Config(format!("unknown variant {}", name)))?,
            None => Variant::TwoItems,
        };
        let mut config = EngineConfig::preset(variant);

        if let Some(w) = get_number(&table, "default_weight")? {
            config.default_weight = w;
        }
        if let Some(value) = table.get("items") {
            let items = value
                .as_array()
                .ok_or_else(|| type_error("items", "an array of strings"))?
                .iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()
                .ok_or_else(|| type_error("items", "an array of strings"))?;
            // keep preset weights of surviving items
            config.weights = items
                .iter()
                .map(|item| {
                    let w = config
                        .weights
                        .iter()
                        .find(|(name, _)| name == item)
                        .map_or(config.default_weight, |(_, w)| *w);
                    (item.clone(), w)
                })
                .collect();
            config.items = items;
        }
        if let Some(item) = get_str(&table, "variable_item")? {
            config.variable_item = item;
        }
        if let Some(item) = get_str(&table, "constant_item")? {
            config.constant_item = item;
        }
        if let Some(value) = table.get("weights") {
            let weights = value
                .as_table()
                .ok_or_else(|| type_error("weights", "a table"))?;
            for (item, w) in weights {
                let w = value_as_number(w).ok_or_else(|| type_error(item, "a number"))?;
                match config.weights.iter_mut().find(|(name, _)| name == item) {
                    Some(entry) => entry.1 = w,
                    None => {
                        return Err(BalanceError::Config(format!(
                            "weight given for unknown item type {}",
                            item
                        )));
                    }
                }
            }
        }
        if let Some(mode) = get_str(&table, "reveal")? {
            config.reveal = RevealMode::from_str(&mode)
                .map_err(|_| BalanceError::Config(format!("unknown reveal mode {}", mode)))?;
        }
        if let Some(value) = table.get("show_weights") {
            config.show_weights = value
                .as_bool()
                .ok_or_else(|| type_error("show_weights", "a boolean"))?;
        }
        if let Some(value) = table.get("round_digits") {
            config.round_digits = match value {
                Value::Boolean(false) => None,
                Value::Integer(d) if (0..=17).contains(d) => Some(*d as u32),
                _ => return Err(type_error("round_digits", "an integer 0..=17 or false")),
            };
        }
        config.log_level = get_str(&table, "log_level")?;
        config.log_file = get_str(&table, "log_file")?;

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BalanceError> {
        let text = fs::read_to_string(path)?;
        EngineConfig::from_toml_str(&text)
    }
}

fn type_error(key: &str, expected: &str) -> BalanceError {
    BalanceError::Config(format!("{} must be {}", key, expected))
}

fn get_str(table: &Table, key: &str) -> Result<Option<String>, BalanceError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(type_error(key, "a string")),
    }
}

fn value_as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

fn get_number(table: &Table, key: &str) -> Result<Option<f64>, BalanceError> {
    match table.get(key) {
        None => Ok(None),
        Some(v) => value_as_number(v)
            .map(Some)
            .ok_or_else(|| type_error(key, "a number")),
    }
}
