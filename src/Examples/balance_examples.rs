// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::weight_table::render_snapshot;
use crate::balance::config::{EngineConfig, Variant};
use crate::balance::engine::BalanceEngine;
use crate::balance::ledger::{Direction, Side};
use crate::errors::BalanceError;
use crate::symbolic::linear_solver::solve_equation;
use crate::symbolic::parse_equation::Equation;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// one line of the interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Equation(String),
    Item(Direction, Side, String),
    Weight(String, String),
    Toggle,
    Show,
    Quit,
}

/// eq <text> | + <side> <item> | - <side> <item> | w <item> <value> | toggle | show | quit
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match head {
        "eq" => Some(Command::Equation(rest.to_string())),
        "+" | "-" => {
            let direction = Direction::from_str(head).ok()?;
            let (side, item) = rest.split_once(char::is_whitespace)?;
            let side = Side::from_str(side).ok()?;
            Some(Command::Item(direction, side, item.trim().to_string()))
        }
        "w" => {
            let (item, value) = rest.split_once(char::is_whitespace)?;
            Some(Command::Weight(item.to_string(), value.trim().to_string()))
        }
        "toggle" => Some(Command::Toggle),
        "show" => Some(Command::Show),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// feed commands from `input` to an engine, print the scale after each one to `output`
pub fn run_session<R: BufRead, W: Write>(
    config: EngineConfig,
    input: R,
    mut output: W,
) -> Result<BalanceEngine, BalanceError> {
    let mut engine = BalanceEngine::new(config)?;
    writeln!(output, "{}", render_snapshot(&engine.snapshot()))?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Some(Command::Equation(text)) => {
                engine.set_equation(&text);
            }
            Some(Command::Item(direction, side, item)) => match direction {
                Direction::Increment => {
                    engine.increment(side, &item);
                }
                Direction::Decrement => {
                    engine.decrement(side, &item);
                }
            },
            Some(Command::Weight(item, value)) => {
                engine.override_weight(&item, &value);
            }
            Some(Command::Toggle) => {
                engine.toggle_reveal();
            }
            Some(Command::Show) => {}
            Some(Command::Quit) => break,
            None => {
                writeln!(
                    output,
                    "commands: eq <text> | + <side> <item> | - <side> <item> | w <item> <value> | toggle | show | quit"
                )?;
                continue;
            }
        }
        writeln!(output, "{}", render_snapshot(&engine.snapshot()))?;
    }
    Ok(engine)
}

#[allow(dead_code)]
pub fn balance_examples(example: usize) -> Result<(), BalanceError> {
    match example {
        0 => {
            // INTERACTIVE SESSION on stdin
            let stdin = io::stdin();
            run_session(EngineConfig::default(), stdin.lock(), io::stdout())?;
        }
        1 => {
            // PARSE AND SOLVE
            for input in ["2x + 3 = 5", "x + x = 4", "0x + 5 = 5", "5x + 1 = 2x + 7", "x = x", "x + 1 = x"] {
                let equation = Equation::parse(input)?;
                let solution = solve_equation(&equation);
                println!("{}  ->  {}  ->  {}", input, equation, solution);
            }
            // not an equation: the pans are emptied
            if let Err(e) = Equation::parse("2x + 3") {
                println!("2x + 3 -> {}", e);
            }
        }
        2 => {
            // THREE ITEM TYPES, weight table shown
            let mut engine = BalanceEngine::new(EngineConfig::preset(Variant::ThreeItems))?;
            engine.set_equation("2x + 1 = x + 4");
            println!("{}", render_snapshot(&engine.snapshot()));
            engine.increment(Side::Right, "cylinder");
            println!("{}", render_snapshot(&engine.snapshot()));
            engine.override_weight("cylinder", "0");
            println!("{}", render_snapshot(&engine.snapshot()));
        }
        3 => {
            // TWO ITEM TYPES, answer hidden until revealed
            let mut engine = BalanceEngine::new(EngineConfig::preset(Variant::TwoItems))?;
            engine.set_equation("3x = 1");
            println!("{}", render_snapshot(&engine.snapshot()));
            engine.toggle_reveal();
            println!("{}", render_snapshot(&engine.snapshot()));
        }
        _ => {
            println!("no example {}", example);
        }
    }
    Ok(())
}
