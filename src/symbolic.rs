#![allow(non_snake_case)]
/// helpers for whitespace stripping and separator search
pub mod utils;
///________________________________________________________________________________________________________________________________
/// # Term tokenizer and term parser
/// turns one side of an equation into accumulated coefficients per variable name
///# Example
/// ```
/// use RustedBalance::symbolic::parse_terms::{parse_side, tokenize_side};
/// assert_eq!(tokenize_side("2x+3-x"), vec!["2x", "+3", "-x"]);
/// let side = parse_side("2x+3-x");
/// assert_eq!(side.coefficient("x"), 1);
/// ```
pub mod parse_terms;
///________________________________________________________________________________________________________________________________
/// # Equation normalizer
/// strips whitespace, checks for exactly one '=' and parses both sides
///# Example
/// ```
/// use RustedBalance::symbolic::parse_equation::Equation;
/// let eq = Equation::parse("2x + 3 = 5").unwrap();
/// assert_eq!(eq.left.coefficient("x"), 2);
/// assert_eq!(eq.right.constant(), 5);
/// assert!(Equation::parse("x = 1 = 2").is_err());
/// ```
pub mod parse_equation;
///________________________________________________________________________________________________________________________________
/// # Linear solver
/// x = (d - b) / (a - c) for a*x + b = c*x + d
///# Example
/// ```
/// use RustedBalance::symbolic::parse_equation::Equation;
/// use RustedBalance::symbolic::linear_solver::solve_equation;
/// let solution = solve_equation(&Equation::parse("5x + 1 = 2x + 7").unwrap());
/// assert_eq!(solution.value, 2.0);
/// ```
pub mod linear_solver;
