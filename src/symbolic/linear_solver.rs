//! solution of a*x + b = c*x + d for the single unknown x
use crate::symbolic::parse_equation::Equation;
use log::{info, warn};
use std::fmt::{self, Display};
use strum_macros::Display;

/// the only variable name the solver resolves; other names are kept as ordinary terms
pub const UNKNOWN: &str = "x";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SolutionKind {
    /// a != c, one finite root
    #[strum(serialize = "unique solution")]
    Unique,
    /// a == c and b != d: the division gives an infinity
    #[strum(serialize = "no solution")]
    NoSolution,
    /// a == c and b == d: every x satisfies the equation, the division gives NaN
    #[strum(serialize = "any x is a solution")]
    AnySolution,
}

/// value of x as computed by real division, plus how to read it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub value: f64,
    pub kind: SolutionKind,
}

impl Solution {
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SolutionKind::Unique => write!(f, "x = {}", self.value),
            _ => write!(f, "x = {} ({})", self.value, self.kind),
        }
    }
}

/// coefficients a, b, c, d of a*x + b = c*x + d
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearCoefficients {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl LinearCoefficients {
    pub fn from_equation(equation: &Equation) -> Self {
        LinearCoefficients {
            a: equation.left.coefficient(UNKNOWN),
            b: equation.left.constant(),
            c: equation.right.coefficient(UNKNOWN),
            d: equation.right.constant(),
        }
    }

    /// x = (d - b) / (a - c). The division is always performed, a == c gives inf or NaN.
    /// Differences are taken in i128 so extreme coefficients do not overflow
    pub fn solve(&self) -> Solution {
        let numerator = self.d as i128 - self.b as i128;
        let denominator = self.a as i128 - self.c as i128;
        let value = numerator as f64 / denominator as f64;
        let kind = match (denominator, numerator) {
            (0, 0) => SolutionKind::AnySolution,
            (0, _) => SolutionKind::NoSolution,
            _ => SolutionKind::Unique,
        };
        Solution { value, kind }
    }
}

pub fn solve_equation(equation: &Equation) -> Solution {
    let coefficients = LinearCoefficients::from_equation(equation);
    let solution = coefficients.solve();
    match solution.kind {
        SolutionKind::Unique => info!("{:?}: {}", coefficients, solution),
        _ => warn!("{:?}: {}", coefficients, solution),
    }
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solve_str(input: &str) -> Solution {
        solve_equation(&Equation::parse(input).unwrap())
    }

    #[test]
    fn test_simple_solution() {
        let s = solve_str("2x+3=5");
        assert_eq!(s.kind, SolutionKind::Unique);
        assert_relative_eq!(s.value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fractional_and_negative_solutions() {
        assert_relative_eq!(solve_str("3x=1").value, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(solve_str("x+7=2").value, -5.0, epsilon = 1e-12);
        // unknown on both sides
        assert_relative_eq!(solve_str("5x+1=2x+7").value, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coefficients_from_equation() {
        let eq = Equation::parse("2x+3=-x+9").unwrap();
        assert_eq!(
            LinearCoefficients::from_equation(&eq),
            LinearCoefficients { a: 2, b: 3, c: -1, d: 9 }
        );
    }

    #[test]
    fn test_identity_gives_nan() {
        let s = solve_str("x=x");
        assert_eq!(s.kind, SolutionKind::AnySolution);
        assert!(s.value.is_nan());
        assert!(!s.is_finite());
    }

    #[test]
    fn test_contradiction_gives_infinity() {
        let s = solve_str("x+1=x");
        assert_eq!(s.kind, SolutionKind::NoSolution);
        assert_eq!(s.value, f64::NEG_INFINITY);
        let s = solve_str("0x=5");
        assert_eq!(s.value, f64::INFINITY);
    }

    #[test]
    fn test_only_x_is_solved() {
        // y is accumulated but not an unknown: 0 = 4 - 0
        let s = solve_str("2y=4");
        assert_eq!(s.kind, SolutionKind::NoSolution);
    }

    #[test]
    fn test_extreme_coefficients_do_not_overflow() {
        let c = LinearCoefficients {
            a: i64::MAX,
            b: i64::MIN,
            c: i64::MIN,
            d: i64::MAX,
        };
        let s = c.solve();
        assert_eq!(s.kind, SolutionKind::Unique);
        assert_relative_eq!(s.value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(solve_str("2x=4").to_string(), "x = 2");
        assert_eq!(solve_str("x=x").to_string(), "x = NaN (any x is a solution)");
    }
}
