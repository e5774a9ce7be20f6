//! whole equation string -> pair of [`SideTerms`]
use crate::errors::BalanceError;
use crate::symbolic::parse_terms::{SideTerms, parse_side};
use crate::symbolic::utils::{find_char_positions, split_at_positions, strip_whitespace};
use log::debug;
use std::fmt::{self, Display};

/// both sides of a linear equation with exactly one '='
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equation {
    pub left: SideTerms,
    pub right: SideTerms,
}

impl Equation {
    /// strip whitespace, split on '=' and parse each side independently.
    /// Anything but exactly two pieces is an [`BalanceError::InvalidEquation`]
    pub fn parse(input: &str) -> Result<Equation, BalanceError> {
        let stripped = strip_whitespace(input);
        let separators = find_char_positions(&stripped, '=');
        if separators.len() != 1 {
            debug!(
                "equation {:?} rejected: {} separators",
                stripped,
                separators.len()
            );
            return Err(BalanceError::InvalidEquation {
                separators: separators.len(),
            });
        }
        let sides = split_at_positions(&stripped, &separators);
        let equation = Equation {
            left: parse_side(sides[0]),
            right: parse_side(sides[1]),
        };
        debug!(
            "parsed {:?}: left {}, right {}",
            stripped, equation.left, equation.right
        );
        Ok(equation)
    }

    /// mirror image of the equation: right = left
    pub fn swapped(&self) -> Equation {
        Equation {
            left: self.right.clone(),
            right: self.left.clone(),
        }
    }
}

impl Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}
