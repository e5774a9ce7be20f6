//! one side of a linear equation as a sum of signed terms.
//!
//! Two stages: [`tokenize_side`] cuts the whitespace-free side into term strings,
//! [`parse_term`] reads coefficient and variable name of each of them.
//! ```
//! use RustedBalance::symbolic::parse_terms::parse_side;
//! let terms = parse_side("2x+3-x");
//! assert_eq!(terms.coefficient("x"), 1);
//! assert_eq!(terms.coefficient("constant"), 3);
//! ```
use itertools::Itertools;
use nom::{
    IResult, Parser,
    bytes::complete::{take_till, take_while1},
    character::complete::{digit1, one_of},
    combinator::{opt, recognize},
    sequence::{pair, preceded},
};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// name under which terms without letters are accumulated
pub const CONSTANT_TERM: &str = "constant";

/// signed coefficient and the name of the variable it multiplies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub name: String,
    pub coefficient: i64,
}

impl Term {
    pub fn new(name: &str, coefficient: i64) -> Self {
        Term {
            name: name.to_string(),
            coefficient,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.name == CONSTANT_TERM
    }
}

/// cut a side into terms: a boundary goes before every '+' or '-' that is not the first char.
/// "2x+3-x" -> ["2x", "+3", "-x"]. An empty side gives one empty term
pub fn tokenize_side(side: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut start = 0;
    for (i, c) in side.char_indices() {
        if i > 0 && (c == '+' || c == '-') {
            terms.push(side[start..i].trim());
            start = i;
        }
    }
    terms.push(side[start..].trim());
    terms
}

/// longest signed integer prefix: optional sign followed by at least one digit
pub fn coefficient_literal(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1)).parse(input)
}

/// first maximal run of ASCII letters anywhere in the term
pub fn first_letter_run(input: &str) -> IResult<&str, &str> {
    preceded(
        take_till(|c: char| c.is_ascii_alphabetic()),
        take_while1(|c: char| c.is_ascii_alphabetic()),
    )
    .parse(input)
}

// "-0", "+0", "00" must stay zero: every digit run is parsed for its value, only a missing one
// falls back to the implicit unit coefficient
fn literal_value(literal: &str) -> i64 {
    match literal.parse::<i64>() {
        Ok(value) => value,
        // digit run too long for i64
        Err(_) if literal.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// read one term string. Never fails: a term with neither digits nor letters is a zero constant
pub fn parse_term(term: &str) -> Term {
    let name = first_letter_run(term).ok().map(|(_, letters)| letters);
    let coefficient = match coefficient_literal(term) {
        Ok((_, literal)) => literal_value(literal),
        Err(_) => match name {
            Some(_) if term.starts_with('-') => -1,
            Some(_) => 1,
            // empty or symbol-only term
            None => 0,
        },
    };
    Term {
        name: name.unwrap_or(CONSTANT_TERM).to_string(),
        coefficient,
    }
}

/// accumulated coefficients of one side, keyed by variable name (and [`CONSTANT_TERM`])
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideTerms {
    terms: BTreeMap<String, i64>,
}

impl SideTerms {
    pub fn new() -> Self {
        SideTerms::default()
    }

    /// same-name terms are summed: x + x -> 2x
    pub fn add(&mut self, term: Term) {
        let entry = self.terms.entry(term.name).or_insert(0);
        *entry = entry.saturating_add(term.coefficient);
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.terms.get(name).copied()
    }

    /// coefficient of the name, 0 if the name never appeared
    pub fn coefficient(&self, name: &str) -> i64 {
        self.get(name).unwrap_or(0)
    }

    pub fn constant(&self) -> i64 {
        self.coefficient(CONSTANT_TERM)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.terms.iter().map(|(name, c)| (name.as_str(), *c))
    }

    /// names of the variables on this side, the constant excluded
    pub fn variables(&self) -> Vec<&str> {
        self.terms
            .keys()
            .map(String::as_str)
            .filter(|name| *name != CONSTANT_TERM)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<Term> for SideTerms {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut side = SideTerms::new();
        for term in iter {
            side.add(term);
        }
        side
    }
}

impl<const N: usize> From<[(&str, i64); N]> for SideTerms {
    fn from(pairs: [(&str, i64); N]) -> Self {
        pairs
            .into_iter()
            .map(|(name, c)| Term::new(name, c))
            .collect()
    }
}

impl Display for SideTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .terms
            .iter()
            .map(|(name, c)| format!("{}: {}", name, c))
            .join(", ");
        write!(f, "{{{}}}", body)
    }
}

/// tokenize and parse a whitespace-free side
pub fn parse_side(side: &str) -> SideTerms {
    tokenize_side(side).into_iter().map(parse_term).collect()
}
