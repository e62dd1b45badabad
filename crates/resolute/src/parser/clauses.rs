//! nom grammar for one clause line: `[-]Pred(t, ...) | ...`

use crate::fol::{Literal, Term};
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt},
    multi::{separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parse a predicate, constant or variable name
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    take_while1(is_identifier_char)(input)
}

/// Parse a term; the name alone decides variable or constant
fn parse_term(input: &str) -> IResult<&str, Term> {
    map(parse_identifier, Term::from_name)(input)
}

/// Parse a parenthesized argument list
fn parse_arguments(input: &str) -> IResult<&str, Vec<Term>> {
    delimited(
        pair(char('('), multispace0),
        separated_list0(tuple((multispace0, char(','), multispace0)), parse_term),
        pair(multispace0, char(')')),
    )(input)
}

/// Parse a literal; a bare predicate without arguments is propositional
fn parse_literal(input: &str) -> IResult<&str, Literal> {
    let (input, _) = multispace0(input)?;
    let (input, negated) = opt(terminated(char('-'), multispace0))(input)?;
    let (input, predicate) = parse_identifier(input)?;
    let (input, terms) = opt(preceded(multispace0, parse_arguments))(input)?;
    let (input, _) = multispace0(input)?;

    Ok((
        input,
        Literal::new(negated.is_some(), predicate, terms.unwrap_or_default()),
    ))
}

/// Parse a whole clause line; nothing may follow the last literal
pub(super) fn parse_clause(input: &str) -> IResult<&str, Vec<Literal>> {
    all_consuming(separated_list1(char('|'), parse_literal))(input)
}
