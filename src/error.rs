// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{parser::MAX_NESTING_DEPTH, position::Position, range::Range};

#[derive(Debug, PartialEq)]
pub enum LexError {
    UnexpectedCharacter(char, Position),

    // The literal text and its range.
    IntegerOverflow(String, Range),
}

#[derive(Debug, PartialEq)]
pub enum ParseError {
    UnmatchedParenthesis(Range),
    MissingOperand(Range),
    UnexpectedToken(Range),
    UnexpectedEndOfInput(Position),

    // Located at the parenthesis or operator that goes past `MAX_NESTING_DEPTH`.
    NestingTooDeep(Range),
}

/// Errors raised while evaluating, all located at the operator token.
#[derive(Debug, PartialEq)]
pub enum EvaluationError {
    DivisionByZero(Range),
    ModuloByZero(Range),
    InvalidShiftAmount(i64, Range),
    Overflow(Range),
}

#[derive(Debug, PartialEq)]
pub enum CalcError {
    Lex(LexError),
    Parse(ParseError),
    Evaluation(EvaluationError),
}

impl CalcError {
    /// The range of text to highlight when reporting this error.
    pub fn range(&self) -> Range {
        match self {
            CalcError::Lex(LexError::UnexpectedCharacter(_, position)) => {
                Range::from_position(position)
            }
            CalcError::Lex(LexError::IntegerOverflow(_, range)) => *range,
            CalcError::Parse(error) => match error {
                ParseError::UnmatchedParenthesis(range)
                | ParseError::MissingOperand(range)
                | ParseError::UnexpectedToken(range)
                | ParseError::NestingTooDeep(range) => *range,
                ParseError::UnexpectedEndOfInput(position) => Range::from_position(position),
            },
            CalcError::Evaluation(error) => match error {
                EvaluationError::DivisionByZero(range)
                | EvaluationError::ModuloByZero(range)
                | EvaluationError::InvalidShiftAmount(_, range)
                | EvaluationError::Overflow(range) => *range,
            },
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LexError::UnexpectedCharacter(c, _) => write!(f, "Unexpected character '{}'.", c),
            LexError::IntegerOverflow(text, _) => {
                write!(f, "Integer literal {} does not fit in 64 bits.", text)
            }
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParseError::UnmatchedParenthesis(_) => f.write_str("Unmatched parenthesis."),
            ParseError::MissingOperand(_) => f.write_str("Missing operand."),
            ParseError::UnexpectedToken(_) => f.write_str("Unexpected token."),
            ParseError::UnexpectedEndOfInput(_) => {
                f.write_str("Unexpected end of input, expect an operand.")
            }
            ParseError::NestingTooDeep(_) => write!(
                f,
                "Expression is nested too deeply, the limit is {} levels.",
                MAX_NESTING_DEPTH
            ),
        }
    }
}

impl Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EvaluationError::DivisionByZero(_) => f.write_str("Division by zero."),
            EvaluationError::ModuloByZero(_) => f.write_str("Modulo by zero."),
            EvaluationError::InvalidShiftAmount(amount, _) => write!(
                f,
                "Shift amount {} is out of range, expect 0 to {}.",
                amount,
                i64::BITS - 1
            ),
            EvaluationError::Overflow(_) => f.write_str("Arithmetic overflow."),
        }
    }
}

impl Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CalcError::Lex(error) => write!(f, "{}", error),
            CalcError::Parse(error) => write!(f, "{}", error),
            CalcError::Evaluation(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for LexError {}
impl std::error::Error for ParseError {}
impl std::error::Error for EvaluationError {}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Lex(error) => Some(error),
            CalcError::Parse(error) => Some(error),
            CalcError::Evaluation(error) => Some(error),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(error: LexError) -> Self {
        CalcError::Lex(error)
    }
}

impl From<ParseError> for CalcError {
    fn from(error: ParseError) -> Self {
        CalcError::Parse(error)
    }
}

impl From<EvaluationError> for CalcError {
    fn from(error: EvaluationError) -> Self {
        CalcError::Evaluation(error)
    }
}
