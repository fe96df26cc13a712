// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    ast::Expression,
    error::CalcError,
    evaluator::{Evaluation, evaluate_expression},
    formatter::format_evaluation,
    lexer::lex_from_str,
    parser::parse_from_tokens,
};

mod bits;
mod error_printer;
mod lexer;
mod parser;

pub mod ast;
pub mod ast_printer;
pub mod error;
pub mod evaluator;
pub mod formatter;
pub mod position;
pub mod range;
pub mod token;

/// Lexes and parses the expression text into an expression tree.
pub fn parse_from_str(source_text: &str) -> Result<Expression, CalcError> {
    let tokens = lex_from_str(source_text)?;
    let expression = parse_from_tokens(&tokens)?;
    Ok(expression)
}

/// Evaluates the expression text, returning the value and the trace of
/// every operator application.
///
/// Nothing is carried over between calls.
pub fn calculate(source_text: &str) -> Result<Evaluation, CalcError> {
    let expression = parse_from_str(source_text)?;
    let evaluation = evaluate_expression(&expression)?;
    Ok(evaluation)
}

/// Evaluates the expression text and renders the trace as text, see `format_evaluation`.
pub fn render(source_text: &str) -> Result<String, CalcError> {
    let evaluation = calculate(source_text)?;
    Ok(format_evaluation(&evaluation))
}
